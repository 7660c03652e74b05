//! File loaders: turn an uploaded roster file into in-memory source data.
//!
//! Everything is normalized to plain text at this boundary — grids of
//! strings for tabular files, paragraph strings for documents — so the core
//! never sees typed spreadsheet cells.

use std::path::Path;

use calamine::{Data, DataType, Reader};
use csv::ReaderBuilder;

use pluxee_model::{OrderError, Result};

use crate::grid::RosterGrid;

/// What kind of source a roster file holds.
#[derive(Debug)]
pub enum RosterSource {
    /// CSV/XLSX/XLS: a raw 2-D grid, header row not yet identified.
    Tabular(RosterGrid),
    /// DOCX: ordered non-empty trimmed paragraph lines.
    Document(Vec<String>),
}

/// Load a roster file, dispatching on its extension.
///
/// `.csv` and `.xlsx`/`.xls` yield [`RosterSource::Tabular`]; `.docx`
/// yields [`RosterSource::Document`]. Anything else is rejected.
pub fn load_roster(path: &Path) -> Result<RosterSource> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(RosterSource::Tabular(load_csv(path)?)),
        "xlsx" | "xls" => Ok(RosterSource::Tabular(load_excel(path)?)),
        "docx" => Ok(RosterSource::Document(load_docx(path)?)),
        other => Err(OrderError::Source(format!(
            "unsupported roster format '{other}' (expected csv, xlsx, xls, or docx)"
        ))),
    }
}

/// Read a CSV file into a raw grid. No header handling; flexible record
/// lengths so ragged exports still load.
pub fn load_csv(path: &Path) -> Result<RosterGrid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| OrderError::Source(format!("failed to open csv: {error}")))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|error| OrderError::Source(format!("bad csv record: {error}")))?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }
    tracing::debug!(rows = rows.len(), path = %path.display(), "loaded csv roster");
    Ok(RosterGrid::new(rows))
}

/// Read the first worksheet of an XLSX/XLS file into a raw grid.
///
/// Date-typed cells are rendered as `DD/MM/YYYY` so the date normalizer
/// sees the same text a CSV export would carry.
pub fn load_excel(path: &Path) -> Result<RosterGrid> {
    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|error| OrderError::Source(format!("failed to open workbook: {error}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| OrderError::Source("workbook has no worksheets".to_string()))?
        .map_err(|error| OrderError::Source(format!("failed to read worksheet: {error}")))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    tracing::debug!(rows = rows.len(), path = %path.display(), "loaded spreadsheet roster");
    Ok(RosterGrid::new(rows))
}

fn cell_text(cell: &Data) -> String {
    if cell.is_empty() {
        return String::new();
    }
    if let Some(datetime) = cell.as_datetime() {
        return datetime.format("%d/%m/%Y").to_string();
    }
    match cell.as_string() {
        Some(text) => text.trim().to_string(),
        None => cell.to_string().trim().to_string(),
    }
}

/// Read the paragraphs of a DOCX file, trimmed, empties dropped, in
/// document order.
pub fn load_docx(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path)?;
    let docx = docx_rs::read_docx(&bytes)
        .map_err(|error| OrderError::Source(format!("failed to parse docx: {error}")))?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let text = paragraph_text(paragraph);
            let text = text.trim();
            if !text.is_empty() {
                lines.push(text.to_string());
            }
        }
    }
    tracing::debug!(lines = lines.len(), path = %path.display(), "loaded docx roster");
    Ok(lines)
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        paragraph_child_text(child, &mut buffer);
    }
    buffer
}

fn paragraph_child_text(child: &docx_rs::ParagraphChild, buffer: &mut String) {
    match child {
        docx_rs::ParagraphChild::Run(run) => run_text(run, buffer),
        docx_rs::ParagraphChild::Hyperlink(link) => {
            for link_child in &link.children {
                paragraph_child_text(link_child, buffer);
            }
        }
        docx_rs::ParagraphChild::Insert(insert) => {
            for insert_child in &insert.children {
                if let docx_rs::InsertChild::Run(run) = insert_child {
                    run_text(run, buffer);
                }
            }
        }
        _ => {}
    }
}

fn run_text(run: &docx_rs::Run, buffer: &mut String) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text) => buffer.push_str(&text.text),
            docx_rs::RunChild::InstrTextString(text) => buffer.push_str(text),
            docx_rs::RunChild::Tab(_) => buffer.push(' '),
            docx_rs::RunChild::Break(_) => buffer.push(' '),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn csv_loads_as_raw_grid() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "Nome,CPF,Nascimento").expect("write");
        writeln!(file, "JOAO DA SILVA,12345678901,01/01/1990").expect("write");
        writeln!(file, "MARIA,987").expect("write");

        let grid = load_csv(file.path()).expect("load");
        assert_eq!(grid.rows.len(), 3);
        assert_eq!(grid.rows[0][0], "Nome");
        // Flexible lengths: the short row survives.
        assert_eq!(grid.rows[2].len(), 2);
    }

    #[test]
    fn xlsx_loads_with_dates_rendered_day_first() {
        use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("funcionarios.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Nome").expect("write");
        sheet.write_string(0, 1, "CPF").expect("write");
        sheet.write_string(0, 2, "Nascimento").expect("write");
        sheet.write_string(1, 0, "JOAO DA SILVA").expect("write");
        sheet.write_string(1, 1, "12345678901").expect("write");
        let date_format = Format::new().set_num_format("dd/mm/yyyy");
        let birth = ExcelDateTime::from_ymd(1990, 1, 1).expect("date");
        sheet
            .write_datetime_with_format(1, 2, &birth, &date_format)
            .expect("write");
        workbook.save(&path).expect("save workbook");

        let grid = load_excel(&path).expect("load");
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[0][0], "Nome");
        assert_eq!(grid.rows[1][1], "12345678901");
        // The date-typed cell comes back as text the normalizer accepts.
        assert_eq!(grid.rows[1][2], "01/01/1990");
    }

    #[test]
    fn docx_paragraphs_load_trimmed_in_order() {
        use docx_rs::{Docx, Paragraph, Run};

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("funcionarios.docx");
        let file = std::fs::File::create(&path).expect("create docx");
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("JOAO DA SILVA")))
            .add_paragraph(Paragraph::new())
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("  123.456.789-01  ")))
            .build()
            .pack(file)
            .expect("pack docx");

        let lines = load_docx(&path).expect("load");
        assert_eq!(lines, vec!["JOAO DA SILVA", "123.456.789-01"]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = load_roster(Path::new("roster.pdf"));
        assert!(matches!(result, Err(OrderError::Source(_))));
    }
}
