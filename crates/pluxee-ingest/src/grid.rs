//! Tabular roster sources: a raw 2-D grid of cell text with no assumed
//! header row.

use std::collections::BTreeMap;

use pluxee_model::{OrderError, Result};

/// How many leading rows are scanned when hunting for the header row.
const HEADER_SCAN_WINDOW: usize = 20;

/// Keywords whose joint presence marks a row as the header row.
const NAME_KEYWORD: &str = "nome";
const CPF_KEYWORD: &str = "cpf";

/// A raw grid of cell values as loaded from CSV or a spreadsheet.
///
/// Cells are already plain text; any typed-cell handling happens in the
/// loaders before the grid is built.
#[derive(Debug, Clone, Default)]
pub struct RosterGrid {
    pub rows: Vec<Vec<String>>,
}

impl RosterGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Locate the header row inside the scan window.
    ///
    /// The header is the first row whose concatenated lowercase text carries
    /// both the name and the CPF keyword as substrings. Falls back to row 0
    /// when nothing in the window qualifies.
    pub fn header_row_index(&self) -> usize {
        for (index, row) in self.rows.iter().take(HEADER_SCAN_WINDOW).enumerate() {
            let joined = row.join(" ").to_lowercase();
            if joined.contains(NAME_KEYWORD) && joined.contains(CPF_KEYWORD) {
                tracing::debug!(row = index, "header row located");
                return index;
            }
        }
        tracing::debug!("no header row within scan window, defaulting to row 0");
        0
    }

    /// Split the grid into header labels and data rows.
    ///
    /// # Errors
    ///
    /// [`OrderError::EmptySource`] when the grid holds no rows at all.
    pub fn into_table(self) -> Result<RosterTable> {
        if self.rows.is_empty() {
            return Err(OrderError::EmptySource);
        }
        let header_index = self.header_row_index();
        let mut rows = self.rows;
        let data_rows = rows.split_off(header_index + 1);
        let header_row = rows.pop().unwrap_or_default();

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.trim().to_lowercase())
            .collect();

        // First occurrence wins for duplicate labels; indexing stays stable.
        let mut index_by_label = BTreeMap::new();
        for (index, label) in headers.iter().enumerate() {
            index_by_label.entry(label.clone()).or_insert(index);
        }

        Ok(RosterTable {
            headers,
            index_by_label,
            rows: data_rows,
        })
    }
}

/// A tabular source after header detection: labeled columns plus data rows.
#[derive(Debug, Clone)]
pub struct RosterTable {
    /// Lower-cased, trimmed header labels in column order.
    pub headers: Vec<String>,
    index_by_label: BTreeMap<String, usize>,
    /// All rows after the header row.
    pub rows: Vec<Vec<String>>,
}

impl RosterTable {
    /// Cell text for `label` in the given data row, trimmed.
    ///
    /// Missing cells (short rows) read as empty.
    pub fn cell<'a>(&self, row: &'a [String], label: &str) -> &'a str {
        let Some(&index) = self.index_by_label.get(label) else {
            return "";
        };
        row.get(index).map(String::as_str).unwrap_or("").trim()
    }
}
