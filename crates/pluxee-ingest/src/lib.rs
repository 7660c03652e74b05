//! Roster ingestion for Pluxee order generation.
//!
//! Two extraction strategies produce [`pluxee_model::RawPersonRecord`]s:
//! tabular (CSV/XLSX/XLS grids with fuzzy header resolution) and document
//! (DOCX paragraphs classified by a line state machine).

pub mod columns;
pub mod document;
pub mod extract;
pub mod grid;
pub mod loader;

pub use columns::{BIRTH_DATE_FLOOR, resolve, resolve_columns};
pub use document::extract_document;
pub use extract::extract_tabular;
pub use grid::{RosterGrid, RosterTable};
pub use loader::{RosterSource, load_roster};

use pluxee_model::{RawPersonRecord, ResolvedColumns, Result};

/// Result of extracting a roster source: the records plus whether a birth
/// date was available per record or has to default uniformly.
#[derive(Debug)]
pub struct ExtractedRoster {
    pub records: Vec<RawPersonRecord>,
    /// Resolved header labels for tabular sources; document sources define
    /// their own fixed schema.
    pub columns: Option<ResolvedColumns>,
}

/// Run the strategy matching the loaded source.
///
/// # Errors
///
/// Propagates fatal input errors: an empty grid, or required fields with no
/// header cells to resolve against.
pub fn extract_roster(source: RosterSource) -> Result<ExtractedRoster> {
    match source {
        RosterSource::Tabular(grid) => {
            let table = grid.into_table()?;
            let columns = resolve_columns(&table)?;
            let records = extract_tabular(&table, &columns);
            tracing::info!(records = records.len(), "extracted tabular roster");
            Ok(ExtractedRoster {
                records,
                columns: Some(columns),
            })
        }
        RosterSource::Document(lines) => {
            if lines.is_empty() {
                return Err(pluxee_model::OrderError::EmptySource);
            }
            let records = extract_document(&lines);
            tracing::info!(records = records.len(), "extracted document roster");
            Ok(ExtractedRoster {
                records,
                columns: None,
            })
        }
    }
}
