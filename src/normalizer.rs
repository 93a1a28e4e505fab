//! Row normalization
//!
//! Projects raw sheet rows through the schema binding and cleans measure
//! cells into numbers. A measure cell that fails to parse becomes missing,
//! never an error: stray text in numeric columns is expected in this export.

use crate::reader::{CellValue, Sheet};
use crate::schema::SchemaBinding;

/// One transactional row, reduced to the fields the pipeline uses.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    /// Raw classification text; `None` when the cell is missing.
    pub group: Option<String>,
    /// Raw rate-freeze text; `None` when the cell is missing.
    pub rate_freeze: Option<String>,
    /// Date cell rendered as text (empty string when missing).
    pub date: String,
    /// Cleaned measure values, aligned with `binding.measures`.
    pub measures: Vec<Option<f64>>,
}

/// Reinterpret a measure cell as a number: text form, thousands-separator
/// commas stripped, then an `f64` parse. Failure is missing, not an error.
pub fn parse_measure(cell: &CellValue) -> Option<f64> {
    if cell.is_missing() {
        return None;
    }
    let cleaned = cell.to_text().replace(',', "");
    cleaned.trim().parse::<f64>().ok()
}

fn cell_text(cell: &CellValue) -> Option<String> {
    if cell.is_missing() {
        None
    } else {
        Some(cell.to_text())
    }
}

/// Project every sheet row into an [`OrderRecord`].
pub fn extract_records(sheet: &Sheet, binding: &SchemaBinding) -> Vec<OrderRecord> {
    sheet
        .rows
        .iter()
        .map(|row| OrderRecord {
            group: cell_text(&row[binding.group.index]),
            rate_freeze: cell_text(&row[binding.rate_freeze.index]),
            date: row[binding.date.index].to_text(),
            measures: binding
                .measures
                .iter()
                .map(|m| parse_measure(&row[m.index]))
                .collect(),
        })
        .collect()
}
