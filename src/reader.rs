//! Spreadsheet ingest
//!
//! Reads the uploaded workbook into a header-labeled row model.
//! The export format carries a 4-row banner before the header row, so the
//! preamble is skipped before headers are read.

use crate::error::{OrderReportError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// Banner rows before the header row in the source export.
pub const DEFAULT_SKIP_ROWS: usize = 4;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// One spreadsheet cell, reduced to what the pipeline distinguishes.
///
/// `Empty` is the "missing" state: blank cells and cell errors land here.
/// Everything else is either text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Cell content as text. Missing cells render as the empty string.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Empty => String::new(),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Text(b.to_string()),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}

/// Header labels in original column order plus data rows padded to header width.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Collapse internal whitespace runs to a single space and trim.
///
/// The source export is inconsistent about header spacing
/// ("Classification  Group" vs "Classification Group"), so every header is
/// canonicalized before any lookup.
pub fn normalize_header(label: &str) -> String {
    WHITESPACE.replace_all(label.trim(), " ").into_owned()
}

/// Read one worksheet into a [`Sheet`].
///
/// `sheet` selects a worksheet by name; when `None` the first sheet is used.
/// `skip_rows` counts banner rows from the top of the sheet; the next row is
/// taken as the header.
pub fn read_workbook(path: &Path, sheet: Option<&str>, skip_rows: usize) -> Result<Sheet> {
    if !path.exists() {
        return Err(OrderReportError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name)?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| OrderReportError::Schema("workbook has no worksheets".into()))??,
    };

    // calamine ranges start at the first non-empty cell; skip_rows counts
    // absolute sheet rows, so discount any leading fully-empty rows.
    let offset = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let skip = skip_rows.saturating_sub(offset);

    let mut rows_iter = range.rows().skip(skip);

    let header_row = rows_iter.next().ok_or_else(|| {
        OrderReportError::Schema(format!(
            "no header row found after skipping {} banner row(s)",
            skip_rows
        ))
    })?;

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&CellValue::from(cell).to_text()))
        .collect();

    let width = headers.len();
    let rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| {
            let mut cells: Vec<CellValue> = row.iter().take(width).map(CellValue::from).collect();
            cells.resize(width, CellValue::Empty);
            cells
        })
        .collect();

    Ok(Sheet { headers, rows })
}
