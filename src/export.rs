//! Excel report output
//!
//! Serializes the composed report as a single-sheet xlsx file: one bold
//! header row, then the ordered category rows, numbers written with a 0.000
//! format. No index column.

use crate::error::{OrderReportError, Result};
use crate::report::Report;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Default output name, stamped with the generation time.
pub fn default_report_filename() -> String {
    format!(
        "Final_Classification_Report_{}.xlsx",
        Local::now().format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Write the report to `output_path`.
pub fn write_report(report: &Report, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format("0.000");

    for (col, label) in report.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, label, &header_format)
            .map_err(|e| OrderReportError::ExcelGeneration(e.to_string()))?;
    }

    for (row_idx, row) in report.rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        worksheet
            .write_string(excel_row, 0, &row.group)
            .map_err(|e| OrderReportError::ExcelGeneration(e.to_string()))?;
        for (col, value) in row.values.iter().enumerate() {
            worksheet
                .write_number_with_format(excel_row, (col + 1) as u16, *value, &number_format)
                .map_err(|e| OrderReportError::ExcelGeneration(e.to_string()))?;
        }
    }

    workbook
        .save(output_path)
        .map_err(|e| OrderReportError::ExcelGeneration(e.to_string()))?;

    Ok(())
}
