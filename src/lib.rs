//! Customer order classification report core
//!
//! The pipeline is a pure function from spreadsheet rows to report rows:
//! column resolution, numeric normalization, row filtering, category
//! mapping, grouped aggregation, and fixed-order composition. The binary
//! is thin IO glue around [`report::generate_report`].

pub mod aggregate;
pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod normalizer;
pub mod reader;
pub mod report;
pub mod schema;

pub use category::Category;
pub use error::{OrderReportError, Result};
pub use reader::{CellValue, Sheet};
pub use report::{generate_report, Report, ReportRow};
pub use schema::SchemaBinding;
