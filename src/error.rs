use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderReportError {
    #[error("Schema validation failed: {0}")]
    Schema(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Could not read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Excel report generation failed: {0}")]
    ExcelGeneration(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OrderReportError>;
