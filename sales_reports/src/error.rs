//! Error types for the sales_reports crate

use sales_data::SalesError;
use thiserror::Error;

/// Custom error types for the sales_reports crate
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error from schema validation of the input table
    #[error("Schema error: {0}")]
    Schema(#[from] SalesError),

    /// Error related to data conversion or output encoding
    #[error("Data error: {0}")]
    Data(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ReportError>;
