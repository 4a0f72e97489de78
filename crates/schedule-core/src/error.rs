// File: crates/schedule-core/src/error.rs
// Summary: Error type shared by the layout, render, and input modules.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("invalid schedule data: {0}")]
    InvalidData(String),

    #[error("invalid numeric input: {0:?}")]
    InvalidInput(String),

    #[error("drawing surface error: {0}")]
    Surface(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::InvalidData(err.to_string())
    }
}

impl From<csv::Error> for ChartError {
    fn from(err: csv::Error) -> Self {
        ChartError::InvalidData(err.to_string())
    }
}
