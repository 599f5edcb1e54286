//! Error types for the adapters around the rendering core.
//!
//! Rendering itself never fails. These cover loading the input document and
//! getting a finished frame out of the process.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid clock reading: {0}")]
    InvalidClock(String),

    #[error("Frame export failed: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, Error>;
