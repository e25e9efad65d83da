//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading an event log or OCEL document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed timestamp '{value}' on event '{event_id}'")]
    MalformedTimestamp { event_id: String, value: String },
}

/// Errors raised while locating input files
#[derive(Error, Debug)]
pub enum InputError {
    #[error("No file matched pattern '{pattern}' in {dir}")]
    MissingInput { pattern: String, dir: String },
}

/// Errors that can occur while encoding a canvas as PNG
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Compression failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
