//! Error types for csvtable
//!
//! Parsing and serializing never fail. Errors only come from strict
//! delimiter validation and from the sink behind a [`crate::CsvWriter`].

use thiserror::Error;

/// Result type alias for csvtable operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur around the codec
#[derive(Error, Debug)]
pub enum CodecError {
    /// Delimiter was not exactly one character
    #[error("Invalid delimiter {0:?}: expected exactly one character")]
    InvalidDelimiter(String),

    /// Writing to the output sink failed
    #[error("Write error: {0}")]
    Io(#[from] std::io::Error),
}
