//! Error types for md2docx library.

use std::io;
use thiserror::Error;

/// Result type alias for md2docx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
///
/// Line classification itself never fails; every error originates at an
/// I/O boundary or in caller-supplied configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source document is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A section or subsection pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Error packaging the DOCX archive.
    #[error("DOCX packaging error: {0}")]
    Docx(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A style sheet could not be loaded or saved.
    #[error("Style sheet error: {0}")]
    StyleSheet(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
