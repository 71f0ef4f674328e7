use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all pkgup operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PkgupError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed `package.json`.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check that the project directory contains a valid package.json"))]
    Manifest { message: String },

    /// An external command could not be run or exited unsuccessfully.
    #[error("Command failed: {message}")]
    Process { message: String },

    /// Output of an external command could not be understood.
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Reading an answer from the terminal failed, or an answer was invalid.
    #[error("Prompt error: {message}")]
    Prompt { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
