use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while loading and reporting reservations.
#[derive(Error, Debug)]
pub enum VarausError {
    /// The reservation file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not split into the expected number of fields.
    #[error("Line {line}: expected 10 or 11 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// A single field on a line could not be converted to its typed value.
    #[error("Line {line}: invalid {field} '{value}': {reason}")]
    Field {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A reservation id appeared more than once in the file.
    #[error("Line {line}: duplicate reservation id {id}")]
    DuplicateId { line: usize, id: u32 },

    /// A reservation id requested on the command line does not exist.
    #[error("No reservation with id {0}")]
    UnknownReservation(u32),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the varaus crates.
pub type Result<T> = std::result::Result<T, VarausError>;
