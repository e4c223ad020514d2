//! Error module
//!
//! Defines the unified error type for the records-to-csv crate using
//! `thiserror`. All fallible operations in the crate return this type;
//! errors from the underlying CSV writer, the file system, and the JSON
//! parser are converted automatically via `From`.

use thiserror::Error;

/// The main error type for the records-to-csv crate.
///
/// # Error Categories
///
/// - **Input errors**: the constructor input was not an array of key-value
///   records, or a disk write was requested with an empty path
/// - **Collaborator errors**: failures propagated verbatim from the CSV
///   writer, the file system, or the JSON parser
/// - **Cast errors**: a user-supplied cast hook rejected a value
///
/// All errors are fail-fast: they surface to the immediate caller with the
/// underlying cause attached, and the crate performs no logging or retries.
#[derive(Error, Debug)]
pub enum RecordsToCsvError {
    /// The constructor input was not an array of key-value records.
    ///
    /// Raised synchronously at construction time; no converter is created
    /// when this error occurs.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A disk write was requested with an empty path.
    ///
    /// Raised before any file-system access takes place.
    #[error("Empty filename when trying to write to disk")]
    EmptyPath,

    /// Error from the underlying CSV writer.
    ///
    /// Should not occur for well-formed records; all quoting and escaping is
    /// handled by the csv crate.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// General I/O error.
    ///
    /// This error occurs for file system operations like probing, writing,
    /// or appending files. A failed write may leave a partially written
    /// file; no rollback is attempted.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    ///
    /// This error occurs when ingesting records from JSON text that is not
    /// valid JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A user-supplied cast hook rejected a value.
    #[error("Cast error: {0}")]
    Cast(String),
}
