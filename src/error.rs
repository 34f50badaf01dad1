//! Error types for batchval.

use thiserror::Error;

/// Result type for batchval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading inputs.
///
/// Validation findings (invalid partitions, understated makespans) are not
/// errors in this sense — they are collected into
/// [`ValidationError`](crate::validation::ValidationError) lists by the
/// engine. This enum covers the faults that abort a run before validation
/// can be attempted.
#[derive(Error, Debug)]
pub enum Error {
    /// Instance text does not parse.
    #[error("malformed instance: {0}")]
    MalformedInstance(String),

    /// Solution text does not parse.
    ///
    /// Note: a solution file with fewer than two non-blank records is *not*
    /// malformed — the parser degrades it to an empty solution so that the
    /// failure is reported by the validator as missing tasks.
    #[error("malformed solution: {0}")]
    MalformedSolution(String),

    /// I/O error (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
