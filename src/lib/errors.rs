//! Custom error types for bamfilt operations.

use thiserror::Error;

/// Result type alias for bamfilt operations
pub type Result<T> = std::result::Result<T, BamfiltError>;

/// Error type for bamfilt operations
#[derive(Error, Debug)]
pub enum BamfiltError {
    /// Input file is missing
    #[error("{description} '{path}' does not exist")]
    InputNotFound {
        /// Human-readable description of the file
        description: String,
        /// Path that was checked
        path: String,
    },

    /// Input is not a parseable BAM stream
    #[error("Invalid BAM file '{path}': {reason}")]
    InvalidBam {
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },

    /// Output could not be created or written
    #[error("Failed to write '{path}': {reason}")]
    WriteFailed {
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },
}
