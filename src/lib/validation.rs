//! Input validation utilities
//!
//! Validation functions use structured error types from [`crate::errors`] so
//! callers get rich contextual information when validation fails.

use crate::errors::{BamfiltError, Result};
use std::path::Path;

/// Validate that a file exists
///
/// # Arguments
/// * `path` - Path to validate
/// * `description` - Human-readable description of the file (e.g., "Input BAM")
///
/// # Errors
/// Returns an error if the file does not exist
///
/// # Example
/// ```
/// use bamfilt_lib::validation::validate_file_exists;
///
/// let result = validate_file_exists("/nonexistent/file.bam", "Input BAM");
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        return Err(BamfiltError::InputNotFound {
            description: description.to_string(),
            path: path_ref.display().to_string(),
        });
    }
    Ok(())
}
