//! Integration tests for the bamfilt binary.
//!
//! These tests run the compiled binary against real BAM files on disk and
//! validate end-to-end behavior: filtering semantics, header preservation,
//! and error handling.

mod helpers;
mod test_error_paths;
mod test_filter_command;
