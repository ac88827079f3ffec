#![deny(unsafe_code)]
#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

//! # bamfilt - BAM sequence-length filtering library
//!
//! This library implements a single streaming operation: copy a BAM file,
//! keeping only alignment records whose sequence is longer than a fixed
//! minimum length. Records are passed through unmodified and in order, and
//! the output header is an exact copy of the input header.
//!
//! ## Modules
//!
//! - **[`filter`]** - The filter-copy operator and its predicate
//! - **[`bam_io`]** - BAM reader/writer construction helpers
//! - **[`errors`]** - Structured error types
//! - **[`validation`]** - Input validation utilities
//! - **[`logging`]** - Operation timing and formatted log output
//! - **[`progress`]** - Periodic progress logging
//! - **[`sam`]** - SAM/BAM record test utilities
//!
//! ## Quick Start
//!
//! ```no_run
//! use bamfilt_lib::filter::filter_short_alignments;
//!
//! # fn main() -> anyhow::Result<()> {
//! let counts = filter_short_alignments("input.bam", "filtered.bam")?;
//! println!("kept {} of {} records", counts.kept, counts.total);
//! # Ok(())
//! # }
//! ```
//!
//! ## See Also
//!
//! - [noodles](https://github.com/zaeleus/noodles) - Rust bioinformatics I/O

pub mod bam_io;
pub mod errors;
pub mod filter;
pub mod logging;
pub mod progress;
pub mod sam;
pub mod validation;

pub use errors::BamfiltError;
pub use filter::{FilterCounts, MIN_SEQUENCE_LENGTH, filter_short_alignments};
