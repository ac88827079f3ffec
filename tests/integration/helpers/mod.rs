//! Helper utilities for integration tests.


pub use bam_generator::*;
