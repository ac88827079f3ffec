//! SAM/BAM record utilities.

pub mod builder;

pub use builder::RecordBuilder;
