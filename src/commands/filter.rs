//! Filter a BAM file by sequence length using a single-pass streaming copy.
//!
//! This tool reads a BAM file, drops every alignment record whose sequence is
//! `MIN_SEQUENCE_LENGTH` bases or shorter, and writes the survivors to a new
//! BAM file. The output header is copied from the input unmodified, so mate
//! and reference lookups in the output remain valid.

use anyhow::Result;
use bamfilt_lib::filter::{FilterCounts, MIN_SEQUENCE_LENGTH, filter_short_alignments};
use bamfilt_lib::logging::{OperationTimer, format_count, format_percent};
use clap::Parser;
use log::info;

use crate::commands::command::Command;
use crate::commands::common::BamIoOptions;

/// Drop alignment records with short sequences.
///
/// Streams records from the input BAM to the output BAM, keeping only records
/// whose sequence is longer than `MIN_SEQUENCE_LENGTH` bases. Kept records are
/// written unmodified and in their original order.
#[derive(Debug, Parser)]
#[command(
    name = "filter",
    about = "\x1b[36mDrop alignment records with short sequences\x1b[0m",
    long_about = r#"
Filter a BAM file by sequence length using a single-pass streaming copy.

Reads every record from the input BAM and writes to the output BAM only those
records whose sequence is longer than 10 bases. Records are never modified and
their relative order is preserved. The output header is an exact copy of the
input header. Records with no sequence data are treated as length zero and
dropped.

Example usage:
  bamfilt filter -i input.bam -o filtered.bam
"#
)]
pub struct Filter {
    /// Input/output BAM options
    #[command(flatten)]
    pub io: BamIoOptions,
}

impl Command for Filter {
    fn execute(&self) -> Result<()> {
        self.io.validate()?;

        let timer = OperationTimer::new("Filtering short alignments");

        info!("Input: {}", self.io.input.display());
        info!("Output: {}", self.io.output.display());
        info!("Minimum sequence length: > {MIN_SEQUENCE_LENGTH} bases");

        let counts = filter_short_alignments(&self.io.input, &self.io.output)?;

        log_summary(&counts);
        timer.log_completion(counts.total);
        Ok(())
    }
}

/// Log the per-run summary block.
fn log_summary(counts: &FilterCounts) {
    info!("=== Summary ===");
    for line in summary_lines(counts) {
        info!("{line}");
    }
}

/// Render the summary block lines. The kept fraction is omitted for an empty
/// input to avoid dividing by zero.
fn summary_lines(counts: &FilterCounts) -> Vec<String> {
    let mut lines = vec![
        format!("Total records: {}", format_count(counts.total)),
        format!("Kept records: {}", format_count(counts.kept)),
        format!("Dropped records: {}", format_count(counts.dropped)),
    ];
    if counts.total > 0 {
        let kept_fraction = counts.kept as f64 / counts.total as f64;
        lines.push(format!("Kept fraction: {}", format_percent(kept_fraction, 2)));
    }
    lines
}
