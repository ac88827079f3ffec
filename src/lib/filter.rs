//! The filter-copy operator: stream records from one BAM to another, keeping
//! only records whose sequence is longer than [`MIN_SEQUENCE_LENGTH`] bases.
//!
//! The operator is a single forward pass: each record is read once, tested
//! once, and written at most once. Kept records are written unmodified and in
//! their original order. The output header is an exact copy of the input
//! header so the output file is self-describing and mate/reference lookups
//! remain valid.
//!
//! The core loop is written against a [`RecordSink`] trait rather than a
//! concrete BAM writer so unit tests can inject an in-memory sink.

use anyhow::{Context, Result};
use log::info;
use noodles::sam::Header;
use noodles::sam::alignment::io::Write as AlignmentWrite;
use noodles::sam::alignment::record_buf::RecordBuf;
use std::io;
use std::path::Path;

use crate::bam_io::{create_bam_reader, create_bam_writer};
use crate::errors::BamfiltError;
use crate::progress::ProgressLogger;
use crate::validation::validate_file_exists;

/// Records with a sequence of this length or shorter are dropped.
pub const MIN_SEQUENCE_LENGTH: usize = 10;

/// Record counts produced by one filter-copy pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterCounts {
    /// Records read from the input
    pub total: u64,
    /// Records written to the output
    pub kept: u64,
    /// Records discarded by the length predicate
    pub dropped: u64,
}

/// Returns true if the record's sequence is long enough to keep.
///
/// A record with no sequence data has length 0 and is dropped.
#[must_use]
pub fn passes_length_filter(record: &RecordBuf) -> bool {
    record.sequence().len() > MIN_SEQUENCE_LENGTH
}

/// Destination for filtered records.
///
/// The production implementation is a noodles BAM writer; tests use an
/// in-memory `Vec<RecordBuf>`.
pub trait RecordSink {
    /// Append one record to the sink.
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    fn write_record(&mut self, header: &Header, record: &RecordBuf) -> io::Result<()>;
}

impl<W: io::Write> RecordSink for noodles::bam::io::Writer<W> {
    fn write_record(&mut self, header: &Header, record: &RecordBuf) -> io::Result<()> {
        self.write_alignment_record(header, record)
    }
}

impl RecordSink for Vec<RecordBuf> {
    fn write_record(&mut self, _header: &Header, record: &RecordBuf) -> io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Copy every record passing the length predicate from `records` to `sink`.
///
/// Consumes the record iterator in a single pass. Record order is preserved
/// and records are never modified. The first read or write error aborts the
/// pass and propagates to the caller.
///
/// # Errors
/// Returns an error if a record cannot be decoded from the source or appended
/// to the sink.
pub fn copy_passing_records<I, S>(header: &Header, records: I, sink: &mut S) -> Result<FilterCounts>
where
    I: Iterator<Item = io::Result<RecordBuf>>,
    S: RecordSink,
{
    let mut counts = FilterCounts::default();
    let mut progress = ProgressLogger::new("Processed records").with_interval(1_000_000);

    for result in records {
        let record = result.context("Failed to read record from input BAM")?;
        counts.total += 1;

        if passes_length_filter(&record) {
            sink.write_record(header, &record)
                .context("Failed to write record to output BAM")?;
            counts.kept += 1;
        } else {
            counts.dropped += 1;
        }

        progress.record(1);
    }

    progress.log_final();
    Ok(counts)
}

/// Filter a BAM file by sequence length.
///
/// Opens `input` for reading, opens `output` for writing with `input`'s
/// header as its template, and streams every record through the length
/// predicate. Both streams are released on all exit paths; on success the
/// output BGZF stream is finalized explicitly so the EOF marker is written.
///
/// The input path is validated before the output file is created, so a
/// missing input never leaves an empty output file behind. A failure
/// mid-stream may leave a partial output file; it is not cleaned up.
///
/// # Errors
/// Returns an error if the input does not exist or is not a valid BAM file,
/// or if the output cannot be created or written.
pub fn filter_short_alignments<P, Q>(input: P, output: Q) -> Result<FilterCounts>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    validate_file_exists(&input, "Input BAM")?;

    let (mut reader, header) = create_bam_reader(&input)?;
    let mut writer = create_bam_writer(&output, &header)?;

    let counts = copy_passing_records(&header, reader.record_bufs(&header), &mut writer)?;

    writer.finish(&header).map_err(|e| BamfiltError::WriteFailed {
        path: output.as_ref().display().to_string(),
        reason: e.to_string(),
    })?;

    info!(
        "Kept {} of {} records ({} dropped)",
        counts.kept, counts.total, counts.dropped
    );
    Ok(counts)
}
