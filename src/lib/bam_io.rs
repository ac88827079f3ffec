//! BAM file I/O utilities.
//!
//! This module provides helpers for creating BAM readers and writers with
//! consistent error handling and header management. All I/O is single-threaded
//! and strictly sequential; each stream has exactly one reader or writer for
//! its entire lifetime.

use anyhow::{Context, Result};
use noodles::bgzf::{Reader as BgzfReader, Writer as BgzfWriter};
use noodles::sam::Header;
use std::fs::File;
use std::path::Path;

use crate::errors::BamfiltError;

/// Type alias for a BAM reader over a BGZF-compressed file.
pub type BamReader = noodles::bam::io::Reader<BgzfReader<File>>;

/// Type alias for a BAM writer over a BGZF-compressed file.
pub type BamWriter = noodles::bam::io::Writer<BgzfWriter<File>>;

/// Create a BAM reader and read its header.
///
/// # Arguments
/// * `path` - Path to the input BAM file
///
/// # Returns
/// A tuple of (BAM reader, header)
///
/// # Errors
/// Returns an error if the file cannot be opened, or
/// [`BamfiltError::InvalidBam`] if the header cannot be parsed
///
/// # Example
/// ```no_run
/// use bamfilt_lib::bam_io::create_bam_reader;
/// use std::path::Path;
///
/// let (mut reader, header) = create_bam_reader(Path::new("input.bam")).unwrap();
/// ```
pub fn create_bam_reader<P: AsRef<Path>>(path: P) -> Result<(BamReader, Header)> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref)
        .with_context(|| format!("Failed to open input BAM: {}", path_ref.display()))?;

    let mut reader = noodles::bam::io::Reader::new(file);
    let header = reader.read_header().map_err(|e| BamfiltError::InvalidBam {
        path: path_ref.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok((reader, header))
}

/// Create a BAM writer and write the header in one operation.
///
/// The destination file is created or truncated; its parent directory must
/// already exist.
///
/// # Arguments
/// * `path` - Path for the output BAM file
/// * `header` - SAM header to write
///
/// # Returns
/// A BAM writer ready for writing records
///
/// # Errors
/// Returns [`BamfiltError::WriteFailed`] if the file cannot be created or the
/// header cannot be written
///
/// # Example
/// ```no_run
/// use bamfilt_lib::bam_io::create_bam_writer;
/// use noodles::sam::Header;
/// use std::path::Path;
///
/// let header = Header::default();
/// let mut writer = create_bam_writer(Path::new("output.bam"), &header).unwrap();
/// ```
pub fn create_bam_writer<P: AsRef<Path>>(path: P, header: &Header) -> Result<BamWriter> {
    let path_ref = path.as_ref();
    let output_file = File::create(path_ref).map_err(|e| BamfiltError::WriteFailed {
        path: path_ref.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut writer = noodles::bam::io::Writer::new(output_file);
    writer.write_header(header).map_err(|e| BamfiltError::WriteFailed {
        path: path_ref.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(writer)
}
