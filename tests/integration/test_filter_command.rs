//! End-to-end CLI tests for the filter command.
//!
//! These tests run the actual `bamfilt filter` binary and validate:
//! 1. The length predicate, including the 10/11 base boundary
//! 2. Record order and content preservation
//! 3. Header preservation

use bamfilt_lib::sam::builder::RecordBuilder;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use crate::helpers::bam_generator::{
    create_minimal_header, read_bam, record_with_length, write_bam,
};

/// Runs `bamfilt filter` and asserts it exited successfully.
fn run_filter(input: &Path, output: &Path) {
    let status = Command::new(env!("CARGO_BIN_EXE_bamfilt"))
        .args([
            "filter",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .status()
        .expect("Failed to run filter command");
    assert!(status.success(), "Filter command failed");
}

#[test]
fn test_filter_command_mixed_lengths() {
    let temp_dir = TempDir::new().unwrap();
    let input_bam = temp_dir.path().join("input.bam");
    let output_bam = temp_dir.path().join("output.bam");

    let header = create_minimal_header("chr1", 10_000);
    let records = vec![
        record_with_length("short1", 5),
        record_with_length("long1", 15),
        record_with_length("short2", 8),
        record_with_length("long2", 20),
    ];
    write_bam(&input_bam, &header, &records);

    run_filter(&input_bam, &output_bam);

    let (_, output_records) = read_bam(&output_bam);
    let names: Vec<_> =
        output_records.iter().map(|r| r.name().map(AsRef::<[u8]>::as_ref).unwrap()).collect();
    assert_eq!(names, vec![b"long1".as_ref(), b"long2".as_ref()]);
}

#[test]
fn test_filter_command_all_records_pass() {
    let temp_dir = TempDir::new().unwrap();
    let input_bam = temp_dir.path().join("input.bam");
    let output_bam = temp_dir.path().join("output.bam");

    let header = create_minimal_header("chr1", 10_000);
    let records: Vec<_> =
        (0..5).map(|i| record_with_length(&format!("r{i}"), 50 + i)).collect();
    write_bam(&input_bam, &header, &records);

    run_filter(&input_bam, &output_bam);

    let (_, output_records) = read_bam(&output_bam);
    assert_eq!(output_records, records);
}

#[test]
fn test_filter_command_all_records_dropped() {
    let temp_dir = TempDir::new().unwrap();
    let input_bam = temp_dir.path().join("input.bam");
    let output_bam = temp_dir.path().join("output.bam");

    let header = create_minimal_header("chr1", 10_000);
    let records: Vec<_> = (0..5).map(|i| record_with_length(&format!("r{i}"), i)).collect();
    write_bam(&input_bam, &header, &records);

    run_filter(&input_bam, &output_bam);

    // Output is a valid BAM with the input header and zero records.
    let (output_header, output_records) = read_bam(&output_bam);
    assert_eq!(output_header, header);
    assert!(output_records.is_empty());
}

#[test]
fn test_filter_command_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    let input_bam = temp_dir.path().join("input.bam");
    let output_bam = temp_dir.path().join("output.bam");

    let header = create_minimal_header("chr1", 10_000);
    write_bam(&input_bam, &header, &[]);

    run_filter(&input_bam, &output_bam);

    let (output_header, output_records) = read_bam(&output_bam);
    assert_eq!(output_header, header);
    assert!(output_records.is_empty());
}

#[test]
fn test_filter_command_length_boundary() {
    let temp_dir = TempDir::new().unwrap();
    let input_bam = temp_dir.path().join("input.bam");
    let output_bam = temp_dir.path().join("output.bam");

    let header = create_minimal_header("chr1", 10_000);
    let records =
        vec![record_with_length("exactly10", 10), record_with_length("exactly11", 11)];
    write_bam(&input_bam, &header, &records);

    run_filter(&input_bam, &output_bam);

    let (_, output_records) = read_bam(&output_bam);
    assert_eq!(output_records.len(), 1);
    assert_eq!(
        output_records[0].name().map(AsRef::as_ref),
        Some(b"exactly11".as_ref())
    );
}

#[test]
fn test_filter_command_header_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let input_bam = temp_dir.path().join("input.bam");
    let output_bam = temp_dir.path().join("output.bam");

    // Multiple reference sequences, so ordering matters too.
    use bstr::BString;
    use noodles::sam::Header;
    use noodles::sam::header::record::value::{Map, map::ReferenceSequence};
    use std::num::NonZeroUsize;

    let header = Header::builder()
        .add_reference_sequence(
            BString::from("chr1"),
            Map::<ReferenceSequence>::new(NonZeroUsize::new(1000).unwrap()),
        )
        .add_reference_sequence(
            BString::from("chr2"),
            Map::<ReferenceSequence>::new(NonZeroUsize::new(2000).unwrap()),
        )
        .build();
    write_bam(&input_bam, &header, &[record_with_length("r1", 20)]);

    run_filter(&input_bam, &output_bam);

    let (output_header, _) = read_bam(&output_bam);
    assert_eq!(output_header, header, "Output header must match input header exactly");
    assert!(output_header.programs().as_ref().is_empty(), "No program records added");
}

#[test]
fn test_filter_command_kept_records_unmodified() {
    let temp_dir = TempDir::new().unwrap();
    let input_bam = temp_dir.path().join("input.bam");
    let output_bam = temp_dir.path().join("output.bam");

    let header = create_minimal_header("chr1", 10_000);
    let record = RecordBuilder::new()
        .name("aln1")
        .sequence("ACGTACGTACGTACG")
        .qualities(&[30; 15])
        .reference_sequence_id(0)
        .alignment_start(100)
        .mapping_quality(60)
        .cigar("15M")
        .tag("RX", "ACGT")
        .build();
    write_bam(&input_bam, &header, std::slice::from_ref(&record));

    run_filter(&input_bam, &output_bam);

    let (_, output_records) = read_bam(&output_bam);
    assert_eq!(output_records, vec![record]);
}

#[test]
fn test_filter_command_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let input_bam = temp_dir.path().join("input.bam");
    let first_pass = temp_dir.path().join("first.bam");
    let second_pass = temp_dir.path().join("second.bam");

    let header = create_minimal_header("chr1", 10_000);
    let records = vec![
        record_with_length("r1", 5),
        record_with_length("r2", 11),
        record_with_length("r3", 10),
        record_with_length("r4", 30),
    ];
    write_bam(&input_bam, &header, &records);

    run_filter(&input_bam, &first_pass);
    run_filter(&first_pass, &second_pass);

    let (first_header, first_records) = read_bam(&first_pass);
    let (second_header, second_records) = read_bam(&second_pass);
    assert_eq!(second_header, first_header);
    assert_eq!(second_records, first_records);
    assert_eq!(first_records.len(), 2);
}
