//! Error path tests for the bamfilt CLI.
//!
//! Validates that failures produce non-zero exit codes and actionable
//! messages, and that failed runs do not leave surprising output behind.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

use crate::helpers::bam_generator::{create_minimal_header, record_with_length, write_bam};

fn run_bamfilt(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_bamfilt"))
        .args(args)
        .output()
        .expect("Failed to run bamfilt")
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_bam = temp_dir.path().join("output.bam");

    let output = run_bamfilt(&[
        "filter",
        "--input",
        "/nonexistent/input.bam",
        "--output",
        output_bam.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr was: {stderr}");
    assert!(!output_bam.exists(), "No output file should be created for a missing input");
}

#[test]
fn test_input_is_not_a_bam() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("not_a_bam.bam");
    let output_bam = temp_dir.path().join("output.bam");
    fs::write(&input, b"definitely not a BAM file").unwrap();

    let output = run_bamfilt(&[
        "filter",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output_bam.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid BAM file"), "stderr was: {stderr}");
    assert!(stderr.contains(input.to_str().unwrap()), "stderr was: {stderr}");
}

#[test]
fn test_output_directory_does_not_exist() {
    let temp_dir = TempDir::new().unwrap();
    let input_bam = temp_dir.path().join("input.bam");

    let header = create_minimal_header("chr1", 1000);
    write_bam(&input_bam, &header, &[record_with_length("r1", 20)]);

    let output = run_bamfilt(&[
        "filter",
        "--input",
        input_bam.to_str().unwrap(),
        "--output",
        "/nonexistent/dir/output.bam",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write"), "stderr was: {stderr}");
}

#[test]
fn test_missing_required_arguments() {
    let output = run_bamfilt(&["filter"]);

    // clap rejects the invocation before any work happens
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--input"), "stderr was: {stderr}");
}

#[test]
fn test_help_runs() {
    let output = run_bamfilt(&["--help"]);
    assert!(output.status.success());

    let output = run_bamfilt(&["filter", "--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--input"));
    assert!(stdout.contains("--output"));
}
