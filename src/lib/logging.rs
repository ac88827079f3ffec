//! Logging utilities for formatted output.
//!
//! Helpers for rendering counts, percentages, durations, and rates in log
//! lines, plus a small timer for bracketing an operation with start and
//! completion messages.

use std::time::{Duration, Instant};

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use bamfilt_lib::logging::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234), "1,234");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let bytes = digits.as_bytes();
    let mut groups: Vec<String> = bytes
        .rchunks(3)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();
    groups.reverse();
    groups.join(",")
}

/// Formats a fraction (0.0-1.0) as a percentage with the given number of
/// decimal places.
///
/// # Examples
///
/// ```
/// use bamfilt_lib::logging::format_percent;
///
/// assert_eq!(format_percent(0.9543, 2), "95.43%");
/// assert_eq!(format_percent(0.5, 1), "50.0%");
/// assert_eq!(format_percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0, decimals = decimals)
}

/// Formats a duration in human-readable form.
///
/// # Examples
///
/// ```
/// use bamfilt_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(45)), "45s");
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// assert_eq!(format_duration(Duration::from_secs(5400)), "1h 30m");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        if remaining_secs == 0 { format!("{mins}m") } else { format!("{mins}m {remaining_secs}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Formats a processing rate with appropriate units.
///
/// # Examples
///
/// ```
/// use bamfilt_lib::logging::format_rate;
/// use std::time::Duration;
///
/// assert_eq!(format_rate(1000, Duration::from_secs(1)), "1,000 records/s");
/// assert_eq!(format_rate(30, Duration::from_secs(60)), "30.0 records/min");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_rate(count: u64, duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        return format!("{} records/s", format_count(count));
    }

    let rate = count as f64 / secs;
    if rate >= 1.0 {
        format!("{} records/s", format_count(rate as u64))
    } else {
        let records_per_min = count as f64 / (secs / 60.0);
        format!("{records_per_min:.1} records/min")
    }
}

/// Operation timing helper.
///
/// Logs a start message on construction and a completion message, with item
/// count, elapsed time, and rate, when [`OperationTimer::log_completion`] is
/// called.
///
/// # Examples
///
/// ```no_run
/// use bamfilt_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Filtering records");
///
/// // ... do work ...
///
/// timer.log_completion(10_000);
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Logs the completion with item count and rate.
    pub fn log_completion(&self, count: u64) {
        log::info!("{}", self.completion_message(count));
    }

    fn completion_message(&self, count: u64) -> String {
        let duration = self.start_time.elapsed();
        format!(
            "{} completed: {} in {} ({})",
            self.operation,
            format_count(count),
            format_duration(duration),
            format_rate(count, duration)
        )
    }
}
