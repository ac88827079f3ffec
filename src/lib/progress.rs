//! Progress logging utilities
//!
//! A progress logger for emitting log lines at regular count intervals while
//! streaming records. All streaming here is single-threaded, so the logger
//! uses a plain counter behind a mutable reference.

use log::info;

/// Logs progress messages as a running count crosses interval boundaries.
///
/// # Example
/// ```
/// use bamfilt_lib::progress::ProgressLogger;
///
/// let mut progress = ProgressLogger::new("Processed records").with_interval(100);
///
/// for _ in 0..250 {
///     progress.record(1); // Logs at 100, 200
/// }
/// progress.log_final(); // Logs "Processed records 250 (complete)"
/// ```
pub struct ProgressLogger {
    /// The logging interval - progress is logged when the count crosses multiples of this.
    interval: u64,
    /// Message prefix for log output.
    message: String,
    /// Count of items processed so far.
    count: u64,
}

impl ProgressLogger {
    /// Create a new progress logger with the specified message.
    ///
    /// The logger starts with a count of 0 and a default interval of 10,000.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { interval: 10_000, message: message.into(), count: 0 }
    }

    /// Set the logging interval.
    ///
    /// Progress is logged each time the count crosses a multiple of this
    /// interval, e.g. with interval=1000 at 1000, 2000, 3000, and so on.
    #[must_use]
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval;
        self
    }

    /// Add to the count and log for each interval boundary crossed.
    pub fn record(&mut self, additional: u64) {
        let prev = self.count;
        self.count += additional;

        let prev_intervals = prev / self.interval;
        let new_intervals = self.count / self.interval;
        for i in (prev_intervals + 1)..=new_intervals {
            info!("{} {}", self.message, i * self.interval);
        }
    }

    /// Log final progress.
    ///
    /// If the count did not land exactly on an interval boundary, logs a
    /// final message with "(complete)". A count of 0 logs nothing.
    pub fn log_final(&self) {
        if self.count > 0 && !self.count.is_multiple_of(self.interval) {
            info!("{} {} (complete)", self.message, self.count);
        }
    }

    /// The current count of items processed.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }
}
