// Run metrics module
//
// Counts what a single traversal did so the run can end with a summary line

use std::time::{Duration, Instant};

/// Per-run counters
///
/// The traversal is single-threaded, so these are plain integers owned by the
/// [`AssignmentReport`](crate::models::AssignmentReport) being built.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Directories whose children were listed
    pub directories_scanned: usize,

    /// Folders that received an icon
    pub folders_assigned: usize,

    /// Folders the icon setter refused
    pub folders_failed: usize,

    /// Folders skipped because they were in the exclusion set
    pub folders_excluded: usize,

    /// Successful assignments that could not be appended to the history file
    pub history_write_failures: usize,

    /// Directories that could not be listed during recursion
    pub unreadable_directories: usize,

    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            directories_scanned: 0,
            folders_assigned: 0,
            folders_failed: 0,
            folders_excluded: 0,
            history_write_failures: 0,
            unreadable_directories: 0,
            start_time: Instant::now(),
        }
    }

    pub fn record_directory_scanned(&mut self) {
        self.directories_scanned += 1;
    }

    pub fn record_assigned(&mut self) {
        self.folders_assigned += 1;
    }

    pub fn record_failed(&mut self) {
        self.folders_failed += 1;
    }

    pub fn record_excluded(&mut self) {
        self.folders_excluded += 1;
    }

    pub fn record_history_write_failure(&mut self) {
        self.history_write_failures += 1;
    }

    pub fn record_unreadable_directory(&mut self) {
        self.unreadable_directories += 1;
    }

    /// Folders an icon was attempted on
    pub fn folders_attempted(&self) -> usize {
        self.folders_assigned + self.folders_failed
    }

    /// Time since the run started
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!(
            "Folders: {} changed, {} failed, {} excluded ({} directories scanned in {:.2}s)",
            self.folders_assigned,
            self.folders_failed,
            self.folders_excluded,
            self.directories_scanned,
            self.elapsed().as_secs_f64()
        );

        if self.history_write_failures > 0 {
            tracing::warn!(
                "{} changed folders could not be recorded in the history file",
                self.history_write_failures
            );
        }
        if self.unreadable_directories > 0 {
            tracing::warn!(
                "{} directories could not be read and were skipped",
                self.unreadable_directories
            );
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
