use camino::Utf8PathBuf;

use crate::metrics::Metrics;

/// Flags that shape a traversal, shared unchanged by every recursive call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOptions {
    pub recursive: bool,
    pub ignore_hidden: bool,
}

/// A folder that was successfully given an icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub folder: Utf8PathBuf,
    pub icon: Utf8PathBuf,
}

/// A folder the icon setter refused, with the reason it gave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentFailure {
    pub folder: Utf8PathBuf,
    pub icon: Utf8PathBuf,
    pub reason: String,
}

/// Everything a traversal did, in visiting order.
#[derive(Debug, Clone, Default)]
pub struct AssignmentReport {
    pub assignments: Vec<Assignment>,
    pub failures: Vec<AssignmentFailure>,
    pub excluded: Vec<Utf8PathBuf>,
    pub metrics: Metrics,
}

impl AssignmentReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folders that received an icon, in the order they were changed
    pub fn assigned_folders(&self) -> impl Iterator<Item = &Utf8PathBuf> {
        self.assignments.iter().map(|a| &a.folder)
    }

    /// Whether every attempted folder was changed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
