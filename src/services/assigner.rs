//! Recursive icon assignment.
//!
//! A pre-order depth-first walk over the target tree. Every non-excluded
//! subdirectory gets the icon at the current [`CycleIndex`]; the index only
//! moves on after a successful assignment and is shared by the whole walk,
//! not reset per directory.

use camino::Utf8Path;

use super::discovery::{IconPool, list_subdirectories};
use super::exclusion::ExclusionSet;
use super::history::AssignmentHistory;
use super::icon_setter::IconSetter;
use crate::models::{Assignment, AssignmentFailure, AssignmentReport, TraversalOptions};

/// Position of the next icon to hand out, scoped to one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleIndex {
    position: usize,
}

impl CycleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to the next icon, wrapping at `pool_len`
    pub fn advance(&mut self, pool_len: usize) {
        self.position = (self.position + 1) % pool_len;
    }
}

/// Walks a directory tree and assigns icons from a pool.
pub struct Assigner<'a, S: IconSetter + ?Sized> {
    setter: &'a S,
    pool: &'a IconPool,
    exclusions: &'a ExclusionSet,
    history: &'a AssignmentHistory,
    options: TraversalOptions,
}

impl<'a, S: IconSetter + ?Sized> Assigner<'a, S> {
    pub fn new(
        setter: &'a S,
        pool: &'a IconPool,
        exclusions: &'a ExclusionSet,
        history: &'a AssignmentHistory,
        options: TraversalOptions,
    ) -> Self {
        Self {
            setter,
            pool,
            exclusions,
            history,
            options,
        }
    }

    /// Process `root` with a fresh cycle index.
    ///
    /// `subdirectories` is the listing of `root` the caller already read, so
    /// the root is not listed a second time.
    pub fn run(&self, root: &Utf8Path, subdirectories: Vec<String>) -> AssignmentReport {
        let mut cycle = CycleIndex::new();
        let mut report = AssignmentReport::new();
        report.metrics.record_directory_scanned();
        self.process_entries(root, subdirectories, &mut cycle, &mut report);
        report
    }

    /// Assign icons to the subdirectories of `dir`, descending when recursive.
    ///
    /// Excluded folders are neither changed nor descended into. Symlinked
    /// folders are changed but never descended into. A directory that cannot
    /// be listed is logged and skipped.
    pub fn process_directory(
        &self,
        dir: &Utf8Path,
        cycle: &mut CycleIndex,
        report: &mut AssignmentReport,
    ) {
        let subdirectories = match list_subdirectories(dir, self.options.ignore_hidden) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("Unable to read directory '{}': {}", dir, e);
                report.metrics.record_unreadable_directory();
                return;
            }
        };
        report.metrics.record_directory_scanned();
        self.process_entries(dir, subdirectories, cycle, report);
    }

    fn process_entries(
        &self,
        dir: &Utf8Path,
        subdirectories: Vec<String>,
        cycle: &mut CycleIndex,
        report: &mut AssignmentReport,
    ) {
        for name in subdirectories {
            let target = dir.join(&name);

            if self.exclusions.contains(&target) {
                tracing::info!("Skipping '{}', already changed or ignored", target);
                report.metrics.record_excluded();
                report.excluded.push(target);
                continue;
            }

            self.assign(&target, cycle, report);

            if !self.options.recursive {
                continue;
            }
            if target.is_symlink() {
                tracing::debug!("Not descending into symlinked folder: {}", target);
                continue;
            }
            self.process_directory(&target, cycle, report);
        }
    }

    fn assign(&self, target: &Utf8Path, cycle: &mut CycleIndex, report: &mut AssignmentReport) {
        let icon = self.pool.get(cycle.position());
        tracing::info!("Changing '{}' to have icon '{}'...", target, icon);

        match self.setter.apply_icon(target, icon) {
            Ok(()) => {
                report.metrics.record_assigned();
                report.assignments.push(Assignment {
                    folder: target.to_path_buf(),
                    icon: icon.to_path_buf(),
                });

                // The icon change stands even if it cannot be recorded
                if let Err(e) = self.history.record(target) {
                    tracing::warn!("Could not record '{}' in history: {:#}", target, e);
                    report.metrics.record_history_write_failure();
                }

                cycle.advance(self.pool.len());
            }
            Err(e) => {
                tracing::error!(
                    "Unable to change folder '{}' to icon '{}': {}",
                    target,
                    icon,
                    e
                );
                report.metrics.record_failed();
                report.failures.push(AssignmentFailure {
                    folder: target.to_path_buf(),
                    icon: icon.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }
}
