//! Data models for iconic.
//!
//! - [`UserConfig`]: Settings loaded from `config.yaml` in the per-user config directory
//! - [`TraversalOptions`]: Recursion and hidden-folder flags for one traversal
//! - [`AssignmentReport`]: The ordered outcome of a run (assignments, failures, exclusions)

pub mod assignment;
pub mod config;

pub use assignment::{Assignment, AssignmentFailure, AssignmentReport, TraversalOptions};
pub use config::{DEFAULT_ICON_EXTENSIONS, IconicSettings, UserConfig};
