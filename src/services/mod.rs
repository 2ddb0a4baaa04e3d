//! Services module - the traversal and assignment pipeline.
//!
//! Framework-agnostic business logic; the binary only parses arguments,
//! merges configuration and hands a [`RunRequest`] to [`execute`].
//!
//! # Components
//!
//! - [`validation`]: target/source must exist and be directories
//! - [`discovery`]: child directories of a folder, icon files of the source, the sorted [`IconPool`]
//! - [`history`]: the append-only [`AssignmentHistory`] of folders already changed
//! - [`exclusion`]: the [`ExclusionSet`] built from history and the ignore list
//! - [`icon_setter`]: the [`IconSetter`] seam around the platform call
//! - [`assigner`]: the recursive walk that hands out icons round-robin
//! - [`run`]: one end-to-end invocation
//!
//! # Usage Example
//!
//! ```ignore
//! use iconic::services::{RunRequest, SystemIconSetter, execute};
//!
//! let report = execute(&request, &SystemIconSetter::new())?;
//! report.metrics.log_summary();
//! ```

pub mod assigner;
pub mod discovery;
pub mod exclusion;
pub mod history;
pub mod icon_setter;
pub mod paths;
pub mod run;
pub mod validation;

pub use assigner::{Assigner, CycleIndex};
pub use discovery::{IconPool, is_hidden, list_icons, list_subdirectories};
pub use exclusion::ExclusionSet;
pub use history::{AssignmentHistory, HISTORY_FILE_NAME};
pub use icon_setter::{IconSetError, IconSetter, SystemIconSetter};
pub use run::{RunError, RunRequest, execute};
pub use validation::{InvalidPathError, check_dir};
