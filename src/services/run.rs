//! One complete invocation: validate, discover, build exclusions, assign.
//!
//! Nothing on disk changes until both the target and the icon source have
//! passed validation and discovery.

use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use thiserror::Error;

use super::assigner::Assigner;
use super::discovery::{IconPool, list_icons, list_subdirectories};
use super::exclusion::ExclusionSet;
use super::history::AssignmentHistory;
use super::icon_setter::IconSetter;
use super::validation::{InvalidPathError, check_dir};
use crate::models::{AssignmentReport, TraversalOptions};

/// Fatal errors that abort a run before any folder is changed
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),

    #[error("No subdirectories located in '{0}'!")]
    NoSubdirectories(Utf8PathBuf),

    #[error("No icons located in '{0}'!")]
    NoIcons(Utf8PathBuf),

    #[error("Failed to read '{path}': {source}")]
    Listing {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    /// Whether the error stems from bad arguments, so usage help is useful
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::InvalidPath(_))
    }
}

/// Fully merged options for one run
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub target: Utf8PathBuf,
    pub source: Utf8PathBuf,
    pub options: TraversalOptions,
    pub ignore_cache: bool,
    pub ignore: Vec<String>,
    pub icon_extensions: Vec<String>,
    pub history_path: Utf8PathBuf,
    /// Directory relative ignore entries are resolved against
    pub base_dir: Utf8PathBuf,
}

/// Run the whole pipeline against `setter`.
pub fn execute<S: IconSetter + ?Sized>(
    request: &RunRequest,
    setter: &S,
) -> Result<AssignmentReport, RunError> {
    check_dir(&request.source)?;
    check_dir(&request.target)?;

    let target = canonicalize(&request.target)?;
    let source = canonicalize(&request.source)?;

    let subdirectories = list_subdirectories(&target, request.options.ignore_hidden)
        .map_err(|source| RunError::Listing {
            path: target.clone(),
            source,
        })?;
    if subdirectories.is_empty() {
        return Err(RunError::NoSubdirectories(request.target.clone()));
    }

    let icons = list_icons(&source, &request.icon_extensions).map_err(|e| RunError::Listing {
        path: source.clone(),
        source: e,
    })?;
    let pool = IconPool::new(icons).ok_or_else(|| RunError::NoIcons(request.source.clone()))?;

    tracing::info!(
        "Found {} subdirectories in '{}' and {} icons in '{}'",
        subdirectories.len(),
        target,
        pool.len(),
        source
    );

    let history = AssignmentHistory::new(&request.history_path);
    let exclusions = ExclusionSet::build(
        &history,
        request.ignore_cache,
        &request.ignore,
        &request.base_dir,
    );

    if let Err(e) = history.ensure_exists() {
        tracing::warn!("History will not be recorded: {:#}", e);
    }

    let assigner = Assigner::new(setter, &pool, &exclusions, &history, request.options);
    Ok(assigner.run(&target, subdirectories))
}

fn canonicalize(path: &Utf8Path) -> Result<Utf8PathBuf, RunError> {
    path.canonicalize_utf8().map_err(|source| RunError::Listing {
        path: path.to_path_buf(),
        source,
    })
}
