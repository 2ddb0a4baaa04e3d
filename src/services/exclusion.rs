//! Folders that must never receive an icon or be descended into.
//!
//! Built once per run from the assignment history (unless the cache is
//! ignored) and the user's ignore list, then only queried.

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexSet;

use super::history::AssignmentHistory;
use super::paths::{canonical_form, lexical_normalize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    members: IndexSet<Utf8PathBuf>,
}

impl ExclusionSet {
    /// Union of the history (unless `ignore_cache`) and the `ignored` entries.
    ///
    /// History entries were written by the traversal and are only lexically
    /// normalised. Ignore entries are resolved against `base_dir` and brought
    /// into canonical form.
    pub fn build(
        history: &AssignmentHistory,
        ignore_cache: bool,
        ignored: &[String],
        base_dir: &Utf8Path,
    ) -> Self {
        let mut set = Self::default();

        if ignore_cache {
            tracing::info!("Ignoring cached history at {}", history.path());
        } else {
            for entry in history.load() {
                set.members.insert(lexical_normalize(Utf8Path::new(&entry)));
            }
        }
        let from_history = set.members.len();

        for entry in ignored {
            set.members.insert(canonical_form(entry, base_dir));
        }

        tracing::debug!(
            "Exclusion set: {} from history, {} total",
            from_history,
            set.members.len()
        );
        set
    }

    /// An exclusion set holding exactly `paths`, compared verbatim
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        Self {
            members: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, folder: &Utf8Path) -> bool {
        self.members.contains(folder)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Utf8PathBuf> {
        self.members.iter()
    }
}
