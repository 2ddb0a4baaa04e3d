//! Directory and icon discovery.
//!
//! [`list_subdirectories`] returns child directory names in filesystem listing
//! order; only the icon list is sorted, by [`IconPool::new`], so that repeated
//! runs over an unchanged source directory map icons to folders identically.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;

/// Whether a directory entry name is hidden (dot-prefixed)
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Return the names of all child directories of `path`.
///
/// Symlinks to directories count as directories. Entries whose names are not
/// valid UTF-8 are skipped with a warning.
pub fn list_subdirectories(path: &Utf8Path, ignore_hidden: bool) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            tracing::warn!(
                "Skipping entry with non UTF-8 name in '{}': {:?}",
                path,
                entry.file_name()
            );
            continue;
        };

        if ignore_hidden && is_hidden(&name) {
            tracing::debug!("Ignoring hidden directory entry: {}", name);
            continue;
        }

        if path.join(&name).is_dir() {
            names.push(name);
        }
    }

    Ok(names)
}

/// Return the full paths of all icon files directly inside `path`.
///
/// A file is an icon when its name ends in `.<ext>` for one of `extensions`
/// (case-sensitive). The result is unsorted.
pub fn list_icons(path: &Utf8Path, extensions: &[String]) -> io::Result<Vec<Utf8PathBuf>> {
    let suffixes: Vec<String> = extensions.iter().map(|ext| format!(".{ext}")).collect();
    let mut icons = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };

        if !suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())) {
            continue;
        }

        let icon = path.join(&name);
        if icon.is_dir() {
            tracing::debug!("Ignoring directory with icon extension: {}", icon);
            continue;
        }
        icons.push(icon);
    }

    Ok(icons)
}

/// The sorted, non-empty sequence of icons cycled over during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPool {
    icons: Vec<Utf8PathBuf>,
}

impl IconPool {
    /// Sort `icons` by full path. Returns `None` when there are no icons.
    pub fn new(mut icons: Vec<Utf8PathBuf>) -> Option<Self> {
        if icons.is_empty() {
            return None;
        }
        icons.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Some(Self { icons })
    }

    /// Icon at a cycle position, wrapping around the pool
    pub fn get(&self, index: usize) -> &Utf8Path {
        &self.icons[index % self.icons.len()]
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Always false; an empty pool cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn icons(&self) -> &[Utf8PathBuf] {
        &self.icons
    }
}
