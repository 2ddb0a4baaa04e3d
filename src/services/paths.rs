//! Canonical path form shared by the exclusion set and the traversal.
//!
//! Every exclusion member and every candidate folder is compared as an
//! absolute, lexically normalised path whose parent directory has been
//! canonicalised when it exists. The traversal builds candidates as
//! `canonical_root.join(name)`, which already has this form.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Resolve `.` and `..` components without touching the filesystem.
pub fn lexical_normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut normalized = Utf8PathBuf::new();

    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                let last_is_normal = matches!(
                    normalized.components().next_back(),
                    Some(Utf8Component::Normal(_))
                );
                if last_is_normal {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_str()),
        }
    }

    normalized
}

/// Bring a user-supplied or persisted path into canonical form.
///
/// Relative paths are resolved against `base_dir`. The parent directory is
/// canonicalised when possible so symlinked or differently spelled parents
/// compare equal to the paths the traversal produces; the final component is
/// kept as written.
pub fn canonical_form(raw: &str, base_dir: &Utf8Path) -> Utf8PathBuf {
    let raw = raw.trim_end_matches(['\r', '\n']);
    let path = Utf8Path::new(raw);

    let absolute = if path.is_absolute() {
        lexical_normalize(path)
    } else {
        lexical_normalize(&base_dir.join(path))
    };

    if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
        if let Ok(parent) = parent.canonicalize_utf8() {
            return parent.join(name);
        }
    }
    absolute
}
