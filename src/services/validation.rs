//! Checks that the target and source arguments name existing directories.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Why a path argument cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPathError {
    #[error("Directory '{0}' does not exist!")]
    NotFound(Utf8PathBuf),

    #[error("'{0}' is not a directory!")]
    NotADirectory(Utf8PathBuf),
}

impl InvalidPathError {
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::NotFound(path) | Self::NotADirectory(path) => path,
        }
    }
}

/// Check that `path` exists and is a directory.
///
/// The error's message is the user-facing diagnostic for the failed check.
pub fn check_dir(path: &Utf8Path) -> Result<(), InvalidPathError> {
    if !path.exists() {
        return Err(InvalidPathError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(InvalidPathError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8(temp_dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_existing_directory_passes() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(check_dir(&utf8(&temp_dir)), Ok(()));
    }

    #[test]
    fn test_missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = utf8(&temp_dir).join("nope");

        let err = check_dir(&missing).unwrap_err();
        assert_eq!(err.to_string(), format!("Directory '{}' does not exist!", missing));
        assert_eq!(
            check_dir(&missing),
            Err(InvalidPathError::NotFound(missing.clone()))
        );
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = utf8(&temp_dir).join("icon.png");
        std::fs::write(&file, b"png").unwrap();

        let err = check_dir(&file).unwrap_err();
        assert!(matches!(err, InvalidPathError::NotADirectory(_)));
        assert_eq!(err.path(), file.as_path());
        assert!(err.to_string().contains("is not a directory"));
    }
}
