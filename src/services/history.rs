//! Append-only record of folders that have already been given an icon.
//!
//! One folder path per line. The file is never compacted or deduplicated;
//! it only seeds the exclusion set of later runs.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};

/// File name of the history inside the cache directory
pub const HISTORY_FILE_NAME: &str = "changed";

#[derive(Debug, Clone)]
pub struct AssignmentHistory {
    path: Utf8PathBuf,
}

impl AssignmentHistory {
    pub fn new<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Read every recorded folder.
    ///
    /// A missing or unreadable file is treated as empty. Blank lines are skipped.
    pub fn load(&self) -> Vec<String> {
        if !self.path.exists() {
            tracing::debug!("No history file at {}, starting fresh", self.path);
            return Vec::new();
        }

        match self.read_entries() {
            Ok(entries) => {
                tracing::debug!("Loaded {} history entries from {}", entries.len(), self.path);
                entries
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable history file: {:#}", e);
                Vec::new()
            }
        }
    }

    fn read_entries(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open history file: {}", self.path))?;

        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.context("Failed to read line from history file")?;
            let line = line.trim_end_matches('\r');
            if !line.is_empty() {
                entries.push(line.to_string());
            }
        }
        Ok(entries)
    }

    /// Create the history file and its directory if they do not exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        self.open_for_append().map(|_| ())
    }

    /// Append one folder to the history.
    pub fn record(&self, folder: &Utf8Path) -> Result<()> {
        let mut file = self.open_for_append()?;
        writeln!(file, "{}", folder)
            .with_context(|| format!("Failed to write history file: {}", self.path))?;
        Ok(())
    }

    fn open_for_append(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create cache directory: {}", parent))?;
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open history file: {}", self.path))
    }
}
