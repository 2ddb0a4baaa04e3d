//! Shared fixtures for integration tests
#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use iconic::services::{IconSetError, IconSetter};
use iconic::{RunRequest, TraversalOptions};
use std::cell::RefCell;
use std::fs;
use tempfile::TempDir;

/// Icon setter that records every call and refuses selected folders
#[derive(Default)]
pub struct RecordingSetter {
    pub calls: RefCell<Vec<(Utf8PathBuf, Utf8PathBuf)>>,
    pub refuse: Vec<Utf8PathBuf>,
}

impl RecordingSetter {
    pub fn refusing(refuse: Vec<Utf8PathBuf>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            refuse,
        }
    }

    pub fn folders(&self) -> Vec<Utf8PathBuf> {
        self.calls.borrow().iter().map(|(f, _)| f.clone()).collect()
    }

    pub fn icons(&self) -> Vec<Utf8PathBuf> {
        self.calls.borrow().iter().map(|(_, i)| i.clone()).collect()
    }
}

impl IconSetter for RecordingSetter {
    fn apply_icon(&self, folder: &Utf8Path, image: &Utf8Path) -> Result<(), IconSetError> {
        self.calls
            .borrow_mut()
            .push((folder.to_path_buf(), image.to_path_buf()));

        if self.refuse.iter().any(|r| r == folder) {
            Err(IconSetError::Rejected(folder.to_path_buf()))
        } else {
            Ok(())
        }
    }
}

/// A scratch area with `target/`, `icons/` and a history file under `cache/`
pub struct Workspace {
    _temp_dir: TempDir,
    pub root: Utf8PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf())
            .unwrap()
            .canonicalize_utf8()
            .unwrap();
        fs::create_dir(root.join("target")).unwrap();
        fs::create_dir(root.join("icons")).unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn target(&self) -> Utf8PathBuf {
        self.root.join("target")
    }

    pub fn icons_dir(&self) -> Utf8PathBuf {
        self.root.join("icons")
    }

    pub fn history_path(&self) -> Utf8PathBuf {
        self.root.join("cache").join("changed")
    }

    pub fn add_dirs(&self, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(self.target().join(dir)).unwrap();
        }
    }

    pub fn add_icons(&self, names: &[&str]) {
        for name in names {
            fs::write(self.icons_dir().join(name), b"icon").unwrap();
        }
    }

    pub fn icon(&self, name: &str) -> Utf8PathBuf {
        self.icons_dir().join(name)
    }

    pub fn folder(&self, rel: &str) -> Utf8PathBuf {
        self.target().join(rel)
    }

    pub fn history_lines(&self) -> Vec<Utf8PathBuf> {
        match fs::read_to_string(self.history_path()) {
            Ok(content) => content.lines().map(Utf8PathBuf::from).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn request(&self) -> RunRequest {
        RunRequest {
            target: self.target(),
            source: self.icons_dir(),
            options: TraversalOptions::default(),
            ignore_cache: false,
            ignore: Vec::new(),
            icon_extensions: vec!["jpg".to_string(), "ico".to_string(), "png".to_string()],
            history_path: self.history_path(),
            base_dir: self.root.clone(),
        }
    }
}
