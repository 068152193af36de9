//! # Content Sinks
//!
//! Saving bytes somewhere is a separate responsibility from producing them.
//! [`ContentSink`] is the "how" of persistence; callers such as
//! [`save_journal`] only decide "what" gets saved.
//!
//! - [`FileSink`]: writes files under a root directory, atomically
//! - [`MemSink`]: keeps content in memory, for tests
//!
//! Failures are returned to the caller; nothing here aborts the process.

use crate::error::{Result, SolidError};
use crate::journal::Journal;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub trait ContentSink {
    /// Store `content` under `name` and return where it ended up.
    ///
    /// `name` is a plain file name: no directory components.
    fn save(&self, name: &str, content: &[u8]) -> Result<PathBuf>;
}

fn validate_name(name: &str) -> Result<()> {
    let plain = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\');
    if plain {
        Ok(())
    } else {
        Err(SolidError::Store(format!("Invalid file name: '{}'", name)))
    }
}

pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(SolidError::Io)?;
        }
        Ok(())
    }
}

impl ContentSink for FileSink {
    fn save(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        validate_name(name)?;
        self.ensure_dir(&self.root)?;

        let target_path = self.root.join(name);

        // Atomic Write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(SolidError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SolidError::Io(e));
        }

        debug!(path = %target_path.display(), bytes = content.len(), "content saved");
        Ok(target_path)
    }
}

/// In-memory sink for testing.
///
/// Uses `RefCell` for interior mutability since everything here is
/// single-threaded, which keeps `ContentSink::save` on `&self`.
#[derive(Default)]
pub struct MemSink {
    files: RefCell<HashMap<String, Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
}

impl MemSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(name).cloned()
    }

    pub fn get_string(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl ContentSink for MemSink {
    fn save(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        validate_name(name)?;
        if *self.simulate_write_error.borrow() {
            return Err(SolidError::Store("Simulated write error".to_string()));
        }
        self.files
            .borrow_mut()
            .insert(name.to_string(), content.to_vec());
        Ok(PathBuf::from(format!("memory://{}", name)))
    }
}

/// Save a journal's contents through a sink.
pub fn save_journal<K: ContentSink + ?Sized>(
    sink: &K,
    journal: &Journal,
    name: &str,
) -> Result<PathBuf> {
    sink.save(name, journal.contents().as_bytes())
}
