//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading from
//! TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `SOLID_JOURNAL_FILE`, `SOLID_OUTPUT_DIR`, `SOLID_CATALOG`.
//! 2. **Project Config**: `./solid.toml` in the working directory.
//! 3. **Global Config**: `solid.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `journal_file` | `journal.txt` | File name used by `solid journal --save` |
//! | `output_dir` | `.` | Directory saved files are written to |
//! | `catalog_file` | none | JSON catalog used instead of the built-in sample |

use crate::error::{Result, SolidError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "solid.toml";

/// Configuration for solid, stored in `solid.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SolidConfig {
    /// File name for saved journals
    #[config(env = "SOLID_JOURNAL_FILE", default = "journal.txt")]
    pub journal_file: String,

    /// Directory that saved files go to
    #[config(env = "SOLID_OUTPUT_DIR", default = ".")]
    pub output_dir: PathBuf,

    /// JSON catalog to filter instead of the built-in sample
    #[config(env = "SOLID_CATALOG")]
    pub catalog_file: Option<PathBuf>,
}

impl Default for SolidConfig {
    fn default() -> Self {
        Self {
            journal_file: "journal.txt".to_string(),
            output_dir: PathBuf::from("."),
            catalog_file: None,
        }
    }
}

/// Location of the global `solid.toml`, if the platform has a config directory.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "solid").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl SolidConfig {
    /// Load with the full hierarchy: env, project file, global file, defaults.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let mut files = vec![project_dir.join(CONFIG_FILE_NAME)];
        files.extend(global_config_path());
        Self::load_layers(&files, true)
    }

    /// Load from the given files, highest priority first. Missing files are skipped.
    pub fn load_layers(files: &[PathBuf], use_env: bool) -> Result<Self> {
        let mut builder = Self::builder();
        if use_env {
            builder = builder.env();
        }
        for file in files {
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| SolidError::Config(e.to_string()))
    }
}
