//! # Context Setup
//!
//! [`initialize`] turns a working directory into a ready-to-use [`SolidContext`]:
//!
//! 1. Load [`SolidConfig`] with the full hierarchy (env, `./solid.toml`,
//!    global `solid.toml`, defaults).
//! 2. Pick the catalog source:
//!    - `catalog_override` (the CLI `--catalog` flag) if given,
//!    - else `catalog_file` from configuration,
//!    - else the built-in sample.
//! 3. Point a [`FileSink`] at `output_dir`.
//!
//! The catalog file is not read here. A missing or broken catalog only fails
//! the commands that filter it.
//!
//! Relative paths in configuration and overrides are resolved against the
//! working directory, not the process's current directory.

use crate::api::SolidApi;
use crate::catalog::CatalogSource;
use crate::config::SolidConfig;
use crate::error::Result;
use crate::sink::FileSink;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub struct SolidContext {
    pub api: SolidApi<FileSink>,
    pub config: SolidConfig,
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    cwd.join(relative)
}

pub fn initialize(cwd: &Path, catalog_override: Option<PathBuf>) -> Result<SolidContext> {
    let config = SolidConfig::load(cwd)?;

    let catalog = match catalog_override.or_else(|| config.catalog_file.clone()) {
        Some(path) => CatalogSource::File(resolve(cwd, &path)),
        None => CatalogSource::Sample,
    };

    let sink = FileSink::new(resolve(cwd, &config.output_dir));
    debug!(output_dir = %sink.root().display(), catalog = ?catalog, "initialized");

    Ok(SolidContext {
        api: SolidApi::new(catalog, sink, config.clone()),
        config,
    })
}
