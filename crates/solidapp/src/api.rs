//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Fills in defaults** from configuration (e.g., the journal file name)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and performs no terminal I/O.
//!
//! The catalog is held as a [`CatalogSource`] and only read by
//! [`SolidApi::filter_products`]; other commands never touch it.
//!
//! ## Generic Over ContentSink
//!
//! `SolidApi<K: ContentSink>` is generic over where saved content goes:
//! - Production: `SolidApi<FileSink>`
//! - Testing: `SolidApi<MemSink>`

use crate::catalog::CatalogSource;
use crate::commands::{self, filter::Combine, CmdResult};
use crate::config::SolidConfig;
use crate::devices::Document;
use crate::error::Result;
use crate::sink::ContentSink;

pub struct SolidApi<K: ContentSink> {
    catalog: CatalogSource,
    sink: K,
    config: SolidConfig,
}

impl<K: ContentSink> SolidApi<K> {
    pub fn new(catalog: impl Into<CatalogSource>, sink: K, config: SolidConfig) -> Self {
        Self {
            catalog: catalog.into(),
            sink,
            config,
        }
    }

    pub fn catalog_source(&self) -> &CatalogSource {
        &self.catalog
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn config(&self) -> &SolidConfig {
        &self.config
    }

    pub fn filter_products<I: AsRef<str>>(
        &self,
        conditions: &[I],
        combine: Combine,
    ) -> Result<CmdResult> {
        let catalog = self.catalog.load()?;
        commands::filter::run(&catalog, conditions, combine)
    }

    /// Record entries; when `save` is set, write them to `name` or to the
    /// configured journal file.
    pub fn record_journal<I: AsRef<str>>(
        &self,
        texts: &[I],
        save: bool,
        name: Option<&str>,
    ) -> Result<CmdResult> {
        let save_as = save.then(|| name.unwrap_or(&self.config.journal_file));
        commands::journal::run(&self.sink, texts, save_as)
    }

    pub fn check_shapes(&self) -> CmdResult {
        commands::shapes::run()
    }

    pub fn run_devices(&self, document: &str) -> CmdResult {
        commands::devices::run(&Document::new(document))
    }

    pub fn show_config(&self) -> CmdResult {
        commands::config::run(&self.config)
    }
}
