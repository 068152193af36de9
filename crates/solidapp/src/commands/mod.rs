//! # Command Layer
//!
//! Each command lives in its own submodule and implements a pure Rust function
//! over domain types.
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Terminal I/O**: No stdout, stderr, colors or formatting
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. It carries whatever the command
//! produced (products, journal entries, area reports, device actions, saved
//! paths, configuration) plus leveled [`CmdMessage`]s. The UI decides how to
//! render it.
//!
//! ## Command Modules
//!
//! - [`filter`]: Select catalog products with attribute expressions
//! - [`journal`]: Record journal entries and optionally save them
//! - [`shapes`]: Run the rectangle/square area check
//! - [`devices`]: Exercise broad and segregated device interfaces
//! - [`config`]: Report the resolved configuration

use crate::catalog::Product;
use crate::config::SolidConfig;
use crate::devices::DeviceAction;
use crate::journal::JournalEntry;
use crate::shapes::AreaReport;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod devices;
pub mod filter;
pub mod journal;
pub mod shapes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_products: Vec<Product>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub journal_entries: Vec<JournalEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub area_reports: Vec<AreaReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub device_actions: Vec<DeviceAction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub saved_paths: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<SolidConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_saved_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.saved_paths = paths;
        self
    }
}
