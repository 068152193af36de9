//! # Solid Architecture
//!
//! Solid is a small library of SOLID design examples with a CLI client on
//! top. The centerpiece is the open/closed product filter: selection criteria
//! are [`specification::Specification`] values that compose with `and`, `or`
//! and `not`, so new criteria never require changing the filter.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (solid crate)                                    │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Fills in configured defaults                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on Rust types, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (specification/, attributes/, catalog/, journal,    │
//! │  sink, shapes, devices)                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the binary decides whether
//! and where they are shown.
//!
//! ## Module Overview
//!
//! - [`specification`]: The `Specification` trait, combinators and `filter`
//! - [`attributes`]: Named attributes and runtime filter expressions
//! - [`catalog`]: Products, their specifications and the sample catalog
//! - [`journal`]: Numbered journal entries
//! - [`sink`]: Where saved content goes (`FileSink`, `MemSink`)
//! - [`shapes`]: Rectangles, squares and the area check
//! - [`devices`]: Broad and segregated device interfaces
//! - [`commands`]: One function per CLI command
//! - [`api`]: The facade UI clients talk to
//! - [`init`]: Builds a ready-to-use context from a working directory
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod devices;
pub mod error;
pub mod init;
pub mod journal;
pub mod shapes;
pub mod sink;
pub mod specification;
