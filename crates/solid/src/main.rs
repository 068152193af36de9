//! # Solid CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/solidapp/`: Core library with UI-agnostic logic
//! - `crates/solid/`: This CLI tool, depends on `solidapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/solid/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, context wiring and dispatch (commands.rs)       │
//! │  - Terminal rendering with console styles (render.rs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/solidapp/src/api.rs)                     │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors bubble up as `anyhow::Error`; they are printed once here, with their
//! context chain, and the process exits with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
