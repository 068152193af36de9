//! # CLI Behavior
//!
//! This is **one possible UI client** for solidapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Commands
//!
//! - `solid filter`: select catalog products with `--where attr=value`
//!   conditions. Several conditions are joined with AND, or with OR under
//!   `--any`. No conditions lists the whole catalog.
//! - `solid journal`: record entries and print them; `--save` writes them to
//!   the configured journal file, `--save NAME` to `NAME`.
//! - `solid shapes`: the rectangle/square area check.
//! - `solid devices`: broad versus segregated device interfaces.
//! - `solid config`: the resolved configuration.
//!
//! Every command accepts `--json` to print the raw `CmdResult` instead.
//!
//! ## Module Structure
//!
//! - `commands`: Logging setup, context wiring and dispatch
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
