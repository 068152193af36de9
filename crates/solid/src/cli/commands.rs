//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Flow
//!
//! 1. **Argument Parsing**: clap turns shell arguments into [`Cli`]
//! 2. **Logging**: stderr subscriber filtered by `SOLID_LOG` (or `debug` under `--verbose`)
//! 3. **Context Setup**: [`initialize`] loads configuration and the catalog
//! 4. **Dispatch**: one API call per command
//! 5. **Output**: rendered text, or JSON with `--json`

use super::render::render_result;
use super::setup::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use solidapp::commands::filter::Combine;
use solidapp::commands::CmdResult;
use solidapp::init::{initialize, SolidContext};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "SOLID_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let catalog_override = match &cli.command {
        Commands::Filter { catalog, .. } => catalog.clone(),
        _ => None,
    };
    let ctx = initialize(&cwd, catalog_override).context("Failed to initialize solid")?;

    let json = cli.command.output().json;
    let result = dispatch(&ctx, cli.command)?;
    print_result(&result, json)
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(env_filter)
        .try_init();
}

fn dispatch(ctx: &SolidContext, command: Commands) -> Result<CmdResult> {
    let api = &ctx.api;
    match command {
        Commands::Filter {
            conditions, any, ..
        } => {
            let combine = if any { Combine::Any } else { Combine::All };
            debug!(conditions = ?conditions, ?combine, "filter");
            api.filter_products(&conditions, combine)
                .context("Failed to filter products")
        }
        Commands::Journal { texts, save, .. } => api
            .record_journal(&texts, save.is_some(), save.flatten().as_deref())
            .context("Failed to record journal"),
        Commands::Shapes { .. } => Ok(api.check_shapes()),
        Commands::Devices { document, .. } => Ok(api.run_devices(&document)),
        Commands::Config { .. } => Ok(api.show_config()),
    }
}

fn print_result(result: &CmdResult, json: bool) -> Result<()> {
    if json {
        let output =
            serde_json::to_string_pretty(result).context("Failed to serialize the result")?;
        println!("{}", output);
    } else {
        print!("{}", render_result(result));
    }
    Ok(())
}
