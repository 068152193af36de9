use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "solid",
    bin_name = "solid",
    version,
    disable_help_subcommand = true
)]
#[command(about = "A command-line tour of the SOLID design principles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Flags shared by every command.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct OutputArgs {
    /// Print the result as JSON
    #[arg(long, help_heading = "Output")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select catalog products by attribute (open/closed)
    Filter {
        /// Condition such as `color=green` or `size!=small`; repeatable
        #[arg(short = 'w', long = "where", value_name = "EXPR")]
        conditions: Vec<String>,

        /// Match products satisfying any condition instead of all of them
        #[arg(long)]
        any: bool,

        /// JSON catalog to filter instead of the configured one
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Record journal entries and optionally save them (single responsibility)
    Journal {
        /// One entry per argument
        texts: Vec<String>,

        /// Save the journal, to NAME or to the configured journal file
        #[arg(long, value_name = "NAME", num_args = 0..=1)]
        save: Option<Option<String>>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check rectangles and squares for substitutability (Liskov)
    Shapes {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Exercise broad and segregated device interfaces (interface segregation)
    Devices {
        /// Name of the document to process
        #[arg(long, default_value = "document.txt")]
        document: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the resolved configuration
    Config {
        #[command(flatten)]
        output: OutputArgs,
    },
}

impl Commands {
    pub fn output(&self) -> OutputArgs {
        match self {
            Commands::Filter { output, .. }
            | Commands::Journal { output, .. }
            | Commands::Shapes { output }
            | Commands::Devices { output, .. }
            | Commands::Config { output } => *output,
        }
    }
}
