//! mdsection CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "mdsection")]
#[command(version)]
#[command(
    about = "Turn mdast headings into section components and build a table of contents",
    long_about = None
)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the transform pipeline over an mdast JSON tree
    Transform {
        /// Input mdast JSON file ('-' for stdin)
        input: String,

        /// Write output to FILE instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Build metadata JSON to start from
        #[arg(short = 'm', long)]
        meta: Option<PathBuf>,

        /// YAML config file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Suppress warnings
        #[arg(short = 'q', long)]
        quiet: bool,
    },

    /// Print the nested table of contents of an mdast JSON tree
    Toc {
        /// Input mdast JSON file ('-' for stdin)
        input: String,

        /// Write output to FILE instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Suppress warnings
        #[arg(short = 'q', long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Stdout is reserved for JSON output.
    let default_filter = if cli.verbose {
        "mdsection=debug,mdsection_core=debug"
    } else {
        "mdsection=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Transform {
            input,
            output,
            meta,
            config,
            quiet,
        } => commands::transform::execute(commands::transform::TransformArgs {
            input,
            output,
            meta,
            config,
            quiet,
        }),
        Commands::Toc {
            input,
            output,
            quiet,
        } => commands::toc::execute(commands::toc::TocArgs {
            input,
            output,
            quiet,
        }),
    }
}
