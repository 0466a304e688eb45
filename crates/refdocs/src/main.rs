//! refdocs CLI - reference and examples sidebar builder.
//!
//! Provides commands for:
//! - `tree`: Build the sidebar tree for a content directory
//! - `items`: List normalized (optionally filtered) items
//! - `examples`: Pair example code with preview images

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExamplesArgs, ItemsArgs, TreeArgs};
use output::Output;

/// refdocs - Reference and examples sidebar builder.
#[derive(Parser)]
#[command(name = "refdocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sidebar tree as JSON (or indented text).
    Tree(TreeArgs),
    /// Print normalized items as JSON.
    Items(ItemsArgs),
    /// Print example code paired with preview images as JSON.
    Examples(ExamplesArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Tree(args) => args.content.verbose,
            Self::Items(args) => args.content.verbose,
            Self::Examples(args) => args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Tree(args) => args.execute(&output),
        Commands::Items(args) => args.execute(&output),
        Commands::Examples(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
