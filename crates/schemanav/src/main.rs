//! schemanav CLI - JSON Schema navigator.
//!
//! Provides commands for:
//! - `nav`: Print the side navigation for the loaded schema documents
//! - `path`: Print the breadcrumb trail for a URL path
//! - `resolve`: Print the schema a reference points at

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{NavArgs, PathArgs, ResolveArgs};
use output::Output;

/// schemanav - Browse interrelated JSON Schema documents.
#[derive(Parser)]
#[command(name = "schemanav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the side navigation as JSON.
    Nav(NavArgs),
    /// Print the breadcrumb trail for a URL path as JSON.
    Path(PathArgs),
    /// Print the schema a reference points at as JSON.
    Resolve(ResolveArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Nav(args) => args.schemas.verbose,
            Self::Path(args) => args.schemas.verbose,
            Self::Resolve(args) => args.schemas.verbose,
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
        Commands::Nav(args) => args.execute(&output),
        Commands::Path(args) => args.execute(&output),
        Commands::Resolve(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
