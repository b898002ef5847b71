//! FormGrid - command-line editor for form layout grids
//!
//! Creates grid documents and applies structural edits, component
//! placements and pixel queries to them.

use clap::{Parser, Subcommand};
use formgrid::cli::{
    CliError, ConfigArgs, DeleteArgs, InsertArgs, InspectArgs, NewArgs, PlaceArgs, QueryArgs,
    RemoveArgs, SpecArgs,
};
use formgrid::constants::APP_BINARY_NAME;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// FormGrid - command-line editor for form layout grids
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new grid document
    New(NewArgs),
    /// Print tracks, components and grid lines
    Inspect(InspectArgs),
    /// Insert a row or column
    Insert(InsertArgs),
    /// Delete a row or column
    Delete(DeleteArgs),
    /// Place or move a component
    Place(PlaceArgs),
    /// Remove a component
    Remove(RemoveArgs),
    /// Find the row or column under a pixel coordinate
    Query(QueryArgs),
    /// Print the canonical form of a track spec
    Spec(SpecArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config.as_deref();
    let result = match &cli.command {
        Command::New(args) => args.execute(config),
        Command::Inspect(args) => args.execute(config),
        Command::Insert(args) => args.execute(config),
        Command::Delete(args) => args.execute(config),
        Command::Place(args) => args.execute(config),
        Command::Remove(args) => args.execute(config),
        Command::Query(args) => args.execute(config),
        Command::Spec(args) => args.execute(),
        Command::Config(args) => args.execute(config),
    };

    if let Err(CliError { exit_code, message }) = result {
        eprintln!("Error: {message}");
        std::process::exit(exit_code as i32);
    }
}
