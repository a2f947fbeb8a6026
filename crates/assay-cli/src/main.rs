//! Assay CLI - schema validation and quality scoring for tabular data.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            file,
            schema,
            builtin,
            json,
        } => match commands::validate::run(file, schema, builtin, json, cli.verbose) {
            Ok(false) => std::process::exit(1),
            other => other.map(|_| ()),
        },

        Commands::Quality { file, json } => commands::quality::run(file, json, cli.verbose),

        Commands::Preprocess {
            file,
            output,
            keep_duplicates,
            keep_missing,
            cap_outliers,
            json,
        } => commands::preprocess::run(
            file,
            output,
            keep_duplicates,
            keep_missing,
            cap_outliers,
            json,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
