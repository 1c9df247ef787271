//! Artificer - artifact descriptor toolkit
//!
//! Resolves packaged deployable units (applications, domains, plugins) into
//! fully resolved in-memory descriptors and validates them against
//! composable deployment policies.

use clap::Parser;

mod artifact;
mod cli;
mod commands;
mod error;
mod factory;
mod loader;
mod model;
mod runtime;
mod validation;
mod version;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Compat(args) => commands::compat::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
