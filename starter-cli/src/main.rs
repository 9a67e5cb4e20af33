use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use starter_core::config::load_settings_or_default;
use starter_core::{load_settings, settings_path, StarterError};

fn main() {
    let cli = Cli::parse();

    // STARTER_LOG wins over -v; RUST_LOG wins over both
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let log_level = std::env::var("STARTER_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<StarterError>() {
            Some(StarterError::ConfigMissing(_)) => 1,
            Some(StarterError::Persistence(_)) => 1,
            Some(StarterError::Configuration(_)) | Some(StarterError::Serialization(_)) => 2,
            Some(StarterError::Io(_)) => 3,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // An explicit settings file must exist; the default one is optional
    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => load_settings_or_default(settings_path())?,
    };

    tracing::debug!("{}", starter_core::system::describe_paths(&settings));

    match cli.command {
        Commands::CheckUpdates(args) => crate::cli::commands::check_updates::run(args, &settings),
        Commands::CreateSuperAdmin(args) => {
            crate::cli::commands::create_super_admin::run(args, &settings)
        }
    }
}
