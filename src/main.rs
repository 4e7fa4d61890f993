// Bedwatch - Hospital Bed Occupancy Toolkit
// Copyright (c) 2026 Bedwatch Contributors
// Licensed under the MIT License

use bedwatch::cli::{Cli, Commands};
use bedwatch::config::{load_config, LoggingConfig};
use bedwatch::logging::init_logging;
use clap::Parser;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // The config file's [logging] and log_level settings apply when it
    // loads; a broken or absent config still gets console logging so the
    // init and validate-config commands can report what went wrong.
    let (log_level, logging_config) = match load_config(&cli.config) {
        Ok(config) => (
            cli.log_level
                .clone()
                .unwrap_or(config.application.log_level.clone()),
            config.logging,
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            LoggingConfig::default(),
        ),
    };

    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Bedwatch - Hospital Bed Occupancy Toolkit"
    );

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Init(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Seed(args) => args.execute(&cli.config),
        Commands::Report(args) => args.execute(&cli.config),
        Commands::Admit(args) => args.execute(&cli.config),
        Commands::Discharge(args) => args.execute(&cli.config),
    }
}
