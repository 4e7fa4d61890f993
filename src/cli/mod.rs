//! CLI interface and argument parsing
//!
//! The binary is the host layer the model is injected into: every
//! subcommand builds an owned [`crate::core::model::OccupancyModel`] from
//! the configured ward table, runs one operation against it and exits.

pub mod commands;

use clap::{Parser, Subcommand};

/// Bedwatch - hospital bed occupancy toolkit
#[derive(Parser, Debug)]
#[command(name = "bedwatch")]
#[command(version, about, long_about = None)]
#[command(author = "Bedwatch Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "bedwatch.toml", env = "BEDWATCH_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BEDWATCH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Generate a demo stay collection
    Seed(commands::seed::SeedArgs),

    /// Show occupancy, forecast and flow metrics for a stay collection
    Report(commands::report::ReportArgs),

    /// Admit a patient into a stay collection
    Admit(commands::admit::AdmitArgs),

    /// Record a patient discharge in a stay collection
    Discharge(commands::discharge::DischargeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_report() {
        let cli = Cli::parse_from(["bedwatch", "report", "--stays", "stays.csv"]);
        assert_eq!(cli.config, "bedwatch.toml");
        assert!(matches!(cli.command, Commands::Report(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["bedwatch", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["bedwatch", "--log-level", "debug", "init"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_seed() {
        let cli = Cli::parse_from(["bedwatch", "seed", "--out", "demo.csv", "--rng-seed", "42"]);
        match cli.command {
            Commands::Seed(args) => {
                assert_eq!(args.out, "demo.csv");
                assert_eq!(args.rng_seed, Some(42));
            }
            _ => panic!("expected seed command"),
        }
    }

    #[test]
    fn test_cli_parse_admit() {
        let cli = Cli::parse_from([
            "bedwatch", "admit", "--stays", "stays.csv", "--pin", "PIN-1", "--gender", "female",
            "--ward", "ICU",
        ]);
        assert!(matches!(cli.command, Commands::Admit(_)));
    }

    #[test]
    fn test_cli_parse_discharge() {
        let cli = Cli::parse_from([
            "bedwatch",
            "discharge",
            "--stays",
            "stays.csv",
            "--pin",
            "PIN-1",
        ]);
        assert!(matches!(cli.command, Commands::Discharge(_)));
    }
}
