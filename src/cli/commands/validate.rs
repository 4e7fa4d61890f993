//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates internally, so reaching Ok means both the
        // parse and the semantic checks passed.
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let total_capacity: u32 = config.wards.iter().map(|w| w.capacity).sum();

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Wards: {} ({} beds total)", config.wards.len(), total_capacity);
        for ward in &config.wards {
            let overflow = ward
                .overflow
                .as_deref()
                .map(|o| format!(", overflow -> {o}"))
                .unwrap_or_default();
            println!(
                "    {} - {} beds, {:?}{}",
                ward.name, ward.capacity, ward.gender, overflow
            );
        }
        println!("  Seed Load Factor: {}", config.seed.load_factor);
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();
        Ok(0)
    }
}
