//! Seed command implementation
//!
//! Generates a demo stay collection over the configured ward table and
//! writes it as a CSV stay file.

use crate::config::load_config;
use crate::core::{generate_seed_data, interchange};
use chrono::Utc;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Arguments for the seed command
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Path of the stay file to write
    #[arg(short, long, default_value = "stays.csv")]
    pub out: String,

    /// RNG seed for reproducible output; random when omitted
    #[arg(long)]
    pub rng_seed: Option<u64>,

    /// Overwrite an existing stay file
    #[arg(long)]
    pub force: bool,
}

impl SeedArgs {
    /// Execute the seed command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(out = %self.out, "Generating seed data");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if std::path::Path::new(&self.out).exists() && !self.force {
            println!("❌ Stay file already exists: {}", self.out);
            println!("   Use --force to overwrite");
            return Ok(1);
        }

        let wards = config.ward_table().map_err(anyhow::Error::msg)?;
        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let stays = generate_seed_data(&wards, &config.seed, Utc::now(), &mut rng);
        interchange::write_stays_file(&self.out, &stays)?;

        println!("✅ Wrote {} stays to {}", stays.len(), self.out);
        println!("   View them: bedwatch report --stays {}", self.out);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CONFIG: &str = r#"
[[wards]]
name = "ICU"
capacity = 16
gender = "mixed"

[seed]
load_factor = 0.25
"#;

    #[test]
    fn test_seed_writes_stay_file() {
        let mut config_file = NamedTempFile::new().unwrap();
        config_file.write_all(CONFIG.as_bytes()).unwrap();
        config_file.flush().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("stays.csv");
        let args = SeedArgs {
            out: out.to_string_lossy().to_string(),
            rng_seed: Some(42),
            force: false,
        };
        assert_eq!(args.execute(config_file.path().to_str().unwrap()).unwrap(), 0);

        let text = std::fs::read_to_string(&out).unwrap();
        // Header plus 25% of 16 beds.
        assert_eq!(text.lines().count(), 1 + 4);
    }

    #[test]
    fn test_seed_refuses_to_overwrite() {
        let mut config_file = NamedTempFile::new().unwrap();
        config_file.write_all(CONFIG.as_bytes()).unwrap();
        config_file.flush().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("stays.csv");
        std::fs::write(&out, "existing").unwrap();

        let args = SeedArgs {
            out: out.to_string_lossy().to_string(),
            rng_seed: Some(42),
            force: false,
        };
        assert_eq!(args.execute(config_file.path().to_str().unwrap()).unwrap(), 1);
    }
}
