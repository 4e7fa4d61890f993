//! Init command implementation
//!
//! Generates a starter configuration file with the standard ward table.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "bedwatch.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Bedwatch configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your ward table", self.output);
                println!("  2. Validate it: bedwatch validate-config");
                println!("  3. Generate demo data: bedwatch seed --out stays.csv");
                println!("  4. View occupancy: bedwatch report --stays stays.csv");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Starter configuration with the standard ward table
    fn starter_config() -> &'static str {
        r#"# Bedwatch Configuration File
# Hospital bed occupancy toolkit

[application]
log_level = "info"

# Static ward table: loaded once at startup, never mutated at runtime.
# gender is one of "male", "female" or "mixed"; overflow (optional) names
# the ward to suggest transfers to when this one runs hot.

[[wards]]
name = "Medical Male"
capacity = 50
gender = "male"

[[wards]]
name = "Medical Female"
capacity = 50
gender = "female"

[[wards]]
name = "Surgical Male"
capacity = 40
gender = "male"
overflow = "Medical Male"

[[wards]]
name = "Surgical Female"
capacity = 40
gender = "female"
overflow = "Medical Female"

[[wards]]
name = "ICU"
capacity = 16
gender = "mixed"

[[wards]]
name = "Pediatric"
capacity = 30
gender = "mixed"

[[wards]]
name = "Obstetrics"
capacity = 24
gender = "female"

# Demo-data generation (bedwatch seed)
[seed]
load_factor = 0.5
min_admitted_days_ago = 1
max_admitted_days_ago = 4
min_stay_days = 2
max_stay_days = 6

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}
