//! Discharge command implementation

use super::load_model_from_file;
use crate::config::load_config;
use crate::core::interchange;
use crate::domain::PatientId;
use chrono::{DateTime, Utc};
use clap::Args;

/// Arguments for the discharge command
#[derive(Args, Debug)]
pub struct DischargeArgs {
    /// Path of the stay file to update
    #[arg(short, long)]
    pub stays: String,

    /// Patient identifier
    #[arg(long)]
    pub pin: String,

    /// Discharge timestamp (RFC 3339); now when omitted
    #[arg(long)]
    pub time: Option<String>,
}

impl DischargeArgs {
    /// Execute the discharge command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let timestamp = match &self.time {
            Some(text) => DateTime::parse_from_rfc3339(text)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| anyhow::anyhow!("Bad discharge timestamp '{text}': {e}"))?,
            None => Utc::now(),
        };

        let (mut model, _) = load_model_from_file(&config, &self.stays)?;
        let patient = PatientId::new(self.pin.clone()).map_err(anyhow::Error::msg)?;

        match model.discharge(&patient, timestamp) {
            Ok(()) => {
                interchange::write_stays_file(&self.stays, model.stays())?;
                println!("✅ Discharged {patient} at {}", timestamp.to_rfc3339());
                Ok(0)
            }
            Err(e) => {
                crate::log_rejection!(e, "discharge");
                println!("❌ {e}");
                Ok(1)
            }
        }
    }
}
