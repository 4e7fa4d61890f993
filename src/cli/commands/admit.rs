//! Admit command implementation
//!
//! Loads a stay file, runs one validated admission against the model and
//! writes the file back. Rejections exit 1 with the typed reason.

use super::load_model_from_file;
use crate::config::load_config;
use crate::core::interchange;
use crate::core::model::AdmissionRequest;
use crate::domain::{AdmissionSource, BedLabel, Gender, PatientId, WardName};
use chrono::{Duration, Utc};
use clap::Args;
use std::str::FromStr;

/// Arguments for the admit command
#[derive(Args, Debug)]
pub struct AdmitArgs {
    /// Path of the stay file to update
    #[arg(short, long)]
    pub stays: String,

    /// Patient identifier
    #[arg(long)]
    pub pin: String,

    /// Patient gender (male or female)
    #[arg(long)]
    pub gender: String,

    /// Target ward
    #[arg(long)]
    pub ward: String,

    /// Requested bed; the first free bed is used when omitted
    #[arg(long)]
    pub bed: Option<String>,

    /// Hours until the scheduled discharge
    #[arg(long, default_value_t = 72)]
    pub expected_hours: i64,

    /// Admission source (emergency, elective or transfer)
    #[arg(long, default_value = "emergency")]
    pub source: String,
}

impl AdmitArgs {
    /// Execute the admit command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let (mut model, _) = load_model_from_file(&config, &self.stays)?;

        let ward = WardName::new(self.ward.clone()).map_err(anyhow::Error::msg)?;
        let bed = match &self.bed {
            Some(label) => BedLabel::new(label.clone()).map_err(anyhow::Error::msg)?,
            None => match model.available_beds(&ward) {
                Ok(free) => match free.into_iter().next() {
                    Some(first) => first,
                    None => {
                        println!("❌ Ward {ward} is full; admission blocked");
                        return Ok(1);
                    }
                },
                Err(e) => {
                    println!("❌ {e}");
                    return Ok(1);
                }
            },
        };

        let now = Utc::now();
        let request = AdmissionRequest {
            patient: PatientId::new(self.pin.clone()).map_err(anyhow::Error::msg)?,
            gender: Gender::from_str(&self.gender).map_err(anyhow::Error::msg)?,
            ward,
            bed,
            admitted_at: now,
            expected_discharge: now + Duration::hours(self.expected_hours),
            source: AdmissionSource::from_str(&self.source).map_err(anyhow::Error::msg)?,
        };

        match model.admit(request) {
            Ok(stay) => {
                interchange::write_stays_file(&self.stays, model.stays())?;
                println!(
                    "✅ Admitted {} to {} bed {}",
                    stay.patient, stay.ward, stay.bed
                );
                Ok(0)
            }
            Err(e) => {
                crate::log_rejection!(e, "admit");
                println!("❌ {e}");
                Ok(1)
            }
        }
    }
}
