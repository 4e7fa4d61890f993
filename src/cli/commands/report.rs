//! Report command implementation
//!
//! The text rendering of the dashboard's overview page: hospital metrics,
//! capacity recommendations and the per-ward status table, all derived
//! from one occupancy model built over an imported stay file.

use super::load_model_from_file;
use crate::config::load_config;
use chrono::Utc;
use clap::{Args, ValueEnum};

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable table
    Text,
    /// Machine-readable JSON
    Json,
}

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path of the stay file to report on
    #[arg(short, long)]
    pub stays: String,

    /// Forecast horizon in hours
    #[arg(long, default_value_t = 24)]
    pub horizon: i64,

    /// Net-flow window in hours
    #[arg(long, default_value_t = 24)]
    pub window: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl ReportArgs {
    /// Execute the report command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(stays = %self.stays, horizon = self.horizon, "Building occupancy report");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let (model, loaded) = load_model_from_file(&config, &self.stays)?;
        if loaded == 0 {
            println!("❌ No usable rows in {}", self.stays);
            return Ok(3);
        }

        let as_of = Utc::now();
        let hospital = model.hospital_occupancy();
        let rows = model.ward_status_rows(self.horizon, as_of);
        let alerts = model.capacity_alerts();
        let net_flow = model.net_flow(self.window, as_of);
        let mismatches = model.gender_mismatches().len();
        let sources = model.source_breakdown();

        match self.format {
            ReportFormat::Json => {
                let payload = serde_json::json!({
                    "as_of": as_of.to_rfc3339(),
                    "horizon_hours": self.horizon,
                    "window_hours": self.window,
                    "hospital": {
                        "occupied": hospital.occupied,
                        "capacity": hospital.capacity,
                        "available": hospital.available,
                        "rate": hospital.rate,
                        "status": hospital.band(),
                        "net_flow": net_flow,
                        "gender_mismatches": mismatches,
                    },
                    "sources": sources
                        .iter()
                        .map(|(src, count)| (src.to_string(), *count))
                        .collect::<std::collections::BTreeMap<_, _>>(),
                    "wards": rows,
                    "alerts": alerts,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            ReportFormat::Text => {
                println!("🏥 Hospital Dashboard");
                println!();
                println!(
                    "  Total Beds: {}   Occupied: {} ({:.1}%)   Available: {}   Net Flow ({}h): {:+}",
                    hospital.capacity,
                    hospital.occupied,
                    hospital.rate,
                    hospital.available,
                    self.window,
                    net_flow
                );
                let by_source = sources
                    .iter()
                    .map(|(src, count)| format!("{src} {count}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("  Admissions by Source: {by_source}");
                if mismatches > 0 {
                    println!("  ⚠️  {mismatches} active stays violate ward gender policy");
                }
                println!();

                println!("Recommendations:");
                if alerts.is_empty() {
                    println!("  🟢 Operations are stable. No critical actions needed.");
                } else {
                    for alert in &alerts {
                        let action = match &alert.overflow {
                            Some(target) => format!("Consider transfers to {target}."),
                            None => "Consider transfers.".to_string(),
                        };
                        println!(
                            "  🔴 {} is {} ({:.1}%). {}",
                            alert.ward, alert.band, alert.rate, action
                        );
                    }
                }
                println!();

                println!("Department Status (forecast {}h):", self.horizon);
                println!(
                    "  {:<16} {:>4} {:>4} {:>5} {:>6} {:>9} {:>8}  Status",
                    "Ward", "Cap", "Occ", "Avail", "Rate", "Forecast", "Delayed"
                );
                for row in &rows {
                    println!(
                        "  {:<16} {:>4} {:>4} {:>5} {:>5.1}% {:>9} {:>8}  {}",
                        row.ward,
                        row.capacity,
                        row.occupied,
                        row.available,
                        row.rate,
                        row.forecast_free,
                        row.delayed,
                        row.status
                    );
                }
            }
        }
        Ok(0)
    }
}
