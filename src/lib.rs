// Bedwatch - Hospital Bed Occupancy Toolkit
// Copyright (c) 2026 Bedwatch Contributors
// Licensed under the MIT License

//! # Bedwatch - Hospital Bed Occupancy Core
//!
//! Bedwatch is the occupancy model behind a bed-management dashboard: a
//! static ward table, an in-memory stay collection, validated admit and
//! discharge mutations, and per-ward and hospital-wide metrics derived on
//! demand.
//!
//! ## Architecture
//!
//! Bedwatch follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The occupancy model, metrics, seed data and interchange
//! - [`domain`] - Domain types, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bedwatch::config::BedwatchConfig;
//! use bedwatch::core::model::OccupancyModel;
//! use chrono::Utc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the static ward table
//!     let config = BedwatchConfig::from_file("bedwatch.toml")?;
//!     let model = OccupancyModel::new(config.ward_table()?)?;
//!
//!     // Derive metrics on demand
//!     let occ = model.hospital_occupancy();
//!     println!(
//!         "{}/{} beds occupied ({:.1}%, {})",
//!         occ.occupied,
//!         occ.capacity,
//!         occ.rate,
//!         occ.band()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Mutations
//!
//! Admissions and discharges are single-shot and typed: they either
//! succeed or come back as an [`domain::AdmissionError`] /
//! [`domain::DischargeError`] for user-facing display. Nothing is silently
//! ignored and nothing is fatal to the process.
//!
//! ## Status bands
//!
//! Occupancy rates classify into Safe (< 70%), Warning (70-84%) and
//! Critical (>= 85%). The thresholds are shared with every dashboard
//! variant that renders this model and must not drift; see
//! [`core::metrics::StatusBand`].
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`] with
//! [`domain::BedwatchError`]:
//!
//! ```rust,no_run
//! use bedwatch::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = bedwatch::config::load_config("bedwatch.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Bedwatch uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(ward = "ICU", occupied = 14, "Occupancy computed");
//! warn!(ward = "ICU", rate = 87.5, "Ward critical");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
