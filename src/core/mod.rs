//! Core occupancy logic for Bedwatch.
//!
//! # Modules
//!
//! - [`model`] - The occupancy model: ward table, stay collection, admit
//!   and discharge mutations, and every derived query
//! - [`metrics`] - Status banding and occupancy arithmetic
//! - [`seed`] - Deterministic demo-data generation
//! - [`interchange`] - CSV import/export of the stay collection
//!
//! # Typical flow
//!
//! ```rust
//! use bedwatch::core::model::OccupancyModel;
//! use bedwatch::domain::{GenderPolicy, Ward, WardName};
//! use chrono::Utc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let icu = WardName::new("ICU")?;
//! let mut model = OccupancyModel::new(vec![Ward::new(
//!     icu.clone(),
//!     16,
//!     GenderPolicy::Mixed,
//!     None,
//! )])?;
//!
//! let occ = model.occupancy(&icu)?;
//! println!("{}/{} occupied ({:.1}%)", occ.occupied, occ.capacity, occ.rate);
//! println!("free within 24h: {}", model.forecast_free(&icu, 24, Utc::now())?);
//! # Ok(())
//! # }
//! ```

pub mod interchange;
pub mod metrics;
pub mod model;
pub mod seed;

// Re-export the types the host layer touches most
pub use interchange::{ImportReport, RowError};
pub use metrics::{CapacityAlert, StatusBand, WardOccupancy, WardStatusRow};
pub use model::{AdmissionRequest, OccupancyModel};
pub use seed::generate_seed_data;
