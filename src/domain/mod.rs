//! Domain models and types for Bedwatch.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PatientId`], [`WardName`], [`BedLabel`])
//! - **Domain models** ([`Ward`], [`Stay`])
//! - **Error types** ([`BedwatchError`], [`AdmissionError`], [`DischargeError`])
//! - **Result type alias** ([`Result`])
//!
//! Identifiers use the newtype pattern so ward names, bed labels and
//! patient ids cannot be mixed up even though all three are strings on the
//! wire:
//!
//! ```rust
//! use bedwatch::domain::{BedLabel, PatientId};
//!
//! # fn example() -> Result<(), String> {
//! let patient = PatientId::new("PIN-1050")?;
//! let bed = BedLabel::new("ICU-003")?;
//!
//! // This won't compile - type safety prevents mixing ids
//! // let wrong: PatientId = bed;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod stay;
pub mod ward;

// Re-export commonly used types for convenience
pub use errors::{AdmissionError, BedwatchError, DischargeError};
pub use ids::{BedLabel, PatientId, WardName};
pub use result::Result;
pub use stay::{AdmissionSource, Gender, Stay, StayBuilder};
pub use ward::{GenderPolicy, Ward};
