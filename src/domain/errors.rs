//! Domain error types
//!
//! Admission and discharge rejections are typed so callers can surface the
//! exact reason to the user; nothing in the model is fatal to the process.

use super::ids::{BedLabel, PatientId, WardName};
use thiserror::Error;

/// Main Bedwatch error type
///
/// Wraps the operation-specific errors and the ambient failure modes
/// (configuration, interchange, I/O) behind one type for the `?` operator.
#[derive(Debug, Error)]
pub enum BedwatchError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A query named a ward that is not configured
    #[error("Unknown ward: {0}")]
    UnknownWard(String),

    /// Admission rejected
    #[error("Admission rejected: {0}")]
    Admission(#[from] AdmissionError),

    /// Discharge rejected
    #[error("Discharge rejected: {0}")]
    Discharge(#[from] DischargeError),

    /// Stay interchange (import/export) errors
    #[error("Interchange error: {0}")]
    Interchange(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Why an admission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// The requested ward is not configured
    #[error("Ward not found: {0}")]
    WardNotFound(WardName),

    /// The requested bed is already held by an active stay (or does not
    /// exist in the ward); a full ward reports this for every bed
    #[error("Bed {bed} in ward {ward} is not available")]
    BedOccupied { ward: WardName, bed: BedLabel },

    /// The ward's gender policy does not accept the patient
    #[error("Ward {ward} does not admit {gender} patients")]
    GenderMismatch { ward: WardName, gender: String },
}

/// Why a discharge was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DischargeError {
    /// No stay exists for the patient
    #[error("No stay found for patient {0}")]
    NotFound(PatientId),

    /// The patient's stay was already discharged; the recorded timestamp
    /// is immutable
    #[error("Patient {0} is already discharged")]
    AlreadyDischarged(PatientId),
}

// Conversion from std::io::Error
impl From<std::io::Error> for BedwatchError {
    fn from(err: std::io::Error) -> Self {
        BedwatchError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for BedwatchError {
    fn from(err: serde_json::Error) -> Self {
        BedwatchError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for BedwatchError {
    fn from(err: toml::de::Error) -> Self {
        BedwatchError::Configuration(format!("TOML parse error: {err}"))
    }
}
