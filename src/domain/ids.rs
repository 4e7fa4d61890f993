//! Identifier newtypes with validation
//!
//! Patient identifiers, ward names and bed labels are all strings on the
//! wire, so each gets its own newtype to keep them from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient identifier newtype wrapper
///
/// The source systems use PIN-style identifiers (`PIN-1050`), but any
/// non-empty string is accepted.
///
/// # Examples
///
/// ```
/// use bedwatch::domain::ids::PatientId;
/// use std::str::FromStr;
///
/// let pin = PatientId::from_str("PIN-1050").unwrap();
/// assert_eq!(pin.as_str(), "PIN-1050");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(String);

impl PatientId {
    /// Creates a new PatientId from a string
    ///
    /// # Errors
    ///
    /// Returns `Err` if the identifier is empty or whitespace-only
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Patient ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the patient ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ward name newtype wrapper
///
/// Ward names are the unique key of the static ward table and the foreign
/// key carried by every stay record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WardName(String);

impl WardName {
    /// Creates a new WardName from a string
    ///
    /// # Errors
    ///
    /// Returns `Err` if the name is empty or whitespace-only
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Ward name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the ward name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WardName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for WardName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Bed label newtype wrapper
///
/// Labels follow the `PREFIX-NNN` convention derived from the ward name
/// (see [`crate::domain::ward::Ward::bed_label`]), but imported data may
/// carry arbitrary non-empty labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BedLabel(String);

impl BedLabel {
    /// Creates a new BedLabel from a string
    ///
    /// # Errors
    ///
    /// Returns `Err` if the label is empty or whitespace-only
    pub fn new(label: impl Into<String>) -> Result<Self, String> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err("Bed label cannot be empty".to_string());
        }
        Ok(Self(label))
    }

    /// Returns the bed label as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BedLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BedLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
