//! Stay domain model
//!
//! A stay is one patient's occupancy record from admission to discharge.
//! It is created active (no actual discharge) and transitions exactly once
//! when the discharge timestamp is recorded.

use super::ids::{BedLabel, PatientId, WardName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient gender as recorded on admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("Unknown gender: {other}")),
        }
    }
}

/// How the patient arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionSource {
    Emergency,
    Elective,
    Transfer,
}

impl fmt::Display for AdmissionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdmissionSource::Emergency => write!(f, "Emergency"),
            AdmissionSource::Elective => write!(f, "Elective"),
            AdmissionSource::Transfer => write!(f, "Transfer"),
        }
    }
}

impl FromStr for AdmissionSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emergency" => Ok(AdmissionSource::Emergency),
            "elective" => Ok(AdmissionSource::Elective),
            "transfer" => Ok(AdmissionSource::Transfer),
            other => Err(format!("Unknown admission source: {other}")),
        }
    }
}

/// One patient's occupancy record
///
/// # Examples
///
/// ```
/// use bedwatch::domain::stay::StayBuilder;
/// use chrono::{Duration, Utc};
///
/// let admitted = Utc::now();
/// let stay = StayBuilder::new()
///     .patient("PIN-1050").unwrap()
///     .gender("female").unwrap()
///     .ward("Obstetrics").unwrap()
///     .bed("OBS-004").unwrap()
///     .admitted_at(admitted)
///     .expected_discharge(admitted + Duration::days(3))
///     .source("Elective").unwrap()
///     .build()
///     .unwrap();
/// assert!(stay.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stay {
    /// Patient identifier
    pub patient: PatientId,

    /// Patient gender
    pub gender: Gender,

    /// Ward the patient occupies; must reference a configured ward
    pub ward: WardName,

    /// Bed within the ward
    pub bed: BedLabel,

    /// When the patient was admitted
    pub admitted_at: DateTime<Utc>,

    /// Scheduled discharge; assumed to be after admission
    pub expected_discharge: DateTime<Utc>,

    /// Recorded discharge; `None` means the stay is active.
    /// Once set it is never cleared or changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_discharge: Option<DateTime<Utc>>,

    /// How the patient arrived
    pub source: AdmissionSource,
}

impl Stay {
    /// Creates a new builder for constructing a Stay
    pub fn builder() -> StayBuilder {
        StayBuilder::default()
    }

    /// Returns true while no discharge has been recorded
    pub fn is_active(&self) -> bool {
        self.actual_discharge.is_none()
    }

    /// Returns true if the stay is active and past its scheduled discharge
    pub fn is_overdue(&self, as_of: DateTime<Utc>) -> bool {
        self.is_active() && self.expected_discharge < as_of
    }
}

/// Builder for constructing Stay instances
///
/// New stays are always built active; the discharge timestamp is only ever
/// set through the occupancy model (or carried by imported rows via
/// [`StayBuilder::actual_discharge`]).
#[derive(Debug, Default)]
pub struct StayBuilder {
    patient: Option<PatientId>,
    gender: Option<Gender>,
    ward: Option<WardName>,
    bed: Option<BedLabel>,
    admitted_at: Option<DateTime<Utc>>,
    expected_discharge: Option<DateTime<Utc>>,
    actual_discharge: Option<DateTime<Utc>>,
    source: Option<AdmissionSource>,
}

impl StayBuilder {
    /// Creates a new StayBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the patient identifier
    pub fn patient(mut self, id: impl Into<String>) -> Result<Self, String> {
        self.patient = Some(PatientId::new(id)?);
        Ok(self)
    }

    /// Sets the patient gender from its text form
    pub fn gender(mut self, gender: &str) -> Result<Self, String> {
        self.gender = Some(gender.parse()?);
        Ok(self)
    }

    /// Sets the ward name
    pub fn ward(mut self, ward: impl Into<String>) -> Result<Self, String> {
        self.ward = Some(WardName::new(ward)?);
        Ok(self)
    }

    /// Sets the bed label
    pub fn bed(mut self, bed: impl Into<String>) -> Result<Self, String> {
        self.bed = Some(BedLabel::new(bed)?);
        Ok(self)
    }

    /// Sets the admission timestamp
    pub fn admitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.admitted_at = Some(at);
        self
    }

    /// Sets the scheduled discharge timestamp
    pub fn expected_discharge(mut self, at: DateTime<Utc>) -> Self {
        self.expected_discharge = Some(at);
        self
    }

    /// Sets a recorded discharge, for rows imported already-discharged
    pub fn actual_discharge(mut self, at: DateTime<Utc>) -> Self {
        self.actual_discharge = Some(at);
        self
    }

    /// Sets the admission source from its text form
    pub fn source(mut self, source: &str) -> Result<Self, String> {
        self.source = Some(source.parse()?);
        Ok(self)
    }

    /// Builds the Stay
    ///
    /// # Errors
    ///
    /// Returns an error if any required field is missing
    pub fn build(self) -> Result<Stay, String> {
        Ok(Stay {
            patient: self.patient.ok_or("patient is required")?,
            gender: self.gender.ok_or("gender is required")?,
            ward: self.ward.ok_or("ward is required")?,
            bed: self.bed.ok_or("bed is required")?,
            admitted_at: self.admitted_at.ok_or("admitted_at is required")?,
            expected_discharge: self
                .expected_discharge
                .ok_or("expected_discharge is required")?,
            actual_discharge: self.actual_discharge,
            source: self.source.ok_or("source is required")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_stay() -> Stay {
        let admitted = Utc::now();
        StayBuilder::new()
            .patient("PIN-1050")
            .unwrap()
            .gender("female")
            .unwrap()
            .ward("Obstetrics")
            .unwrap()
            .bed("OBS-004")
            .unwrap()
            .admitted_at(admitted)
            .expected_discharge(admitted + Duration::days(3))
            .source("Elective")
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_produces_active_stay() {
        let stay = sample_stay();
        assert!(stay.is_active());
        assert_eq!(stay.patient.as_str(), "PIN-1050");
        assert_eq!(stay.source, AdmissionSource::Elective);
    }

    #[test]
    fn test_builder_missing_field() {
        let result = StayBuilder::new().patient("PIN-1").unwrap().build();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("gender is required"));
    }

    #[test]
    fn test_overdue_only_when_active() {
        let mut stay = sample_stay();
        let late = stay.expected_discharge + Duration::hours(6);
        assert!(stay.is_overdue(late));
        assert!(!stay.is_overdue(stay.expected_discharge - Duration::hours(1)));

        stay.actual_discharge = Some(late);
        assert!(!stay.is_overdue(late + Duration::hours(1)));
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_source_parsing() {
        assert_eq!(
            "emergency".parse::<AdmissionSource>().unwrap(),
            AdmissionSource::Emergency
        );
        assert_eq!(
            "Transfer".parse::<AdmissionSource>().unwrap(),
            AdmissionSource::Transfer
        );
        assert!("walk-in".parse::<AdmissionSource>().is_err());
    }

    #[test]
    fn test_stay_serialization() {
        let stay = sample_stay();
        let json = serde_json::to_string(&stay).unwrap();
        let back: Stay = serde_json::from_str(&json).unwrap();
        assert_eq!(stay, back);
        // Active stays omit the discharge field entirely.
        assert!(!json.contains("actual_discharge"));
    }
}
