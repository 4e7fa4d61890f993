//! Ward domain model
//!
//! A ward is a named department with a fixed bed capacity, a gender
//! admission policy and an optional overflow target. Ward definitions are
//! static configuration: they are loaded once at startup and never mutated
//! at runtime.

use super::ids::{BedLabel, WardName};
use super::stay::Gender;
use serde::{Deserialize, Serialize};

/// Gender admission policy for a ward
///
/// Mixed wards accept any patient; single-gender wards expect the patient
/// gender to match at admission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPolicy {
    /// Only male patients are admitted
    Male,
    /// Only female patients are admitted
    Female,
    /// Any patient may be admitted
    Mixed,
}

impl GenderPolicy {
    /// Returns true if a patient of the given gender may be admitted
    pub fn accepts(&self, gender: Gender) -> bool {
        match self {
            GenderPolicy::Male => gender == Gender::Male,
            GenderPolicy::Female => gender == Gender::Female,
            GenderPolicy::Mixed => true,
        }
    }
}

/// A hospital ward with fixed capacity
///
/// # Examples
///
/// ```
/// use bedwatch::domain::ward::{GenderPolicy, Ward};
/// use bedwatch::domain::ids::WardName;
///
/// let icu = Ward::new(WardName::new("ICU").unwrap(), 16, GenderPolicy::Mixed, None);
/// assert_eq!(icu.bed_label(1).as_str(), "ICU-001");
/// assert_eq!(icu.all_beds().len(), 16);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ward {
    /// Unique ward name
    pub name: WardName,

    /// Number of beds in the ward
    pub capacity: u32,

    /// Gender admission policy
    pub gender: GenderPolicy,

    /// Ward to suggest transfers to when this one runs hot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<WardName>,
}

impl Ward {
    /// Creates a new ward
    pub fn new(
        name: WardName,
        capacity: u32,
        gender: GenderPolicy,
        overflow: Option<WardName>,
    ) -> Self {
        Self {
            name,
            capacity,
            gender,
            overflow,
        }
    }

    /// Returns the three-character label prefix derived from the ward name
    ///
    /// First three alphanumeric characters of the name, uppercased. Short
    /// names keep whatever characters they have.
    pub fn bed_prefix(&self) -> String {
        self.name
            .as_str()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .take(3)
            .collect::<String>()
            .to_uppercase()
    }

    /// Returns the label for bed `n`, where `n` is in `1..=capacity`
    ///
    /// Labels look like `MED-001`. Indexes outside the capacity range still
    /// format; callers that care use [`Ward::all_beds`].
    pub fn bed_label(&self, n: u32) -> BedLabel {
        // Label text is never empty because of the zero-padded index, so
        // the constructor cannot fail here.
        BedLabel::new(format!("{}-{:03}", self.bed_prefix(), n))
            .unwrap_or_else(|_| unreachable!("bed label is never empty"))
    }

    /// Returns every bed label in the ward, in bed order
    pub fn all_beds(&self) -> Vec<BedLabel> {
        (1..=self.capacity).map(|n| self.bed_label(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ward(name: &str, capacity: u32, gender: GenderPolicy) -> Ward {
        Ward::new(WardName::new(name).unwrap(), capacity, gender, None)
    }

    #[test]
    fn test_bed_prefix_strips_non_alphanumeric() {
        let w = ward("Medical Male", 50, GenderPolicy::Male);
        assert_eq!(w.bed_prefix(), "MED");
        // Space between "Medical" and "Male" is skipped, not counted.
        let w2 = ward("IC U", 4, GenderPolicy::Mixed);
        assert_eq!(w2.bed_prefix(), "ICU");
    }

    #[test]
    fn test_bed_prefix_short_name() {
        let w = ward("ER", 10, GenderPolicy::Mixed);
        assert_eq!(w.bed_prefix(), "ER");
        assert_eq!(w.bed_label(7).as_str(), "ER-007");
    }

    #[test]
    fn test_bed_labels_are_zero_padded() {
        let w = ward("ICU", 16, GenderPolicy::Mixed);
        assert_eq!(w.bed_label(1).as_str(), "ICU-001");
        assert_eq!(w.bed_label(16).as_str(), "ICU-016");
    }

    #[test]
    fn test_all_beds_covers_capacity() {
        let w = ward("Pediatric", 30, GenderPolicy::Mixed);
        let beds = w.all_beds();
        assert_eq!(beds.len(), 30);
        assert_eq!(beds[0].as_str(), "PED-001");
        assert_eq!(beds[29].as_str(), "PED-030");
    }

    #[test]
    fn test_gender_policy_accepts() {
        assert!(GenderPolicy::Male.accepts(Gender::Male));
        assert!(!GenderPolicy::Male.accepts(Gender::Female));
        assert!(GenderPolicy::Female.accepts(Gender::Female));
        assert!(!GenderPolicy::Female.accepts(Gender::Male));
        assert!(GenderPolicy::Mixed.accepts(Gender::Male));
        assert!(GenderPolicy::Mixed.accepts(Gender::Female));
    }
}
