//! In-memory occupancy model
//!
//! Holds the static ward table and the stay collection, and derives every
//! metric on demand. All queries are O(n) scans over a small in-memory set;
//! there is no I/O and no background work. The model is an owned value the
//! host session layer passes around, never a process-wide singleton.

use crate::core::metrics::{CapacityAlert, StatusBand, WardOccupancy, WardStatusRow};
use crate::domain::{
    AdmissionError, AdmissionSource, BedLabel, BedwatchError, DischargeError, Gender, PatientId,
    Result, Stay, Ward, WardName,
};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

/// A validated request to admit a patient
///
/// Admissions always start active; the discharge timestamp can only be set
/// later through [`OccupancyModel::discharge`].
#[derive(Debug, Clone)]
pub struct AdmissionRequest {
    /// Patient to admit
    pub patient: PatientId,

    /// Patient gender, checked against the ward policy
    pub gender: Gender,

    /// Target ward
    pub ward: WardName,

    /// Requested bed; must currently be free
    pub bed: BedLabel,

    /// Admission timestamp
    pub admitted_at: DateTime<Utc>,

    /// Scheduled discharge
    pub expected_discharge: DateTime<Utc>,

    /// How the patient arrived
    pub source: AdmissionSource,
}

/// The occupancy model: ward definitions plus the stay collection
///
/// # Examples
///
/// ```
/// use bedwatch::core::model::OccupancyModel;
/// use bedwatch::domain::{GenderPolicy, Ward, WardName};
///
/// let wards = vec![Ward::new(
///     WardName::new("ICU").unwrap(),
///     16,
///     GenderPolicy::Mixed,
///     None,
/// )];
/// let model = OccupancyModel::new(wards).unwrap();
/// let occ = model.occupancy(&WardName::new("ICU").unwrap()).unwrap();
/// assert_eq!(occ.available, 16);
/// ```
#[derive(Debug, Clone)]
pub struct OccupancyModel {
    wards: Vec<Ward>,
    stays: Vec<Stay>,
}

impl OccupancyModel {
    /// Creates an empty model over the given ward table
    ///
    /// # Errors
    ///
    /// Returns a configuration error if two wards share a name.
    pub fn new(wards: Vec<Ward>) -> Result<Self> {
        let mut seen = HashSet::new();
        for ward in &wards {
            if !seen.insert(ward.name.clone()) {
                return Err(BedwatchError::Configuration(format!(
                    "Duplicate ward name: {}",
                    ward.name
                )));
            }
        }
        Ok(Self {
            wards,
            stays: Vec::new(),
        })
    }

    /// Returns the configured wards, in configuration order
    pub fn wards(&self) -> &[Ward] {
        &self.wards
    }

    /// Looks up a ward by name
    pub fn ward(&self, name: &WardName) -> Option<&Ward> {
        self.wards.iter().find(|w| &w.name == name)
    }

    /// Returns every stay, active and discharged, in insertion order
    pub fn stays(&self) -> &[Stay] {
        &self.stays
    }

    /// Replaces the stay collection wholesale
    ///
    /// Used after a bulk import; rows are expected to have been validated
    /// against the ward table already (see [`crate::core::interchange`]).
    pub fn load(&mut self, stays: Vec<Stay>) {
        tracing::debug!(count = stays.len(), "Loading stay collection");
        self.stays = stays;
    }

    /// Clears all stays (a full data reset); ward configuration is kept
    pub fn reset(&mut self) {
        tracing::info!(discarded = self.stays.len(), "Resetting stay collection");
        self.stays.clear();
    }

    /// Returns active stays, optionally filtered to one ward
    ///
    /// Insertion order, which is stable for display.
    pub fn active_stays(&self, ward: Option<&WardName>) -> Vec<&Stay> {
        self.stays
            .iter()
            .filter(|s| s.is_active())
            .filter(|s| ward.map_or(true, |w| &s.ward == w))
            .collect()
    }

    /// Finds the active stay for a patient, if any
    pub fn locate(&self, patient: &PatientId) -> Option<&Stay> {
        self.stays
            .iter()
            .find(|s| s.is_active() && &s.patient == patient)
    }

    /// Computes the occupancy snapshot for one ward
    ///
    /// `available` may be negative when imported data over-admits a ward;
    /// that is representable, not an error.
    pub fn occupancy(&self, ward: &WardName) -> Result<WardOccupancy> {
        let w = self
            .ward(ward)
            .ok_or_else(|| BedwatchError::UnknownWard(ward.to_string()))?;
        let occupied = self.active_stays(Some(ward)).len();
        Ok(WardOccupancy::compute(occupied, w.capacity))
    }

    /// Computes the occupancy snapshot across all wards
    pub fn hospital_occupancy(&self) -> WardOccupancy {
        let capacity: u32 = self.wards.iter().map(|w| w.capacity).sum();
        let occupied = self.active_stays(None).len();
        WardOccupancy::compute(occupied, capacity)
    }

    /// Counts active stays scheduled to leave within the horizon
    ///
    /// The boundary is inclusive: a stay expected out exactly at
    /// `as_of + horizon` counts. This is a predicate over already-scheduled
    /// discharges, not a prediction.
    pub fn forecast_free(
        &self,
        ward: &WardName,
        horizon_hours: i64,
        as_of: DateTime<Utc>,
    ) -> Result<usize> {
        if self.ward(ward).is_none() {
            return Err(BedwatchError::UnknownWard(ward.to_string()));
        }
        let cutoff = as_of + Duration::hours(horizon_hours);
        Ok(self
            .active_stays(Some(ward))
            .iter()
            .filter(|s| s.expected_discharge <= cutoff)
            .count())
    }

    /// Counts active stays already past their scheduled discharge
    pub fn delayed_discharges(&self, ward: &WardName, as_of: DateTime<Utc>) -> Result<usize> {
        if self.ward(ward).is_none() {
            return Err(BedwatchError::UnknownWard(ward.to_string()));
        }
        Ok(self
            .active_stays(Some(ward))
            .iter()
            .filter(|s| s.is_overdue(as_of))
            .count())
    }

    /// Returns the free bed labels of a ward, in bed order
    ///
    /// An empty result means the ward is full and admission must be
    /// blocked.
    pub fn available_beds(&self, ward: &WardName) -> Result<Vec<BedLabel>> {
        let w = self
            .ward(ward)
            .ok_or_else(|| BedwatchError::UnknownWard(ward.to_string()))?;
        Ok(self.free_beds(w))
    }

    fn free_beds(&self, ward: &Ward) -> Vec<BedLabel> {
        let occupied: HashSet<&BedLabel> = self
            .active_stays(Some(&ward.name))
            .iter()
            .map(|s| &s.bed)
            .collect();
        ward.all_beds()
            .into_iter()
            .filter(|b| !occupied.contains(b))
            .collect()
    }

    /// Admits a patient, appending a new active stay
    ///
    /// Validation order: the ward must exist, the requested bed must be
    /// free (a full ward rejects every bed), and a non-Mixed ward must
    /// match the patient's gender.
    ///
    /// # Errors
    ///
    /// [`AdmissionError::WardNotFound`], [`AdmissionError::BedOccupied`] or
    /// [`AdmissionError::GenderMismatch`].
    pub fn admit(&mut self, request: AdmissionRequest) -> std::result::Result<Stay, AdmissionError> {
        let ward = self
            .ward(&request.ward)
            .ok_or_else(|| AdmissionError::WardNotFound(request.ward.clone()))?;

        if !self.free_beds(ward).contains(&request.bed) {
            return Err(AdmissionError::BedOccupied {
                ward: request.ward,
                bed: request.bed,
            });
        }

        if !ward.gender.accepts(request.gender) {
            return Err(AdmissionError::GenderMismatch {
                ward: request.ward,
                gender: request.gender.to_string(),
            });
        }

        let stay = Stay {
            patient: request.patient,
            gender: request.gender,
            ward: request.ward,
            bed: request.bed,
            admitted_at: request.admitted_at,
            expected_discharge: request.expected_discharge,
            actual_discharge: None,
            source: request.source,
        };
        tracing::info!(
            patient = %stay.patient,
            ward = %stay.ward,
            bed = %stay.bed,
            source = %stay.source,
            "Patient admitted"
        );
        self.stays.push(stay.clone());
        Ok(stay)
    }

    /// Records a discharge on the patient's active stay
    ///
    /// The transition is terminal: the timestamp is set once and never
    /// changed.
    ///
    /// # Errors
    ///
    /// [`DischargeError::NotFound`] when no stay exists for the patient,
    /// [`DischargeError::AlreadyDischarged`] when only discharged stays do.
    pub fn discharge(
        &mut self,
        patient: &PatientId,
        timestamp: DateTime<Utc>,
    ) -> std::result::Result<(), DischargeError> {
        let mut seen_discharged = false;
        for stay in &mut self.stays {
            if &stay.patient != patient {
                continue;
            }
            if stay.is_active() {
                stay.actual_discharge = Some(timestamp);
                tracing::info!(
                    patient = %patient,
                    ward = %stay.ward,
                    bed = %stay.bed,
                    "Patient discharged"
                );
                return Ok(());
            }
            seen_discharged = true;
        }
        if seen_discharged {
            Err(DischargeError::AlreadyDischarged(patient.clone()))
        } else {
            Err(DischargeError::NotFound(patient.clone()))
        }
    }

    /// Admissions minus discharges inside the trailing window
    ///
    /// Both event kinds are counted over `(as_of - window) ..= as_of`, so
    /// future-dated rows in imported data stay outside the window.
    pub fn net_flow(&self, window_hours: i64, as_of: DateTime<Utc>) -> i64 {
        let cutoff = as_of - Duration::hours(window_hours);
        let admitted = self
            .stays
            .iter()
            .filter(|s| s.admitted_at >= cutoff && s.admitted_at <= as_of)
            .count() as i64;
        let discharged = self
            .stays
            .iter()
            .filter(|s| {
                s.actual_discharge
                    .is_some_and(|t| t >= cutoff && t <= as_of)
            })
            .count() as i64;
        admitted - discharged
    }

    /// Counts stays by admission source, all stays included
    ///
    /// Fixed Emergency / Elective / Transfer order for display.
    pub fn source_breakdown(&self) -> Vec<(AdmissionSource, usize)> {
        [
            AdmissionSource::Emergency,
            AdmissionSource::Elective,
            AdmissionSource::Transfer,
        ]
        .into_iter()
        .map(|src| (src, self.stays.iter().filter(|s| s.source == src).count()))
        .collect()
    }

    /// Active stays that violate their ward's gender policy
    ///
    /// A data-quality flag, not an enforced constraint: such rows can only
    /// enter through bulk import, never through [`OccupancyModel::admit`].
    pub fn gender_mismatches(&self) -> Vec<&Stay> {
        self.stays
            .iter()
            .filter(|s| s.is_active())
            .filter(|s| {
                self.ward(&s.ward)
                    .map(|w| !w.gender.accepts(s.gender))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Wards at Warning or Critical occupancy, with overflow suggestions
    pub fn capacity_alerts(&self) -> Vec<CapacityAlert> {
        self.wards
            .iter()
            .filter_map(|w| {
                let occupied = self.active_stays(Some(&w.name)).len();
                let occ = WardOccupancy::compute(occupied, w.capacity);
                match occ.band() {
                    StatusBand::Safe => None,
                    band => Some(CapacityAlert {
                        ward: w.name.clone(),
                        rate: occ.rate,
                        band,
                        overflow: w.overflow.clone(),
                    }),
                }
            })
            .collect()
    }

    /// Builds the per-ward status table for the report surface
    pub fn ward_status_rows(
        &self,
        horizon_hours: i64,
        as_of: DateTime<Utc>,
    ) -> Vec<WardStatusRow> {
        self.wards
            .iter()
            .map(|w| {
                let occupied = self.active_stays(Some(&w.name)).len();
                let occ = WardOccupancy::compute(occupied, w.capacity);
                let cutoff = as_of + Duration::hours(horizon_hours);
                let active = self.active_stays(Some(&w.name));
                WardStatusRow {
                    ward: w.name.clone(),
                    capacity: w.capacity,
                    occupied,
                    available: occ.available,
                    rate: occ.rate,
                    forecast_free: active
                        .iter()
                        .filter(|s| s.expected_discharge <= cutoff)
                        .count(),
                    delayed: active.iter().filter(|s| s.is_overdue(as_of)).count(),
                    status: occ.band(),
                }
            })
            .collect()
    }
}
