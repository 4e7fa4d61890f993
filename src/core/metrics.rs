//! Derived occupancy metrics
//!
//! The status thresholds are fixed at 70/85 across every variant of the
//! source dashboards; downstream consumers key display colors off the band
//! names, so the constants must not drift.

use crate::domain::WardName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy rate (percent) at or above which a ward is Warning
pub const WARNING_THRESHOLD: f64 = 70.0;

/// Occupancy rate (percent) at or above which a ward is Critical
pub const CRITICAL_THRESHOLD: f64 = 85.0;

/// Safe / Warning / Critical classification of an occupancy rate
///
/// A pure function of the rate alone; increasing the rate never moves the
/// band backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusBand {
    /// Rate below 70%
    Safe,
    /// Rate in 70%..85%
    Warning,
    /// Rate at or above 85%
    Critical,
}

impl StatusBand {
    /// Classifies an occupancy rate (percent) against the fixed thresholds
    pub fn from_rate(rate: f64) -> Self {
        if rate >= CRITICAL_THRESHOLD {
            StatusBand::Critical
        } else if rate >= WARNING_THRESHOLD {
            StatusBand::Warning
        } else {
            StatusBand::Safe
        }
    }
}

impl fmt::Display for StatusBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusBand::Safe => write!(f, "Safe"),
            StatusBand::Warning => write!(f, "Warning"),
            StatusBand::Critical => write!(f, "Critical"),
        }
    }
}

/// Occupancy snapshot for one ward (or the whole hospital)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WardOccupancy {
    /// Count of active stays
    pub occupied: usize,

    /// Configured bed count
    pub capacity: u32,

    /// `capacity - occupied`; negative when over-admitted data is loaded
    pub available: i64,

    /// `occupied / capacity * 100`
    pub rate: f64,
}

impl WardOccupancy {
    /// Computes the snapshot from an active-stay count and a capacity
    ///
    /// Over-admission (occupied > capacity) is representable: `available`
    /// goes negative and `rate` exceeds 100.
    pub fn compute(occupied: usize, capacity: u32) -> Self {
        let rate = if capacity == 0 {
            0.0
        } else {
            occupied as f64 / capacity as f64 * 100.0
        };
        Self {
            occupied,
            capacity,
            available: capacity as i64 - occupied as i64,
            rate,
        }
    }

    /// Classifies this snapshot's rate
    pub fn band(&self) -> StatusBand {
        StatusBand::from_rate(self.rate)
    }
}

/// A ward running hot, with its configured overflow target if any
///
/// Feeds the recommendation panel of whatever UI hosts the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityAlert {
    /// Ward at Warning or Critical occupancy
    pub ward: WardName,

    /// Occupancy rate that triggered the alert
    pub rate: f64,

    /// Warning or Critical
    pub band: StatusBand,

    /// Suggested transfer target, when the ward configures one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<WardName>,
}

/// One row of the per-ward status table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardStatusRow {
    /// Ward name
    pub ward: WardName,

    /// Configured bed count
    pub capacity: u32,

    /// Active stays
    pub occupied: usize,

    /// Free beds (negative when over-admitted)
    pub available: i64,

    /// Occupancy rate, percent
    pub rate: f64,

    /// Active stays scheduled to leave inside the forecast window
    pub forecast_free: usize,

    /// Active stays past their scheduled discharge
    pub delayed: usize,

    /// Safe / Warning / Critical
    pub status: StatusBand,
}
