//! Integration tests for the occupancy model
//!
//! Exercises the documented behavior end to end, including the 16-bed ICU
//! scenario every dashboard variant renders.

use bedwatch::core::metrics::StatusBand;
use bedwatch::core::model::{AdmissionRequest, OccupancyModel};
use bedwatch::domain::{
    AdmissionError, AdmissionSource, BedLabel, Gender, GenderPolicy, PatientId, Ward, WardName,
};
use chrono::{DateTime, Duration, Utc};

fn icu() -> WardName {
    WardName::new("ICU").unwrap()
}

fn hospital() -> OccupancyModel {
    OccupancyModel::new(vec![
        Ward::new(icu(), 16, GenderPolicy::Mixed, None),
        Ward::new(
            WardName::new("Surgical Male").unwrap(),
            40,
            GenderPolicy::Male,
            Some(icu()),
        ),
    ])
    .unwrap()
}

fn request(pin: &str, gender: Gender, ward: &str, bed: &str, now: DateTime<Utc>) -> AdmissionRequest {
    AdmissionRequest {
        patient: PatientId::new(pin).unwrap(),
        gender,
        ward: WardName::new(ward).unwrap(),
        bed: BedLabel::new(bed).unwrap(),
        admitted_at: now,
        expected_discharge: now + Duration::days(3),
        source: AdmissionSource::Emergency,
    }
}

fn fill_icu(model: &mut OccupancyModel, count: u32, now: DateTime<Utc>) {
    for i in 1..=count {
        let gender = if i % 2 == 0 { Gender::Female } else { Gender::Male };
        model
            .admit(request(
                &format!("PIN-{}", 1000 + i),
                gender,
                "ICU",
                &format!("ICU-{i:03}"),
                now,
            ))
            .unwrap();
    }
}

#[test]
fn icu_scenario_matches_dashboard_numbers() {
    let mut model = hospital();
    let now = Utc::now();
    fill_icu(&mut model, 14, now);

    // 14/16 occupied: 87.5%, Critical.
    let occ = model.occupancy(&icu()).unwrap();
    assert_eq!(occ.occupied, 14);
    assert_eq!(occ.available, 2);
    assert!((occ.rate - 87.5).abs() < 1e-9);
    assert_eq!(occ.band(), StatusBand::Critical);

    // One more admission into a free bed succeeds; 15/16 is 93.75%.
    let free = model.available_beds(&icu()).unwrap();
    assert_eq!(free.len(), 2);
    model
        .admit(AdmissionRequest {
            bed: free[0].clone(),
            ..request("PIN-2000", Gender::Male, "ICU", "ICU-099", now)
        })
        .unwrap();
    let occ = model.occupancy(&icu()).unwrap();
    assert!((occ.rate - 93.75).abs() < 1e-9);
    assert_eq!(occ.band(), StatusBand::Critical);

    // ICU is Mixed, so gender never blocks admission there.
    let free = model.available_beds(&icu()).unwrap();
    model
        .admit(AdmissionRequest {
            bed: free[0].clone(),
            ..request("PIN-2001", Gender::Female, "ICU", "ICU-099", now)
        })
        .unwrap();

    // Now 16/16: every bed request is rejected as occupied.
    assert!(model.available_beds(&icu()).unwrap().is_empty());
    for bed in ["ICU-001", "ICU-008", "ICU-016"] {
        let err = model
            .admit(request("PIN-3000", Gender::Male, "ICU", bed, now))
            .unwrap_err();
        assert!(matches!(err, AdmissionError::BedOccupied { .. }));
    }
}

#[test]
fn admitted_stay_appears_exactly_once() {
    let mut model = hospital();
    let now = Utc::now();
    model
        .admit(request("PIN-1", Gender::Male, "ICU", "ICU-001", now))
        .unwrap();

    let matching: Vec<_> = model
        .active_stays(Some(&icu()))
        .into_iter()
        .filter(|s| s.patient.as_str() == "PIN-1")
        .collect();
    assert_eq!(matching.len(), 1);
}

#[test]
fn discharge_removes_from_active_and_frees_bed() {
    let mut model = hospital();
    let now = Utc::now();
    let pin = PatientId::new("PIN-1").unwrap();
    let bed = BedLabel::new("ICU-007").unwrap();
    model
        .admit(request("PIN-1", Gender::Female, "ICU", "ICU-007", now))
        .unwrap();
    assert!(!model.available_beds(&icu()).unwrap().contains(&bed));

    model.discharge(&pin, now + Duration::days(2)).unwrap();
    assert!(model
        .active_stays(Some(&icu()))
        .iter()
        .all(|s| s.patient != pin));
    assert!(model.available_beds(&icu()).unwrap().contains(&bed));

    // A second discharge for the same patient is AlreadyDischarged.
    let err = model.discharge(&pin, now + Duration::days(2)).unwrap_err();
    assert_eq!(
        err,
        bedwatch::domain::DischargeError::AlreadyDischarged(pin)
    );
}

#[test]
fn available_identity_holds_even_over_capacity() {
    let mut model = hospital();
    let now = Utc::now();
    // Over-admission can't happen through admit(); load it directly the
    // way a bulk import would.
    let stays: Vec<_> = (1..=18)
        .map(|i| bedwatch::domain::Stay {
            patient: PatientId::new(format!("PIN-{i}")).unwrap(),
            gender: Gender::Male,
            ward: icu(),
            bed: BedLabel::new(format!("ICU-{i:03}")).unwrap(),
            admitted_at: now,
            expected_discharge: now + Duration::days(2),
            actual_discharge: None,
            source: AdmissionSource::Transfer,
        })
        .collect();
    model.load(stays);

    let occ = model.occupancy(&icu()).unwrap();
    assert_eq!(occ.occupied, 18);
    assert_eq!(occ.available, -2);
    assert_eq!(occ.capacity as i64 - occ.occupied as i64, occ.available);
    assert_eq!(occ.band(), StatusBand::Critical);
}

#[test]
fn gender_policy_enforced_on_single_gender_ward() {
    let mut model = hospital();
    let now = Utc::now();
    let err = model
        .admit(request("PIN-1", Gender::Female, "Surgical Male", "SUR-001", now))
        .unwrap_err();
    assert!(matches!(err, AdmissionError::GenderMismatch { .. }));

    model
        .admit(request("PIN-2", Gender::Male, "Surgical Male", "SUR-001", now))
        .unwrap();
}

#[test]
fn capacity_alert_suggests_configured_overflow() {
    let mut model = hospital();
    let now = Utc::now();
    // 30/40 male surgical beds is 75%: Warning.
    for i in 1..=30 {
        model
            .admit(request(
                &format!("PIN-{i}"),
                Gender::Male,
                "Surgical Male",
                &format!("SUR-{i:03}"),
                now,
            ))
            .unwrap();
    }
    let alerts = model.capacity_alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].band, StatusBand::Warning);
    assert_eq!(alerts[0].overflow.as_ref().unwrap().as_str(), "ICU");
}

#[test]
fn forecast_and_delayed_track_expected_discharges() {
    let mut model = hospital();
    let now = Utc::now();

    let mut early = request("PIN-1", Gender::Male, "ICU", "ICU-001", now);
    early.expected_discharge = now + Duration::hours(6);
    model.admit(early).unwrap();

    let mut overdue = request("PIN-2", Gender::Male, "ICU", "ICU-002", now);
    overdue.admitted_at = now - Duration::days(4);
    overdue.expected_discharge = now - Duration::hours(3);
    model.admit(overdue).unwrap();

    let mut late = request("PIN-3", Gender::Male, "ICU", "ICU-003", now);
    late.expected_discharge = now + Duration::days(6);
    model.admit(late).unwrap();

    // The overdue stay also falls inside the forecast window: its
    // expected discharge is before the horizon.
    assert_eq!(model.forecast_free(&icu(), 12, now).unwrap(), 2);
    assert_eq!(model.delayed_discharges(&icu(), now).unwrap(), 1);
}

#[test]
fn unknown_ward_queries_are_typed_errors() {
    let model = hospital();
    let oncology = WardName::new("Oncology").unwrap();
    assert!(model.occupancy(&oncology).is_err());
    assert!(model.available_beds(&oncology).is_err());
    assert!(model.forecast_free(&oncology, 24, Utc::now()).is_err());
    assert!(model.delayed_discharges(&oncology, Utc::now()).is_err());
}
