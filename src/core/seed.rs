//! Demo/seed data generation
//!
//! Pure given the RNG: tests pass a seeded [`rand::rngs::StdRng`] and get
//! the same collection every run. Nothing here touches ambient randomness
//! or the wall clock; the caller supplies both.

use crate::config::SeedConfig;
use crate::domain::{AdmissionSource, Gender, GenderPolicy, PatientId, Stay, Ward};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Generates a plausible initial stay collection over the ward table
///
/// Each ward is filled to `load_factor` of capacity, occupying its first
/// beds. Admissions are backdated by a few days, scheduled discharges land
/// a few days out, and the gender is drawn to satisfy the ward policy.
/// Every generated stay is active and sourced from Emergency, matching the
/// dashboards' bootstrap data.
pub fn generate_seed_data(
    wards: &[Ward],
    config: &SeedConfig,
    as_of: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Vec<Stay> {
    let mut stays = Vec::new();
    for ward in wards {
        let count = (ward.capacity as f64 * config.load_factor).floor() as u32;
        for i in 0..count {
            let gender = match ward.gender {
                GenderPolicy::Male => Gender::Male,
                GenderPolicy::Female => Gender::Female,
                GenderPolicy::Mixed => {
                    if rng.gen_bool(0.5) {
                        Gender::Male
                    } else {
                        Gender::Female
                    }
                }
            };
            let admitted = as_of
                - Duration::days(
                    rng.gen_range(config.min_admitted_days_ago..=config.max_admitted_days_ago),
                );
            let expected =
                admitted + Duration::days(rng.gen_range(config.min_stay_days..=config.max_stay_days));
            let pin = format!("PIN-{}", rng.gen_range(1000..9000));

            stays.push(Stay {
                // A random PIN in 1000..9000 is never empty, so this cannot
                // fail.
                patient: PatientId::new(pin).expect("generated PIN is non-empty"),
                gender,
                ward: ward.name.clone(),
                bed: ward.bed_label(i + 1),
                admitted_at: admitted,
                expected_discharge: expected,
                actual_discharge: None,
                source: AdmissionSource::Emergency,
            });
        }
    }
    stays
}
