//! Command implementations

pub mod admit;
pub mod discharge;
pub mod init;
pub mod report;
pub mod seed;
pub mod validate;

use crate::config::BedwatchConfig;
use crate::core::model::OccupancyModel;
use crate::core::interchange;

/// Builds an occupancy model from the configured ward table
pub(crate) fn build_model(config: &BedwatchConfig) -> anyhow::Result<OccupancyModel> {
    let wards = config.ward_table().map_err(anyhow::Error::msg)?;
    Ok(OccupancyModel::new(wards)?)
}

/// Builds a model and loads a stay file into it, printing skipped rows
///
/// Returns the model plus the number of usable rows.
pub(crate) fn load_model_from_file(
    config: &BedwatchConfig,
    stays_path: &str,
) -> anyhow::Result<(OccupancyModel, usize)> {
    let mut model = build_model(config)?;
    let report = interchange::read_stays_file(stays_path, model.wards())?;
    for err in &report.errors {
        println!("⚠️  Line {}: {}", err.line, err.message);
    }
    crate::log_import_summary!(report.stays.len(), report.errors.len());
    let count = report.stays.len();
    model.load(report.stays);
    Ok((model, count))
}
