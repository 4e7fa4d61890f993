//! Configuration schema types
//!
//! Maps the `bedwatch.toml` file: application settings, the static ward
//! table, seed-data knobs and logging.

use crate::domain::{GenderPolicy, Ward, WardName};
use serde::{Deserialize, Serialize};

/// Main Bedwatch configuration
///
/// This is the root structure the TOML file maps to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedwatchConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Static ward table; loaded once, never mutated at runtime
    pub wards: Vec<WardConfig>,

    /// Demo-data generation settings
    #[serde(default)]
    pub seed: SeedConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BedwatchConfig {
    /// Loads and validates configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unparseable or invalid
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::domain::Result<Self> {
        super::loader::load_config(path)
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value found
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;

        if self.wards.is_empty() {
            return Err("At least one ward must be configured".to_string());
        }
        let mut names = std::collections::HashSet::new();
        for ward in &self.wards {
            ward.validate()?;
            if !names.insert(ward.name.as_str()) {
                return Err(format!("Duplicate ward name: {}", ward.name));
            }
        }
        for ward in &self.wards {
            if let Some(ref overflow) = ward.overflow {
                if overflow == &ward.name {
                    return Err(format!("Ward {} overflows to itself", ward.name));
                }
                if !names.contains(overflow.as_str()) {
                    return Err(format!(
                        "Ward {} overflows to unconfigured ward {}",
                        ward.name, overflow
                    ));
                }
            }
        }

        self.seed.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Builds the typed ward table from the configuration
    ///
    /// # Errors
    ///
    /// Returns an error for names that fail identifier validation; a
    /// config that passed [`BedwatchConfig::validate`] never does.
    pub fn ward_table(&self) -> Result<Vec<Ward>, String> {
        self.wards
            .iter()
            .map(|w| {
                let overflow = match &w.overflow {
                    Some(name) => Some(WardName::new(name.clone())?),
                    None => None,
                };
                Ok(Ward::new(
                    WardName::new(w.name.clone())?,
                    w.capacity,
                    w.gender,
                    overflow,
                ))
            })
            .collect()
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// One ward entry in the `[[wards]]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardConfig {
    /// Unique ward name
    pub name: String,

    /// Number of beds; must be at least 1
    pub capacity: u32,

    /// Gender admission policy
    pub gender: GenderPolicy,

    /// Name of the ward to suggest transfers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,
}

impl WardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Ward name cannot be empty".to_string());
        }
        if self.capacity == 0 {
            return Err(format!("Ward {} must have capacity of at least 1", self.name));
        }
        Ok(())
    }
}

/// Demo-data generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Fraction of each ward's capacity to fill (0.0..=1.0)
    #[serde(default = "default_load_factor")]
    pub load_factor: f64,

    /// Earliest backdating of admissions, in whole days
    #[serde(default = "default_min_admitted")]
    pub min_admitted_days_ago: i64,

    /// Latest backdating of admissions, in whole days
    #[serde(default = "default_max_admitted")]
    pub max_admitted_days_ago: i64,

    /// Shortest scheduled stay, in whole days
    #[serde(default = "default_min_stay")]
    pub min_stay_days: i64,

    /// Longest scheduled stay, in whole days
    #[serde(default = "default_max_stay")]
    pub max_stay_days: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            load_factor: default_load_factor(),
            min_admitted_days_ago: default_min_admitted(),
            max_admitted_days_ago: default_max_admitted(),
            min_stay_days: default_min_stay(),
            max_stay_days: default_max_stay(),
        }
    }
}

impl SeedConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.load_factor) {
            return Err(format!(
                "seed.load_factor must be between 0.0 and 1.0, got {}",
                self.load_factor
            ));
        }
        if self.min_admitted_days_ago < 0 || self.min_admitted_days_ago > self.max_admitted_days_ago
        {
            return Err("seed admitted-days range is invalid".to_string());
        }
        if self.min_stay_days < 1 || self.min_stay_days > self.max_stay_days {
            return Err("seed stay-days range is invalid".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to also write JSON logs to disk
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for rolling log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !["daily", "hourly"].contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be 'daily' or 'hourly'",
                self.local_rotation
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_load_factor() -> f64 {
    0.5
}

fn default_min_admitted() -> i64 {
    1
}

fn default_max_admitted() -> i64 {
    4
}

fn default_min_stay() -> i64 {
    2
}

fn default_max_stay() -> i64 {
    6
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
