//! Configuration management for Bedwatch.
//!
//! TOML-based configuration with environment variable substitution,
//! defaults for optional settings and validation on load.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bedwatch::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("bedwatch.toml")?;
//! for ward in &config.wards {
//!     println!("{}: {} beds", ward.name, ward.capacity);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [[wards]]
//! name = "Medical Male"
//! capacity = 50
//! gender = "male"
//!
//! [[wards]]
//! name = "ICU"
//! capacity = 16
//! gender = "mixed"
//!
//! [seed]
//! load_factor = 0.5
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! Use `${VAR_NAME}` syntax inside values for environment variable
//! substitution, and `BEDWATCH_*` variables to override scalar settings
//! without editing the file. The ward table itself is file-only.

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, BedwatchConfig, LoggingConfig, SeedConfig, WardConfig};
