//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use bedwatch::config::load_config;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("BEDWATCH_APPLICATION_LOG_LEVEL");
    std::env::remove_var("BEDWATCH_SEED_LOAD_FACTOR");
    std::env::remove_var("BEDWATCH_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("BEDWATCH_LOGGING_LOCAL_PATH");
    std::env::remove_var("BEDWATCH_LOGGING_LOCAL_ROTATION");
    std::env::remove_var("TEST_LOG_PATH");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

const COMPLETE: &str = r#"
[application]
log_level = "debug"

[[wards]]
name = "Medical Male"
capacity = 50
gender = "male"

[[wards]]
name = "Surgical Male"
capacity = 40
gender = "male"
overflow = "Medical Male"

[[wards]]
name = "ICU"
capacity = 16
gender = "mixed"

[seed]
load_factor = 0.6
min_admitted_days_ago = 1
max_admitted_days_ago = 4
min_stay_days = 2
max_stay_days = 6

[logging]
local_enabled = true
local_path = "/tmp/bedwatch"
local_rotation = "hourly"
"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(COMPLETE);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.wards.len(), 3);
    assert_eq!(config.wards[1].overflow.as_deref(), Some("Medical Male"));
    assert!((config.seed.load_factor - 0.6).abs() < 1e-9);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");

    let wards = config.ward_table().unwrap();
    assert_eq!(wards.len(), 3);
    assert_eq!(wards[2].capacity, 16);
    assert_eq!(
        wards[1].overflow.as_ref().unwrap().as_str(),
        "Medical Male"
    );
}

#[test]
fn test_defaults_fill_in_omitted_sections() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[[wards]]
name = "ICU"
capacity = 16
gender = "mixed"
"#,
    );
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert!((config.seed.load_factor - 0.5).abs() < 1e-9);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("BEDWATCH_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("BEDWATCH_SEED_LOAD_FACTOR", "0.25");
    std::env::set_var("BEDWATCH_LOGGING_LOCAL_ROTATION", "hourly");

    let file = write_config(COMPLETE);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "trace");
    assert!((config.seed.load_factor - 0.25).abs() < 1e-9);
    assert_eq!(config.logging.local_rotation, "hourly");

    cleanup_env_vars();
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("TEST_LOG_PATH", "/var/log/bedwatch");
    let file = write_config(
        r#"
[[wards]]
name = "ICU"
capacity = 16
gender = "mixed"

[logging]
local_path = "${TEST_LOG_PATH}"
"#,
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.logging.local_path, "/var/log/bedwatch");

    cleanup_env_vars();
}

#[test]
fn test_overflow_must_reference_configured_ward() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[[wards]]
name = "Surgical Male"
capacity = 40
gender = "male"
overflow = "Oncology"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("overflow"));
}

#[test]
fn test_duplicate_ward_names_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[[wards]]
name = "ICU"
capacity = 16
gender = "mixed"

[[wards]]
name = "ICU"
capacity = 8
gender = "mixed"
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_invalid_seed_bounds_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[[wards]]
name = "ICU"
capacity = 16
gender = "mixed"

[seed]
load_factor = 1.5
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("load_factor"));
}
