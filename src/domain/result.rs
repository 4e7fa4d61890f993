//! Result type alias for Bedwatch

use super::errors::BedwatchError;

/// Result type alias using [`BedwatchError`]
///
/// # Examples
///
/// ```
/// use bedwatch::domain::result::Result;
/// use bedwatch::domain::errors::BedwatchError;
///
/// fn lookup() -> Result<u32> {
///     Err(BedwatchError::UnknownWard("Oncology".to_string()))
/// }
/// assert!(lookup().is_err());
/// ```
pub type Result<T> = std::result::Result<T, BedwatchError>;
