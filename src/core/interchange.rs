//! Tabular stay interchange (CSV)
//!
//! Eight columns, one row per stay, RFC 3339 timestamps, and an empty
//! `actual_discharge` field for active stays. Import is forgiving: a bad
//! row is skipped and reported, never aborting the rest of the file.
//!
//! Fields containing commas, quotes or newlines are double-quoted with
//! `""` escaping, and the parser understands the same convention.

use crate::domain::{BedLabel, BedwatchError, Result, Stay, StayBuilder, Ward, WardName};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Fixed column header; imports reject files that don't start with it
pub const HEADER: &str = "pin,gender,ward,bed,admitted_at,expected_discharge,actual_discharge,source";

/// One rejected row from a bulk import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the file (the header is line 1)
    pub line: usize,

    /// Why the row was skipped
    pub message: String,
}

/// Outcome of a bulk import: the usable stays plus the skipped rows
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Rows that parsed and validated, in file order
    pub stays: Vec<Stay>,

    /// Rows that were skipped, with reasons
    pub errors: Vec<RowError>,
}

impl ImportReport {
    /// True when at least one row was skipped
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Serializes a stay collection to CSV, header included
pub fn export_stays(stays: &[Stay]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for stay in stays {
        let fields = [
            escape(stay.patient.as_str()),
            escape(&stay.gender.to_string()),
            escape(stay.ward.as_str()),
            escape(stay.bed.as_str()),
            stay.admitted_at.to_rfc3339(),
            stay.expected_discharge.to_rfc3339(),
            stay
                .actual_discharge
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            escape(&stay.source.to_string()),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Writes a stay collection to a CSV file
pub fn write_stays_file(path: impl AsRef<Path>, stays: &[Stay]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, export_stays(stays)).map_err(|e| {
        BedwatchError::Io(format!("Failed to write {}: {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), count = stays.len(), "Wrote stay file");
    Ok(())
}

/// Parses a CSV document into stays, validating rows against the ward table
///
/// Per-row failures (wrong field count, bad enum, bad timestamp, unknown
/// ward, duplicate active bed) land in the report's error list; the rest of
/// the file still imports.
///
/// # Errors
///
/// Returns an error only when the document itself is unusable: empty input
/// or a missing/mismatched header line.
pub fn parse_stays(wards: &[Ward], text: &str) -> Result<ImportReport> {
    let mut lines = text.lines();
    match lines.next() {
        Some(first) if first.trim_end() == HEADER => {}
        Some(first) => {
            return Err(BedwatchError::Interchange(format!(
                "Unexpected header: {first}"
            )))
        }
        None => return Err(BedwatchError::Interchange("Empty document".to_string())),
    }

    let ward_names: HashSet<&WardName> = wards.iter().map(|w| &w.name).collect();
    let mut report = ImportReport::default();
    let mut active_beds: HashSet<(WardName, BedLabel)> = HashSet::new();

    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line) {
            Ok(stay) => {
                if !ward_names.contains(&stay.ward) {
                    report.errors.push(RowError {
                        line: line_no,
                        message: format!("Unknown ward: {}", stay.ward),
                    });
                    continue;
                }
                if stay.is_active() && !active_beds.insert((stay.ward.clone(), stay.bed.clone())) {
                    report.errors.push(RowError {
                        line: line_no,
                        message: format!(
                            "Bed {} in ward {} already held by an active stay",
                            stay.bed, stay.ward
                        ),
                    });
                    continue;
                }
                report.stays.push(stay);
            }
            Err(message) => report.errors.push(RowError {
                line: line_no,
                message,
            }),
        }
    }

    if report.has_errors() {
        tracing::warn!(
            imported = report.stays.len(),
            skipped = report.errors.len(),
            "Import skipped malformed rows"
        );
    }
    Ok(report)
}

/// Reads and parses a stay CSV file
pub fn read_stays_file(path: impl AsRef<Path>, wards: &[Ward]) -> Result<ImportReport> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        BedwatchError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_stays(wards, &text)
}

fn parse_row(line: &str) -> std::result::Result<Stay, String> {
    let fields = split_record(line)?;
    if fields.len() != 8 {
        return Err(format!("Expected 8 fields, found {}", fields.len()));
    }

    let mut builder = StayBuilder::new()
        .patient(fields[0].as_str())?
        .gender(&fields[1])?
        .ward(fields[2].as_str())?
        .bed(fields[3].as_str())?
        .source(&fields[7])?
        .admitted_at(parse_timestamp(&fields[4], "admitted_at")?)
        .expected_discharge(parse_timestamp(&fields[5], "expected_discharge")?);
    if !fields[6].is_empty() {
        builder = builder.actual_discharge(parse_timestamp(&fields[6], "actual_discharge")?);
    }
    builder.build()
}

fn parse_timestamp(value: &str, field: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("Bad {field} timestamp '{value}': {e}"))
}

/// Quotes a field when it contains a delimiter, quote or newline
fn escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Splits one record on commas, honoring double-quoted fields
fn split_record(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    current.push('"');
                }
                '"' => in_quotes = false,
                _ => current.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(std::mem::take(&mut current));
                }
                _ => current.push(c),
            }
        }
    }
    if in_quotes {
        return Err("Unterminated quoted field".to_string());
    }
    fields.push(current);
    Ok(fields)
}
