//! Raw incident normalization.
//!
//! Maps every [`RawIncident`] into exactly one [`PoliceReport`], filling
//! missing or empty fields with fixed defaults. This step is total: it
//! never drops a record and never fails.

use chrono::{DateTime, SecondsFormat, Utc};
use sf_reports_source_models::PoliceReport;

use crate::RawIncident;
use crate::category::map_ucr_category;

/// Sentinel case number for records without an incident number.
pub const DEFAULT_CASE_NUMBER: &str = "N/A";
/// Fallback for missing descriptions and resolutions.
pub const DEFAULT_UNKNOWN: &str = "Unknown";
/// Fallback for records without an intersection or address.
pub const DEFAULT_ADDRESS: &str = "Unknown Location";
/// City-center latitude used when the record has no coordinates.
pub const DEFAULT_LAT: &str = "37.7749";
/// City-center longitude used when the record has no coordinates.
pub const DEFAULT_LONG: &str = "-122.4194";

/// Normalizes a fetched batch, stamping records that lack a datetime with
/// the current fetch time. Order and length are preserved.
#[must_use]
pub fn normalize(records: Vec<RawIncident>) -> Vec<PoliceReport> {
    let fetched_at = Utc::now();
    records
        .into_iter()
        .map(|record| normalize_record(record, fetched_at))
        .collect()
}

/// Normalizes a single raw record.
///
/// `date_occurred` and `date_reported` both come from the one
/// `incident_datetime` source field; when it is missing, both default to
/// `fetched_at` in RFC 3339.
#[must_use]
pub fn normalize_record(record: RawIncident, fetched_at: DateTime<Utc>) -> PoliceReport {
    let datetime = match record.incident_datetime {
        Some(dt) if !dt.is_empty() => dt,
        _ => fetched_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    let address = first_present(
        [record.intersection, record.address],
        DEFAULT_ADDRESS,
    );

    let category = record.incident_category.unwrap_or_default();

    PoliceReport {
        case_number: or_default(record.incident_number, DEFAULT_CASE_NUMBER),
        date_occurred: datetime.clone(),
        date_reported: datetime,
        incident_type: or_default(record.incident_description, DEFAULT_UNKNOWN),
        location_type: or_default(record.resolution, DEFAULT_UNKNOWN),
        address,
        lat: or_default(record.latitude, DEFAULT_LAT),
        long: or_default(record.longitude, DEFAULT_LONG),
        ucr_crime_category: map_ucr_category(&category),
    }
}

/// Returns the value unless it is missing or empty.
fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// Returns the first present, non-empty candidate.
fn first_present<const N: usize>(candidates: [Option<String>; N], default: &str) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
