//! Crime category classification.
//!
//! Maps the provider's free-text `incident_category` strings to the fixed
//! [`UcrCategory`] taxonomy using case-insensitive keyword stems. The stems
//! overlap (a string can contain both "vehicle" and "theft"), so the check
//! order below is load-bearing: first match wins.

use sf_reports_report_models::UcrCategory;

/// Classifies a raw category string into the UCR taxonomy.
///
/// Case-insensitive and total: unrecognized or empty input maps to
/// [`UcrCategory::Other`]. The stem priority order must not be reordered;
/// "Motor Vehicle Theft" classifies as Larceny Theft because the theft
/// stem is checked first.
#[must_use]
pub fn map_ucr_category(raw: &str) -> UcrCategory {
    let lower = raw.to_lowercase();

    if contains_any(&lower, &["larceny", "theft"]) {
        return UcrCategory::LarcenyTheft;
    }
    if lower.contains("assault") {
        return UcrCategory::Assault;
    }
    if lower.contains("burglary") {
        return UcrCategory::Burglary;
    }
    if lower.contains("vehicle") {
        return UcrCategory::VehicleTheft;
    }
    if lower.contains("robbery") {
        return UcrCategory::Robbery;
    }
    if lower.contains("drug") {
        return UcrCategory::DrugOffense;
    }
    if lower.contains("vandalism") {
        return UcrCategory::Vandalism;
    }
    if lower.contains("fraud") {
        return UcrCategory::Fraud;
    }
    if lower.contains("weapon") {
        return UcrCategory::WeaponsOffense;
    }
    if lower.contains("suspicious") {
        return UcrCategory::SuspiciousActivity;
    }

    UcrCategory::Other
}

/// Checks if `haystack` contains any of the given `needles`.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
