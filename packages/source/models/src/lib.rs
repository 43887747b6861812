#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The canonical normalized police report record.
//!
//! The SF open-data API returns loosely-typed records where any field may
//! be missing. Normalization fills every gap with a fixed default, so a
//! [`PoliceReport`] always has a value in every field and downstream code
//! (filtering, pagination, display) never handles `Option`s.

use serde::{Deserialize, Serialize};
use sf_reports_report_models::UcrCategory;

/// Browse URL for the SFPD incident dataset, used for case lookups.
const CASE_LOOKUP_URL: &str = "https://data.sfgov.org/Public-Safety/\
                               Police-Department-Incident-Reports-2018-to-Present/\
                               wg3w-h783/data";

/// A police report normalized from a raw SF open-data incident record.
///
/// Timestamps are ISO-8601 strings as delivered by the source (or the
/// fetch time when the source omits them). `date_occurred` and
/// `date_reported` both derive from the single `incident_datetime` source
/// field, so they always carry the same value. Coordinates stay as
/// decimal strings; records without coordinates get the city-center
/// default so every report can be placed on a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliceReport {
    /// Incident number from the source, or `"N/A"`. Not guaranteed unique.
    pub case_number: String,
    /// When the incident occurred (ISO-8601).
    pub date_occurred: String,
    /// When the incident was reported (ISO-8601).
    pub date_reported: String,
    /// Free-text incident description, or `"Unknown"`.
    pub incident_type: String,
    /// Resolution status, or `"Unknown"`.
    pub location_type: String,
    /// Intersection or street address, or `"Unknown Location"`.
    pub address: String,
    /// Latitude as a decimal string.
    pub lat: String,
    /// Longitude as a decimal string.
    pub long: String,
    /// Classified UCR crime category.
    pub ucr_crime_category: UcrCategory,
}

impl PoliceReport {
    /// Returns the external case-lookup URL for this report.
    ///
    /// Points at the public dataset browser, pre-filtered to this report's
    /// case number.
    #[must_use]
    pub fn case_url(&self) -> String {
        let query = percent_encode(&format!("incident_number = '{}'", self.case_number));
        format!("{CASE_LOOKUP_URL}?q={query}")
    }
}

/// Percent-encodes a URL query component.
///
/// Leaves alphanumerics and `- _ . ! ~ * ' ( )` untouched; everything else
/// becomes `%XX` per byte.
fn percent_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{byte:02X}"));
            }
        }
    }
    encoded
}
