//! San Francisco Police Department incident source.
//!
//! Uses SF's Socrata Open Data API.
//! Dataset: <https://data.sfgov.org/resource/wg3w-h783>

use async_trait::async_trait;
use chrono::{Months, Utc};

use crate::{RawIncident, ReportSource, SourceError, retry};

const API_URL: &str = "https://data.sfgov.org/resource/wg3w-h783.json";

/// Maximum number of records per fetch.
const FETCH_LIMIT: u64 = 500;

/// Rolling lookback window for the server-side time filter.
const LOOKBACK_MONTHS: u32 = 6;

/// Fetches recent SFPD incidents from the Socrata API.
///
/// Each fetch requests the newest [`FETCH_LIMIT`] records from the last
/// [`LOOKBACK_MONTHS`] months, ordered descending by incident time.
pub struct SodaSource {
    client: reqwest::Client,
}

impl SodaSource {
    /// Creates a new SF data source with its own HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for SodaSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportSource for SodaSource {
    async fn fetch(&self) -> Result<Vec<RawIncident>, SourceError> {
        let now = Utc::now();
        let since = now
            .checked_sub_months(Months::new(LOOKBACK_MONTHS))
            .unwrap_or(now);
        let since_str = since.format("%Y-%m-%dT%H:%M:%S").to_string();
        let where_clause = format!("incident_datetime > '{since_str}'");
        let limit = FETCH_LIMIT.to_string();

        log::info!("Fetching SF incidents: limit={FETCH_LIMIT}, since={since_str}");
        let value = retry::send_json(|| {
            self.client
                .get(API_URL)
                .header(reqwest::header::ACCEPT, "application/json")
                .query(&[
                    ("$limit", limit.as_str()),
                    ("$order", "incident_datetime DESC"),
                    ("$where", where_clause.as_str()),
                ])
        })
        .await?;

        if !value.is_array() {
            return Err(SourceError::Format {
                message: format!("expected a JSON array, got {}", json_type(&value)),
            });
        }

        let records: Vec<RawIncident> = serde_json::from_value(value)?;
        log::info!("Fetched {} raw incident records", records.len());
        Ok(records)
    }
}

/// Human-readable JSON type name for error messages.
const fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
