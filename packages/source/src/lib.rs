#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! SF open-data incident fetching, normalization, and classification.
//!
//! [`SodaSource`] pulls the most recent incident window from the SFPD
//! Socrata dataset; [`normalize`](normalize::normalize) maps every raw
//! record into the canonical [`sf_reports_source_models::PoliceReport`]
//! shape. Normalization is total: any record, however sparse, produces
//! exactly one report.

pub mod category;
pub mod normalize;
pub mod parsing;
pub mod retry;
pub mod soda;

use async_trait::async_trait;
use serde::Deserialize;

pub use soda::SodaSource;

/// Errors that can occur while fetching incident data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP status {status}")]
    Status {
        /// The status code returned by the server.
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON array.
    #[error("unexpected response format: {message}")]
    Format {
        /// Description of what the body looked like instead.
        message: String,
    },

    /// An element of the response could not be decoded.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A raw incident record as returned by the open-data API.
///
/// The provider guarantees nothing: every field is optional and unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIncident {
    /// Incident number, e.g. `"21-001"`.
    #[serde(default)]
    pub incident_number: Option<String>,
    /// Naive ISO-8601 timestamp, e.g. `"2024-03-01T10:00:00"`.
    #[serde(default)]
    pub incident_datetime: Option<String>,
    /// Free-text description of the incident.
    #[serde(default)]
    pub incident_description: Option<String>,
    /// Source category string, classified into the UCR taxonomy.
    #[serde(default)]
    pub incident_category: Option<String>,
    /// Resolution status, e.g. `"Open or Active"`.
    #[serde(default)]
    pub resolution: Option<String>,
    /// Nearest intersection.
    #[serde(default)]
    pub intersection: Option<String>,
    /// Street address, used when no intersection is given.
    #[serde(default)]
    pub address: Option<String>,
    /// Latitude as a decimal string.
    #[serde(default)]
    pub latitude: Option<String>,
    /// Longitude as a decimal string.
    #[serde(default)]
    pub longitude: Option<String>,
}

/// A provider of raw incident records.
///
/// The feed cache is generic over this trait so tests can substitute a
/// stub source for the live Socrata API.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetches the most recent incident window.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the request fails after retries or the
    /// response cannot be decoded.
    async fn fetch(&self) -> Result<Vec<RawIncident>, SourceError>;
}
