#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Cached report feed with filtering and pagination.
//!
//! The pipeline is fetch → normalize → classify → filter → paginate.
//! [`ReportCache`] owns the first three stages behind a 30-minute TTL;
//! [`filter`] and [`page`] run synchronously over the cached list on
//! every criteria change.

pub mod cache;
pub mod filter;
pub mod page;

use sf_reports_source::SourceError;

pub use cache::{CACHE_KEY, CACHE_TTL, ReportCache};
pub use filter::Filters;

/// User-facing load failure.
///
/// Every fetch-time error (transport, bad status, malformed body) is
/// converted to this single error at the feed boundary; the presentation
/// layer only ever sees the fixed message.
#[derive(Debug, thiserror::Error)]
#[error("Failed to load police reports. Please try again later.")]
pub struct LoadError(#[from] pub SourceError);
