//! Process-wide fetch cache.
//!
//! One entry under a fixed key, replaced wholesale on every refetch.
//! The slot mutex is held across the fetch, which coalesces concurrent
//! callers: only one request is ever in flight, and late arrivals read
//! the entry the winner stored.

use std::sync::Arc;
use std::time::{Duration, Instant};

use sf_reports_source::{ReportSource, normalize};
use sf_reports_source_models::PoliceReport;
use tokio::sync::Mutex;

use crate::LoadError;

/// The fixed cache key. There is only one fetch window, so only one entry.
pub const CACHE_KEY: &str = "reports";

/// How long a fetched batch stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

struct Entry {
    fetched_at: Instant,
    reports: Arc<Vec<PoliceReport>>,
}

/// TTL cache over a [`ReportSource`], producing normalized reports.
///
/// `get` serves the cached list while fresh and refetches when the entry
/// is absent or stale. Failures are never cached: an error leaves the
/// slot untouched and the next call retries.
pub struct ReportCache<S> {
    source: S,
    ttl: Duration,
    slot: Mutex<Option<Entry>>,
}

impl<S: ReportSource> ReportCache<S> {
    /// Creates a cache with the standard 30-minute TTL.
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, CACHE_TTL)
    }

    /// Creates a cache with a custom TTL.
    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Returns the normalized report list, fetching if needed.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the cache is empty or stale and the
    /// underlying fetch fails.
    pub async fn get(&self) -> Result<Arc<Vec<PoliceReport>>, LoadError> {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                log::debug!("Cache hit for {CACHE_KEY:?}");
                return Ok(Arc::clone(&entry.reports));
            }
            log::debug!("Cache entry for {CACHE_KEY:?} is stale, refetching");
        }

        self.populate(&mut slot).await
    }

    /// Refetches unconditionally and replaces the entry (on-demand
    /// refetch). On failure any existing entry is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the fetch fails.
    pub async fn refresh(&self) -> Result<Arc<Vec<PoliceReport>>, LoadError> {
        let mut slot = self.slot.lock().await;
        self.populate(&mut slot).await
    }

    /// Drops the cached entry; the next `get` will refetch.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    async fn populate(&self, slot: &mut Option<Entry>) -> Result<Arc<Vec<PoliceReport>>, LoadError> {
        let raw = self.source.fetch().await?;
        let reports = Arc::new(normalize::normalize(raw));
        *slot = Some(Entry {
            fetched_at: Instant::now(),
            reports: Arc::clone(&reports),
        });
        log::info!("Cached {} reports under {CACHE_KEY:?}", reports.len());
        Ok(reports)
    }
}

impl<S: ReportSource + 'static> ReportCache<S> {
    /// Spawns a background task that refreshes the entry every TTL
    /// interval, so readers keep hitting a warm cache.
    ///
    /// A failed refresh is logged and leaves the previous entry in place.
    pub fn spawn_revalidation(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(cache.ttl);
            // The first tick completes immediately; skip it.
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(e) = cache.refresh().await {
                    log::warn!("Background revalidation failed: {e}");
                }
            }
        })
    }
}
