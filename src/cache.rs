//! Stale-while-revalidate page cache.
//!
//! Rendered post pages are cached per slug and shared across requests.
//! Entries never expire on their own: a request that finds an entry older
//! than the revalidate interval is still served the stale copy, and a
//! background refresh re-fetches and re-renders the page, promoting the
//! new value once done. Refreshes are single-flight per slug.

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use moka::future::Cache;

/// Cache capacity in entries. A rendered page is typically 5-30KB.
const CACHE_CAPACITY: u64 = 10_000;

/// One cached rendered page.
#[derive(Clone, Debug)]
pub struct CachedPage {
    /// Rendered HTML string.
    pub html: String,
    /// When this entry was rendered.
    pub fetched_at: chrono::DateTime<chrono::Utc>,
}

impl CachedPage {
    pub fn new(html: String) -> Self {
        Self {
            html,
            fetched_at: chrono::Utc::now(),
        }
    }

    /// Whether this entry has outlived the revalidate interval.
    pub fn is_stale(&self, revalidate: Duration) -> bool {
        let age = chrono::Utc::now() - self.fetched_at;
        age.to_std().is_ok_and(|age| age >= revalidate)
    }
}

/// Type alias for the rendered-page cache, keyed by slug.
pub type PageCache = Cache<String, CachedPage>;

/// Create the page cache.
///
/// No TTL: freshness is judged per entry against the revalidate interval,
/// and stale entries must stay servable while a refresh runs.
pub fn new_cache() -> PageCache {
    Cache::builder().max_capacity(CACHE_CAPACITY).build()
}

/// Single-flight guard for background refreshes.
///
/// At most one refresh per slug runs at a time; requests that find a stale
/// entry while a refresh is already in flight just serve the stale copy.
#[derive(Debug, Default)]
pub struct RefreshGuard {
    in_flight: Mutex<HashSet<String>>,
}

impl RefreshGuard {
    /// Claim the refresh for a slug. Returns false when a refresh for that
    /// slug is already running.
    pub fn try_begin(&self, slug: &str) -> bool {
        self.lock().insert(slug.to_string())
    }

    /// Release the claim after the refresh finishes, successfully or not.
    pub fn finish(&self, slug: &str) {
        self.lock().remove(slug);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        // A poisoned lock only means a refresh task panicked mid-update;
        // the set is still usable.
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
