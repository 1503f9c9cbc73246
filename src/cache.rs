//! Size- and time-bounded cache of resolved city identifiers.
//!
//! City ids are stable for far longer than forecasts, so they are the one
//! thing worth memoizing: at most [`MAX_CACHED_CITIES`] entries, each
//! expiring [`CITY_ID_TTL`] after the write (expire-after-write, not
//! after-access). Forecast lists are never cached.

use std::future::Future;
use std::time::Duration;

use moka::future::Cache;

use crate::errors::ForecastError;
use crate::models::CityId;

/// Upper bound on distinct city names kept at once.
pub const MAX_CACHED_CITIES: u64 = 1000;
/// How long a resolved identifier stays valid after being written.
pub const CITY_ID_TTL: Duration = Duration::from_secs(60 * 60);

/// Shared `city_name -> CityId` cache.
///
/// Cloning is cheap and clones share the same underlying store. Under
/// concurrent misses for the same name, `moka` runs the init future at
/// most once per key; the other callers wait for its outcome. A failed
/// init is handed to every waiter and nothing is cached, so the next
/// resolution retries upstream.
#[derive(Clone)]
pub struct CityIdCache {
    inner: Cache<String, CityId>,
}

impl CityIdCache {
    /// Cache with the production policy (1000 entries, 1 hour TTL).
    pub fn new() -> Self {
        Self::with_policy(MAX_CACHED_CITIES, CITY_ID_TTL)
    }

    /// Cache with an explicit policy. Tests use a millisecond TTL to
    /// exercise expiry without waiting an hour.
    pub fn with_policy(max_capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self { inner }
    }

    /// Return the cached id for `city_name`, or run `init` to produce it.
    ///
    /// At most one `init` runs per key at a time; its error is cloned out
    /// to every concurrent waiter and is never stored.
    pub async fn get_or_resolve<F>(&self, city_name: &str, init: F) -> Result<CityId, ForecastError>
    where
        F: Future<Output = Result<CityId, ForecastError>>,
    {
        self.inner
            .try_get_with(city_name.to_owned(), init)
            .await
            .map_err(|shared| shared.as_ref().clone())
    }

    /// Whether an unexpired entry exists for `city_name`.
    pub async fn contains(&self, city_name: &str) -> bool {
        self.inner.get(city_name).await.is_some()
    }
}

impl Default for CityIdCache {
    fn default() -> Self {
        Self::new()
    }
}
