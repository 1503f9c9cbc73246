//! City-name to provider-identifier resolution.
//!
//! The provider's search endpoint returns a JSON array of candidate
//! locations; the first candidate's identifier wins. Resolved ids are
//! memoized in a [`CityIdCache`] so repeated requests for the same city
//! do not hammer the search endpoint.

use std::sync::Arc;

use serde::Deserialize;

use crate::cache::CityIdCache;
use crate::errors::{ForecastError, UpstreamCause};
use crate::fetcher::Fetcher;
use crate::models::CityId;

/// One element of the search endpoint's response array.
/// Remaining fields (location type, coordinates) are ignored.
#[derive(Debug, Deserialize)]
struct CityCandidate {
    title: String,
    woeid: i64,
}

/// Resolves city names to provider identifiers, with caching.
pub struct CityResolver {
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
    cache: CityIdCache,
}

impl CityResolver {
    /// Resolver with the production cache policy.
    pub fn new(fetcher: Arc<dyn Fetcher>, base_url: impl Into<String>) -> Self {
        Self::with_cache(fetcher, base_url, CityIdCache::new())
    }

    /// Resolver with an explicitly injected cache, so tests can control
    /// the TTL or pre-populate entries.
    pub fn with_cache(
        fetcher: Arc<dyn Fetcher>,
        base_url: impl Into<String>,
        cache: CityIdCache,
    ) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            cache,
        }
    }

    /// Resolve `city_name` to its provider identifier.
    ///
    /// Served from cache while the entry's TTL holds; otherwise fetched
    /// from the search endpoint and cached. Failures are propagated and
    /// never cached.
    pub async fn resolve(&self, city_name: &str) -> Result<CityId, ForecastError> {
        self.cache
            .get_or_resolve(city_name, self.search_city_id(city_name))
            .await
    }

    async fn search_city_id(&self, city_name: &str) -> Result<CityId, ForecastError> {
        let url = format!("{}/api/location/search/?query={}", self.base_url, city_name);

        let body = self
            .fetcher
            .get(&url)
            .await
            .map_err(|e| ForecastError::resolution(city_name, e))?;

        let candidates: Vec<CityCandidate> = serde_json::from_str(&body)
            .map_err(|e| ForecastError::resolution(city_name, UpstreamCause::Decode(e.to_string())))?;

        let first = candidates
            .first()
            .ok_or_else(|| ForecastError::resolution(city_name, UpstreamCause::NoCandidates))?;

        tracing::debug!(
            "resolved city '{}' to id {} ('{}')",
            city_name,
            first.woeid,
            first.title
        );
        Ok(CityId::new(first.woeid.to_string()))
    }
}
