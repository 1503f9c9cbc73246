//! Error taxonomy for forecast resolution.
//!
//! Two failure classes reach callers: city resolution failed, or the
//! forecast fetch for an already-resolved city failed. "No prediction
//! available" is never an error — it is the `None` arm of a successful
//! result, so callers can tell "no data" apart from "failed to look up".
//!
//! Everything here is `Clone`: a cache-shared in-flight resolution hands
//! the same failure to every concurrent waiter.

use crate::models::CityId;

/// Transport failure reported by a [`Fetcher`](crate::fetcher::Fetcher).
///
/// Deliberately detached from any concrete HTTP client so stub fetchers
/// can produce it in tests and callers never see a raw `reqwest::Error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("GET {url} failed: {message}")]
pub struct TransportError {
    pub url: String,
    pub message: String,
}

impl TransportError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// What went wrong upstream, attached as the `#[source]` of a
/// [`ForecastError`] for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamCause {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The body came back but did not match the expected shape.
    #[error("could not decode response body: {0}")]
    Decode(String),

    /// The city search succeeded but returned an empty candidate list.
    #[error("search returned no candidates")]
    NoCandidates,
}

/// Errors surfaced by the forecast service and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForecastError {
    /// City-name search failed: transport error, undecodable payload,
    /// or no candidates for the query.
    #[error("city resolution for {city:?} failed")]
    Resolution {
        city: String,
        #[source]
        cause: UpstreamCause,
    },

    /// Per-city forecast fetch failed for an already-resolved identifier.
    #[error("forecast lookup for city {city_id} failed")]
    Lookup {
        city_id: CityId,
        #[source]
        cause: UpstreamCause,
    },
}

impl ForecastError {
    pub(crate) fn resolution(city: impl Into<String>, cause: impl Into<UpstreamCause>) -> Self {
        Self::Resolution {
            city: city.into(),
            cause: cause.into(),
        }
    }

    pub(crate) fn lookup(city_id: &CityId, cause: impl Into<UpstreamCause>) -> Self {
        Self::Lookup {
            city_id: city_id.clone(),
            cause: cause.into(),
        }
    }
}
