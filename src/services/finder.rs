//! Per-city forecast lookup.
//!
//! The provider's location endpoint returns a JSON object whose
//! `consolidated_weather` array holds one entry per forecast day. The
//! finder fetches that list fresh on every call (forecasts go stale too
//! fast to be worth caching) and picks the entry for the requested date.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::{ForecastError, UpstreamCause};
use crate::fetcher::Fetcher;
use crate::models::{CityId, DailyPrediction};

#[derive(Debug, Deserialize)]
struct LocationResponse {
    consolidated_weather: Vec<RawPrediction>,
}

/// One forecast-day entry as the provider serves it.
/// The endpoint carries many more fields; only these three matter here.
#[derive(Debug, Deserialize)]
struct RawPrediction {
    applicable_date: NaiveDate,
    weather_state_name: String,
    wind_speed: f64,
}

impl From<RawPrediction> for DailyPrediction {
    fn from(raw: RawPrediction) -> Self {
        Self {
            applicable_date: raw.applicable_date,
            weather_state: raw.weather_state_name,
            wind_speed: raw.wind_speed,
        }
    }
}

/// Finds the forecast entry matching a (city, date) pair.
pub struct PredictionFinder {
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
}

impl PredictionFinder {
    pub fn new(fetcher: Arc<dyn Fetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// Fetch the city's forecast list and return the entry for `date`.
    ///
    /// `Ok(None)` when the provider has no entry for that date. If the
    /// provider ever repeats a date, the first entry in upstream order
    /// wins; the list is not re-sorted.
    pub async fn find(
        &self,
        city_id: &CityId,
        date: NaiveDate,
    ) -> Result<Option<DailyPrediction>, ForecastError> {
        let url = format!("{}/api/location/{}", self.base_url, city_id);

        let body = self
            .fetcher
            .get(&url)
            .await
            .map_err(|e| ForecastError::lookup(city_id, e))?;

        let response: LocationResponse = serde_json::from_str(&body)
            .map_err(|e| ForecastError::lookup(city_id, UpstreamCause::Decode(e.to_string())))?;

        let matched = response
            .consolidated_weather
            .into_iter()
            .find(|raw| raw.applicable_date == date)
            .map(DailyPrediction::from);

        if matched.is_none() {
            tracing::debug!("no forecast entry for city {} on {}", city_id, date);
        }
        Ok(matched)
    }
}
