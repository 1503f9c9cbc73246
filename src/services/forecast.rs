//! Forecast resolution service.
//!
//! Orchestrates the whole prediction path: default the request date to
//! today, reject dates beyond the predictable window (a normal empty
//! result, not an error), resolve the city identifier, find the matching
//! day's record, and project the requested field out of it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};

use crate::config::ForecastConfig;
use crate::errors::ForecastError;
use crate::fetcher::Fetcher;
use crate::models::{DailyPrediction, ForecastRequest};
use crate::services::finder::PredictionFinder;
use crate::services::resolver::CityResolver;

/// Number of days the provider supplies predictions for: today plus the
/// next five. Day six onward has no data.
pub const WINDOW_DAYS: i64 = 6;

/// The two forecast projections.
///
/// Both run the identical resolution path; implementations differ only in
/// which field of the matched record they return.
#[async_trait]
pub trait Forecast: Send + Sync {
    /// Weather-state text for the requested city and date, e.g.
    /// "Heavy Cloud". `Ok(None)` when no prediction is available.
    async fn predict_weather(
        &self,
        request: &ForecastRequest,
    ) -> Result<Option<String>, ForecastError>;

    /// Wind speed for the requested city and date, rendered as its
    /// decimal string form. `Ok(None)` when no prediction is available.
    async fn predict_wind(&self, request: &ForecastRequest)
        -> Result<Option<String>, ForecastError>;
}

/// [`Forecast`] implementation backed by the weather provider's API.
pub struct ForecastService {
    resolver: CityResolver,
    finder: PredictionFinder,
}

impl ForecastService {
    /// Service against the provider's production URL.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self::with_config(fetcher, ForecastConfig::default())
    }

    pub fn with_config(fetcher: Arc<dyn Fetcher>, config: ForecastConfig) -> Self {
        let resolver = CityResolver::new(fetcher.clone(), config.base_url.clone());
        let finder = PredictionFinder::new(fetcher, config.base_url);
        Self::from_parts(resolver, finder)
    }

    /// Assemble from pre-built collaborators, e.g. a resolver carrying a
    /// pre-populated or short-TTL cache.
    pub fn from_parts(resolver: CityResolver, finder: PredictionFinder) -> Self {
        Self { resolver, finder }
    }

    /// Run the shared resolution path and return the matched record.
    async fn matching_prediction(
        &self,
        request: &ForecastRequest,
    ) -> Result<Option<DailyPrediction>, ForecastError> {
        let today = Local::now().date_naive();
        let date = request.date.unwrap_or(today);

        if date > last_predictable_day(today) {
            tracing::debug!(
                "{} is beyond the predictable window, no prediction for '{}'",
                date,
                request.city_name
            );
            return Ok(None);
        }

        let city_id = self.resolver.resolve(&request.city_name).await?;
        self.finder.find(&city_id, date).await
    }
}

#[async_trait]
impl Forecast for ForecastService {
    async fn predict_weather(
        &self,
        request: &ForecastRequest,
    ) -> Result<Option<String>, ForecastError> {
        let prediction = self.matching_prediction(request).await?;
        Ok(prediction.map(|p| p.weather_state))
    }

    async fn predict_wind(
        &self,
        request: &ForecastRequest,
    ) -> Result<Option<String>, ForecastError> {
        let prediction = self.matching_prediction(request).await?;
        Ok(prediction.map(|p| p.wind_speed.to_string()))
    }
}

/// Last day with provider data: today plus the next five days.
fn last_predictable_day(today: NaiveDate) -> NaiveDate {
    today + Duration::days(WINDOW_DAYS - 1)
}
