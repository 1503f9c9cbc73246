//! City weather and wind forecast resolution.
//!
//! Answers "what will the weather/wind be in city C on date D?" against
//! the MetaWeather API: city names are resolved to provider identifiers
//! through a search endpoint (memoized in a bounded TTL cache), and the
//! matching day's record is picked out of the per-city forecast list.
//!
//! ```no_run
//! use std::sync::Arc;
//! use city_forecast::{Forecast, ForecastRequest, ForecastService, HttpFetcher};
//!
//! # async fn run() -> Result<(), city_forecast::ForecastError> {
//! let service = ForecastService::new(Arc::new(HttpFetcher::new()));
//! let weather = service.predict_weather(&ForecastRequest::new("Madrid")).await?;
//! println!("{:?}", weather); // e.g. Some("Heavy Cloud")
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod services;

pub use cache::CityIdCache;
pub use config::ForecastConfig;
pub use errors::{ForecastError, TransportError, UpstreamCause};
pub use fetcher::{Fetcher, HttpFetcher};
pub use models::{CityId, DailyPrediction, ForecastRequest};
pub use services::finder::PredictionFinder;
pub use services::forecast::{Forecast, ForecastService, WINDOW_DAYS};
pub use services::resolver::CityResolver;
