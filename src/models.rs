//! Domain values shared across the forecast services.

use chrono::NaiveDate;

/// A request for a single city's forecast.
///
/// The date is optional; when absent the prediction is resolved for
/// "today" in the caller's local time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    /// City name as the user typed it, e.g. "Madrid". Must be non-empty.
    pub city_name: String,
    /// Target calendar date; `None` means today.
    pub date: Option<NaiveDate>,
}

impl ForecastRequest {
    /// Request for today's prediction.
    pub fn new(city_name: impl Into<String>) -> Self {
        Self {
            city_name: city_name.into(),
            date: None,
        }
    }

    /// Pin the request to a specific calendar date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Provider-assigned location identifier, obtained via city-name search.
///
/// Opaque: the provider serves it as an integer (`woeid`) but nothing in
/// this crate depends on that, so it is carried as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityId(String);

impl CityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One day's forecast entry for a resolved city.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPrediction {
    pub applicable_date: NaiveDate,
    pub weather_state: String,
    pub wind_speed: f64,
}
