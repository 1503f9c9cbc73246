/// Weather provider's production base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.metaweather.com";

/// Forecast service configuration, injected at construction.
///
/// The base URL is the only recognized option; tests point it at a local
/// mock server. Nothing here is read from the environment.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// Weather API base URL, without a trailing slash.
    pub base_url: String,
}

impl ForecastConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}
