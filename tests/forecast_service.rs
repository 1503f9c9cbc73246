//! End-to-end scenarios against a mock weather provider.
//!
//! Mirrors the real provider's shapes: the search endpoint returns a JSON
//! array of candidates, the location endpoint returns an object with a
//! `consolidated_weather` list. Fixture dates are built relative to today
//! because the predictable window slides with the clock.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Local, NaiveDate};
use city_forecast::{
    CityIdCache, CityResolver, Forecast, ForecastConfig, ForecastError, ForecastRequest,
    ForecastService, HttpFetcher, PredictionFinder, UpstreamCause,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MADRID_WOEID: &str = "766273";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn madrid_search_body() -> String {
    format!(
        r#"[{{"title":"Madrid","location_type":"City","woeid":{},"latt_long":"40.42,-3.70"}}]"#,
        MADRID_WOEID
    )
}

fn madrid_forecast_body() -> String {
    format!(
        r#"{{"title":"Madrid","consolidated_weather":[
            {{"applicable_date":"{}","weather_state_name":"Heavy Cloud","wind_speed":2.3178431052069253}},
            {{"applicable_date":"{}","weather_state_name":"Light Cloud","wind_speed":3.25}}
        ]}}"#,
        today(),
        today() + Duration::days(1),
    )
}

async fn mount_madrid_search(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/location/search/"))
        .and(query_param("query", "Madrid"))
        .respond_with(ResponseTemplate::new(200).set_body_string(madrid_search_body()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_madrid_forecast(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/api/location/{}", MADRID_WOEID)))
        .respond_with(ResponseTemplate::new(200).set_body_string(madrid_forecast_body()))
        .mount(server)
        .await;
}

fn service_for(server: &MockServer) -> ForecastService {
    ForecastService::with_config(
        Arc::new(HttpFetcher::new()),
        ForecastConfig::with_base_url(server.uri()),
    )
}

#[tokio::test]
async fn find_the_weather_of_today() {
    let server = MockServer::start().await;
    mount_madrid_search(&server, 1).await;
    mount_madrid_forecast(&server).await;

    let prediction = service_for(&server)
        .predict_weather(&ForecastRequest::new("Madrid"))
        .await
        .unwrap();

    assert_eq!(prediction.as_deref(), Some("Heavy Cloud"));
}

#[tokio::test]
async fn find_the_weather_of_tomorrow() {
    let server = MockServer::start().await;
    mount_madrid_search(&server, 1).await;
    mount_madrid_forecast(&server).await;

    let prediction = service_for(&server)
        .predict_weather(&ForecastRequest::new("Madrid").on(today() + Duration::days(1)))
        .await
        .unwrap();

    assert_eq!(prediction.as_deref(), Some("Light Cloud"));
}

#[tokio::test]
async fn find_the_wind_of_today() {
    let server = MockServer::start().await;
    mount_madrid_search(&server, 1).await;
    mount_madrid_forecast(&server).await;

    let prediction = service_for(&server)
        .predict_wind(&ForecastRequest::new("Madrid"))
        .await
        .unwrap();

    assert_eq!(prediction.as_deref(), Some("2.3178431052069253"));
}

#[tokio::test]
async fn there_is_no_prediction_for_more_than_six_days() {
    let server = MockServer::start().await;
    // Out-of-window requests must not reach the provider at all.
    mount_madrid_search(&server, 0).await;

    let prediction = service_for(&server)
        .predict_weather(&ForecastRequest::new("Madrid").on(today() + Duration::days(6)))
        .await
        .unwrap();

    assert_eq!(prediction, None);
}

#[tokio::test]
async fn city_search_happens_once_within_the_ttl() {
    let server = MockServer::start().await;
    mount_madrid_search(&server, 1).await;
    mount_madrid_forecast(&server).await;

    let service = service_for(&server);
    let request = ForecastRequest::new("Madrid");

    let first = service.predict_weather(&request).await.unwrap();
    let second = service.predict_weather(&request).await.unwrap();

    assert_eq!(first.as_deref(), Some("Heavy Cloud"));
    assert_eq!(second.as_deref(), Some("Heavy Cloud"));
    // The .expect(1) on the search mock verifies the cache hit on drop.
}

#[tokio::test]
async fn expired_cache_entry_triggers_a_fresh_search() {
    let server = MockServer::start().await;
    mount_madrid_search(&server, 2).await;
    mount_madrid_forecast(&server).await;

    let fetcher: Arc<HttpFetcher> = Arc::new(HttpFetcher::new());
    let resolver = CityResolver::with_cache(
        fetcher.clone(),
        server.uri(),
        CityIdCache::with_policy(1000, StdDuration::from_millis(50)),
    );
    let finder = PredictionFinder::new(fetcher, server.uri());
    let service = ForecastService::from_parts(resolver, finder);

    let request = ForecastRequest::new("Madrid");
    service.predict_weather(&request).await.unwrap();
    tokio::time::sleep(StdDuration::from_millis(100)).await;
    service.predict_weather(&request).await.unwrap();
}

#[tokio::test]
async fn search_failure_surfaces_as_a_resolution_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/location/search/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .predict_weather(&ForecastRequest::new("Madrid"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ForecastError::Resolution {
            cause: UpstreamCause::Transport(_),
            ..
        }
    ));
}

#[tokio::test]
async fn forecast_failure_surfaces_as_a_lookup_error() {
    let server = MockServer::start().await;
    mount_madrid_search(&server, 1).await;
    Mock::given(method("GET"))
        .and(path(format!("/api/location/{}", MADRID_WOEID)))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .predict_wind(&ForecastRequest::new("Madrid"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ForecastError::Lookup {
            cause: UpstreamCause::Transport(_),
            ..
        }
    ));
}

#[tokio::test]
async fn unknown_city_surfaces_as_a_resolution_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/location/search/"))
        .and(query_param("query", "Atlantis"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .predict_weather(&ForecastRequest::new("Atlantis"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ForecastError::Resolution {
            cause: UpstreamCause::NoCandidates,
            ..
        }
    ));
}
