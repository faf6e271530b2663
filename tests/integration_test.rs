//! End-to-end smoke tests against a running service instance.
//!
//! These need the server, a PostgreSQL database and a valid provider API
//! key, so they are ignored by default. Run with:
//! `BASE_URL=http://localhost:5000 cargo test -- --ignored`

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeatherEnvelope {
    success: bool,
    current_weather: CurrentWeather,
    forecast: Vec<ForecastEntry>,
    advisories: Vec<Advisory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentWeather {
    city_name: String,
    humidity: u8,
    wind_speed: f64,
    rain_probability: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastEntry {
    humidity: u8,
    rain_probability: u8,
}

#[derive(Debug, Deserialize)]
struct Advisory {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecentSearchesResponse {
    success: bool,
    recent_searches: Vec<String>,
}

fn base_url() -> String {
    std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:5000".into())
}

#[tokio::test]
#[ignore = "requires a running service, database and provider API key"]
async fn weather_endpoint_shapes_response() -> Result<()> {
    // ---
    let url = format!("{}/api/weather?location=London", base_url());

    let client = Client::new();
    let envelope: WeatherEnvelope = client.get(&url).send().await?.json().await?;

    assert!(envelope.success);
    assert!(!envelope.current_weather.city_name.is_empty());
    assert!(envelope.current_weather.humidity <= 100);
    assert!(envelope.current_weather.rain_probability <= 100);
    assert!(envelope.current_weather.wind_speed >= 0.0);

    // At most ten entries, each with sane percentages
    assert!(envelope.forecast.len() <= 10, "forecast too long");
    for entry in &envelope.forecast {
        assert!(entry.humidity <= 100);
        assert!(entry.rain_probability <= 100);
    }

    // Advisory list is never empty and only uses the known kinds
    assert!(!envelope.advisories.is_empty(), "no advisories returned");
    for advisory in &envelope.advisories {
        assert!(
            ["warning", "good", "info"].contains(&advisory.kind.as_str()),
            "unexpected advisory type {} for {}",
            advisory.kind,
            advisory.message
        );
    }

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running service, database and provider API key"]
async fn missing_location_is_rejected() -> Result<()> {
    // ---
    let client = Client::new();
    let res = client
        .get(format!("{}/api/weather", base_url()))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running service, database and provider API key"]
async fn recent_searches_records_and_clears() -> Result<()> {
    // ---
    let base = base_url();
    let client = Client::new();

    // A successful lookup should land in the history
    let res = client
        .get(format!("{}/api/weather?location=London", base))
        .send()
        .await?;
    assert!(res.status().is_success());

    let recent: RecentSearchesResponse = client
        .get(format!("{}/api/recent-searches", base))
        .send()
        .await?
        .json()
        .await?;

    assert!(recent.success);
    assert!(recent.recent_searches.len() <= 5, "history not bounded to 5");
    assert_eq!(
        recent.recent_searches.first().map(String::as_str),
        Some("London"),
        "latest search should come first"
    );

    // Clearing leaves an empty history
    let res = client
        .delete(format!("{}/api/recent-searches", base))
        .send()
        .await?;
    assert!(res.status().is_success());

    let recent: RecentSearchesResponse = client
        .get(format!("{}/api/recent-searches", base))
        .send()
        .await?
        .json()
        .await?;
    assert!(recent.recent_searches.is_empty());

    Ok(())
}
