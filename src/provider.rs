//! HTTP client for the upstream OpenWeatherMap-style forecast API.
//!
//! The service never talks to the provider anywhere else; handlers call
//! [`fetch_forecast`] and map [`ProviderError`] variants onto HTTP
//! responses.

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::RawForecastResponse;

// ---

#[derive(Debug, Error)]
pub enum ProviderError {
    // ---
    /// The provider does not know the requested location.
    #[error("city not found")]
    CityNotFound,

    /// Any other non-success status from the provider.
    #[error("provider request failed with status {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("failed to reach weather provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---

/// Fetch the 5-day/3-hour forecast for a location, in metric units.
///
/// `base_url` is the provider API root (e.g.
/// `https://api.openweathermap.org/data/2.5`); tests point it at a local
/// mock server.
pub async fn fetch_forecast(
    base_url: &str,
    api_key: &str,
    location: &str,
) -> Result<RawForecastResponse, ProviderError> {
    // ---
    let client = reqwest::Client::new();
    let url = format!("{}/forecast", base_url.trim_end_matches('/'));

    tracing::debug!("Fetching forecast from: {}", url);

    let res = client
        .get(&url)
        .query(&[("q", location), ("units", "metric"), ("appid", api_key)])
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    if status == StatusCode::NOT_FOUND {
        return Err(ProviderError::CityNotFound);
    }

    if !status.is_success() {
        return Err(ProviderError::Upstream {
            status,
            body: truncate_body(&body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Keep provider error bodies short enough to log.
fn truncate_body(body: &str) -> String {
    // ---
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let cut: String = body.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}
