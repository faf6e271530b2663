use axum::{
    extract::Query, extract::State, http::StatusCode, response::IntoResponse, routing::get, Json,
    Router,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, error, info};

use crate::advisory::generate_advisories;
use crate::forecast::shape_forecast;
use crate::provider::{self, ProviderError};
use crate::{Advisory, Config, ForecastEntry, WeatherReading};

// ---

pub fn router() -> Router<(PgPool, Config)> {
    // ---
    Router::new().route("/api/weather", get(handler))
}

/// Query parameters for the weather lookup
#[derive(Debug, Deserialize)]
struct WeatherQuery {
    location: Option<String>,
}

/// Success envelope consumed by the frontend
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WeatherEnvelope {
    success: bool,
    current_weather: WeatherReading,
    forecast: Vec<ForecastEntry>,
    advisories: Vec<Advisory>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: &'static str,
}

fn error_response(status: StatusCode, error: &'static str) -> axum::response::Response {
    // ---
    (
        status,
        Json(ErrorBody {
            success: false,
            error,
        }),
    )
        .into_response()
}

async fn handler(
    Query(params): Query<WeatherQuery>,
    State((pool, config)): State<(PgPool, Config)>,
) -> impl IntoResponse {
    // ---
    info!("GET /api/weather - Starting lookup");

    // Step 1: Validate the location parameter
    let location = match params.location.as_deref().map(str::trim) {
        Some(loc) if !loc.is_empty() => loc.to_string(),
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Please provide a location. Example: /api/weather?location=Mumbai",
            );
        }
    };

    // Step 2: Fetch the 5-day forecast from the provider
    debug!("GET /api/weather - Fetching forecast for '{}'", location);

    let raw = match provider::fetch_forecast(&config.api_url, &config.api_key, &location).await {
        Ok(raw) => raw,
        Err(ProviderError::CityNotFound) => {
            info!("City not found: {}", location);
            return error_response(
                StatusCode::NOT_FOUND,
                "City not found. Please check the spelling and try again.",
            );
        }
        Err(e) => {
            error!("Failed to fetch weather data: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch weather data. Please try again later.",
            );
        }
    };

    // Step 3: Current conditions come from the first forecast record
    let Some(first) = raw.list.first() else {
        error!("Forecast for '{}' contained no records", location);
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch weather data. Please try again later.",
        );
    };

    let current = WeatherReading::from_raw(&raw.city, first);
    let forecast = shape_forecast(&raw.list);
    let advisories = generate_advisories(&current);

    // Step 4: Record the search; the response never depends on this write
    if let Err(e) = save_search(&pool, &current.city_name).await {
        error!("Could not save search for '{}': {}", current.city_name, e);
    } else {
        debug!("Saved search: {}", current.city_name);
    }

    info!(
        "GET /api/weather - Returning {} forecast entries, {} advisories for {}",
        forecast.len(),
        advisories.len(),
        current.city_name
    );

    (
        StatusCode::OK,
        Json(WeatherEnvelope {
            success: true,
            current_weather: current,
            forecast,
            advisories,
        }),
    )
        .into_response()
}

// ---

/// Append one search record to the history table
async fn save_search(pool: &PgPool, city: &str) -> Result<(), sqlx::Error> {
    // ---
    sqlx::query("INSERT INTO search_history (location_name) VALUES ($1)")
        .bind(city)
        .execute(pool)
        .await?;

    Ok(())
}
