//! Data models for the weather advisory pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---

/// Raw 5-day forecast payload from the upstream weather API.
#[derive(Debug, Deserialize)]
pub struct RawForecastResponse {
    // ---
    pub city: RawCity,
    pub list: Vec<RawForecastRecord>,
}

#[derive(Debug, Deserialize)]
pub struct RawCity {
    // ---
    pub name: String,
    pub country: String,
}

/// One three-hourly forecast record as the provider returns it.
#[derive(Debug, Deserialize)]
pub struct RawForecastRecord {
    // ---
    pub dt: i64,
    pub main: RawMain,
    pub weather: Vec<RawCondition>,
    pub wind: RawWind,
    /// Rain probability as a 0..=1 fraction; absent on some records.
    pub pop: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawMain {
    // ---
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Deserialize)]
pub struct RawCondition {
    // ---
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct RawWind {
    // ---
    pub speed: f64,
}

// ---

/// Current-conditions snapshot served as `currentWeather`.
///
/// Built from the first record of the upstream forecast list and fully
/// populated before advisory generation runs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    // ---
    pub city_name: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    pub rain_probability: u8,
    pub pressure: u32,
}

/// One display-ready forecast entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    // ---
    pub date_time: DateTime<Utc>,
    pub temperature: f64,
    pub humidity: u8,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    pub rain_probability: u8,
}

/// Severity of an advisory as rendered by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryKind {
    Warning,
    Good,
    Info,
}

/// A short farming recommendation derived from the current reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    // ---
    #[serde(rename = "type")]
    pub kind: AdvisoryKind,
    pub icon: &'static str,
    pub message: &'static str,
}

// ---

/// Simple transformation helpers
impl WeatherReading {
    // ---
    pub fn from_raw(city: &RawCity, record: &RawForecastRecord) -> WeatherReading {
        // ---
        let condition = record.weather.first();

        WeatherReading {
            city_name: city.name.clone(),
            country: city.country.clone(),
            temperature: round_tenth(record.main.temp),
            feels_like: round_tenth(record.main.feels_like),
            humidity: record.main.humidity,
            description: condition.map_or_else(String::new, |c| c.description.clone()),
            icon: condition.map_or_else(String::new, |c| c.icon.clone()),
            wind_speed: wind_kmh(record.wind.speed),
            rain_probability: rain_pct(record.pop),
            pressure: record.main.pressure,
        }
    }
}

impl ForecastEntry {
    // ---
    pub fn from_raw(record: &RawForecastRecord) -> ForecastEntry {
        // ---
        let condition = record.weather.first();

        ForecastEntry {
            date_time: DateTime::from_timestamp(record.dt, 0).unwrap_or_default(),
            temperature: round_tenth(record.main.temp),
            humidity: record.main.humidity,
            description: condition.map_or_else(String::new, |c| c.description.clone()),
            icon: condition.map_or_else(String::new, |c| c.icon.clone()),
            wind_speed: wind_kmh(record.wind.speed),
            rain_probability: rain_pct(record.pop),
        }
    }
}

/// Round to one decimal place for display.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Provider wind speeds are meters/second; the frontend shows km/h.
fn wind_kmh(mps: f64) -> f64 {
    round_tenth(mps * 3.6)
}

/// Rain probability arrives as a 0..=1 fraction; a missing value means
/// the provider expects no rain.
fn rain_pct(pop: Option<f64>) -> u8 {
    (pop.unwrap_or(0.0) * 100.0).round() as u8
}
