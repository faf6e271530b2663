//! Shapes the raw provider forecast list for display.

use crate::models::{ForecastEntry, RawForecastRecord};

// ---

/// Display cap on forecast entries; records past this are dropped.
const MAX_ENTRIES: usize = 10;

/// Convert raw provider records into display-ready entries.
///
/// Keeps provider order, caps the result at [`MAX_ENTRIES`] and applies the
/// per-field unit conversions from [`ForecastEntry::from_raw`]. An empty
/// input produces an empty vector.
pub fn shape_forecast(records: &[RawForecastRecord]) -> Vec<ForecastEntry> {
    // ---
    records
        .iter()
        .take(MAX_ENTRIES)
        .map(ForecastEntry::from_raw)
        .collect()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::models::{RawCondition, RawMain, RawWind};

    fn create_test_records(count: usize) -> Vec<RawForecastRecord> {
        // ---
        (0..count)
            .map(|i| RawForecastRecord {
                dt: 1_735_732_800 + (i as i64) * 10_800,
                main: RawMain {
                    temp: 10.0 + i as f64,
                    feels_like: 9.0 + i as f64,
                    humidity: 60,
                    pressure: 1015,
                },
                weather: vec![RawCondition {
                    description: "overcast clouds".to_string(),
                    icon: "04d".to_string(),
                }],
                wind: RawWind { speed: 4.12 },
                pop: if i % 2 == 0 { Some(0.25) } else { None },
            })
            .collect()
    }

    #[test]
    fn test_caps_at_ten_entries_in_order() {
        // ---
        let shaped = shape_forecast(&create_test_records(15));

        assert_eq!(shaped.len(), 10);
        for (i, entry) in shaped.iter().enumerate() {
            assert_eq!(entry.temperature, 10.0 + i as f64);
        }
    }

    #[test]
    fn test_short_input_passes_through() {
        // ---
        assert_eq!(shape_forecast(&create_test_records(3)).len(), 3);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        // ---
        assert!(shape_forecast(&[]).is_empty());
    }

    #[test]
    fn test_per_entry_conversions() {
        // ---
        let shaped = shape_forecast(&create_test_records(2));

        // 4.12 m/s -> 14.832 km/h -> 14.8
        assert_eq!(shaped[0].wind_speed, 14.8);
        assert_eq!(shaped[0].rain_probability, 25);
        // Missing pop defaults to 0
        assert_eq!(shaped[1].rain_probability, 0);
        assert_eq!(shaped[0].description, "overcast clouds");
        assert_eq!(shaped[0].icon, "04d");
        assert_eq!(shaped[0].humidity, 60);
    }

    #[test]
    fn test_shaping_is_deterministic() {
        // ---
        let records = create_test_records(12);
        let first = shape_forecast(&records);
        let second = shape_forecast(&records);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.date_time, b.date_time);
            assert_eq!(a.temperature, b.temperature);
            assert_eq!(a.wind_speed, b.wind_speed);
            assert_eq!(a.rain_probability, b.rain_probability);
        }
    }

    #[test]
    fn test_timestamps_preserve_provider_spacing() {
        // ---
        let shaped = shape_forecast(&create_test_records(2));
        let gap = shaped[1].date_time - shaped[0].date_time;

        assert_eq!(gap.num_hours(), 3);
    }
}
