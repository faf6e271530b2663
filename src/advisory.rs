//! Threshold rules that turn a current weather reading into farming
//! advisories.
//!
//! Every rule is checked independently against the same reading and the
//! matches are appended in table order, so the rule list doubles as the
//! display priority. A reading that matches nothing still produces one
//! neutral `info` advisory.

use crate::models::{Advisory, AdvisoryKind, WeatherReading};

// ---

/// One row of the advisory rule table.
struct Rule {
    // ---
    applies: fn(&WeatherReading) -> bool,
    kind: AdvisoryKind,
    icon: &'static str,
    message: &'static str,
}

/// Ordered rule table. Thresholds are strict comparisons except the
/// pleasant-weather band, which includes both ends.
const RULES: &[Rule] = &[
    Rule {
        applies: |r| r.rain_probability > 60,
        kind: AdvisoryKind::Warning,
        icon: "🌧️",
        message: "Avoid irrigation and pesticide spraying today. High chance of rain detected.",
    },
    Rule {
        applies: |r| r.temperature > 35.0,
        kind: AdvisoryKind::Warning,
        icon: "🌡️",
        message: "Increase irrigation frequency for heat-sensitive crops. Temperature is very high.",
    },
    Rule {
        applies: |r| r.wind_speed > 15.0,
        kind: AdvisoryKind::Warning,
        icon: "💨",
        message: "Do not spray pesticides due to drift risk. Wind speed is too high.",
    },
    Rule {
        applies: |r| r.humidity > 80,
        kind: AdvisoryKind::Warning,
        icon: "💧",
        message: "High humidity detected. Monitor crops for fungal infection and diseases.",
    },
    Rule {
        applies: |r| r.wind_speed < 10.0 && r.rain_probability < 30,
        kind: AdvisoryKind::Good,
        icon: "✅",
        message: "Good conditions for pesticide spraying. Low wind and no rain expected.",
    },
    Rule {
        applies: |r| r.temperature >= 20.0 && r.temperature <= 30.0,
        kind: AdvisoryKind::Good,
        icon: "🌤️",
        message: "Pleasant weather for outdoor farming activities.",
    },
    Rule {
        applies: |r| r.temperature < 5.0,
        kind: AdvisoryKind::Warning,
        icon: "❄️",
        message: "Risk of frost! Protect sensitive crops with covers.",
    },
];

/// Fallback when no rule matches.
const FALLBACK: Advisory = Advisory {
    kind: AdvisoryKind::Info,
    icon: "ℹ️",
    message: "Weather conditions are normal. Proceed with regular farming activities.",
};

// ---

/// Evaluate the rule table against a reading.
///
/// Pure and deterministic; always returns at least one advisory. The
/// reading is expected to be fully populated (see [`WeatherReading`]).
pub fn generate_advisories(reading: &WeatherReading) -> Vec<Advisory> {
    // ---
    let mut advisories: Vec<Advisory> = RULES
        .iter()
        .filter(|rule| (rule.applies)(reading))
        .map(|rule| Advisory {
            kind: rule.kind,
            icon: rule.icon,
            message: rule.message,
        })
        .collect();

    if advisories.is_empty() {
        advisories.push(FALLBACK);
    }

    advisories
}
