//! Weather reading model and display helpers

use serde::{Deserialize, Serialize};

/// Sky condition attached to a weather reading.
///
/// Serialized as lowercase strings (`"rainy"`, `"stormy"`, ...) so readings stay
/// interchangeable with the club application's existing race records. Synthesis
/// only ever produces `Sunny`, `Cloudy` or `Rainy`; the remaining tags exist for
/// data supplied by a real weather provider or a manual override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Foggy,
    Windy,
}

impl Condition {
    /// All six condition tags, in declaration order.
    pub const ALL: [Condition; 6] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Stormy,
        Condition::Foggy,
        Condition::Windy,
    ];

    /// Lowercase wire name of this condition
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::Stormy => "stormy",
            Condition::Foggy => "foggy",
            Condition::Windy => "windy",
        }
    }

    /// Emoji shown next to the reading in race lists and forms
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::Cloudy => "☁️",
            Condition::Rainy => "🌧️",
            Condition::Stormy => "⛈️",
            Condition::Foggy => "🌫️",
            Condition::Windy => "💨",
        }
    }

    /// Display label for this condition
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "Ensoleillé",
            Condition::Cloudy => "Nuageux",
            Condition::Rainy => "Pluvieux",
            Condition::Stormy => "Orageux",
            Condition::Foggy => "Brouillard",
            Condition::Windy => "Venteux",
        }
    }

    /// Parse a lowercase condition tag, `None` for anything unrecognized
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "sunny" => Some(Condition::Sunny),
            "cloudy" => Some(Condition::Cloudy),
            "rainy" => Some(Condition::Rainy),
            "stormy" => Some(Condition::Stormy),
            "foggy" => Some(Condition::Foggy),
            "windy" => Some(Condition::Windy),
            _ => None,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon for a raw condition tag, with a neutral fallback for unknown tags.
///
/// Race records created before condition tags were constrained may carry free-form
/// strings, so the string-level helpers never fail.
#[must_use]
pub fn icon_for(tag: &str) -> &'static str {
    Condition::parse(tag).map_or("🌤️", Condition::icon)
}

/// Display label for a raw condition tag, with a fallback for unknown tags
#[must_use]
pub fn label_for(tag: &str) -> &'static str {
    Condition::parse(tag).map_or("Variable", Condition::label)
}

/// One synthesized weather reading for a race, with its rider advisories.
///
/// Created fresh on every request, never cached and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in °C, rounded to the nearest degree
    pub temperature_c: i32,
    /// Sky condition
    pub condition: Condition,
    /// Wind speed in km/h, rounded
    pub wind_speed_kmh: i32,
    /// Relative humidity in percent, rounded
    pub humidity_pct: i32,
    /// Ordered rider advisories: temperature block first, then condition, wind,
    /// humidity and seasonal blocks. Duplicates across blocks are kept as-is.
    pub recommendations: Vec<String>,
}

impl WeatherReading {
    /// One-line summary used by the CLI output
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} — {}°C, vent {} km/h, humidité {}%",
            self.condition.icon(),
            self.condition.label(),
            self.temperature_c,
            self.wind_speed_kmh,
            self.humidity_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_for_known_and_unknown_tags() {
        assert_eq!(icon_for("rainy"), "🌧️");
        assert_eq!(icon_for("stormy"), "⛈️");
        assert_eq!(icon_for("unknown"), "🌤️");
        assert_eq!(icon_for(""), "🌤️");
    }

    #[test]
    fn test_label_for_known_and_unknown_tags() {
        assert_eq!(label_for("sunny"), "Ensoleillé");
        assert_eq!(label_for("foggy"), "Brouillard");
        assert_eq!(label_for("drizzle"), "Variable");
    }

    #[test]
    fn test_parse_round_trips_every_condition() {
        for condition in Condition::ALL {
            assert_eq!(Condition::parse(condition.as_str()), Some(condition));
        }
    }

    #[test]
    fn test_condition_serializes_lowercase() {
        let json = serde_json::to_string(&Condition::Rainy).unwrap();
        assert_eq!(json, "\"rainy\"");

        let parsed: Condition = serde_json::from_str("\"windy\"").unwrap();
        assert_eq!(parsed, Condition::Windy);
    }

    #[test]
    fn test_summary_contains_all_fields() {
        let reading = WeatherReading {
            temperature_c: 12,
            condition: Condition::Cloudy,
            wind_speed_kmh: 18,
            humidity_pct: 70,
            recommendations: vec!["dummy".to_string()],
        };

        let summary = reading.summary();
        assert!(summary.contains("12°C"));
        assert!(summary.contains("18 km/h"));
        assert!(summary.contains("70%"));
        assert!(summary.contains("Nuageux"));
    }
}
