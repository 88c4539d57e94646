//! Forecast synthesizer.
//!
//! Stands in for a real weather provider: derives a plausible reading for a race
//! date from the date's season and a caller-supplied random source. The RNG is a
//! parameter so a seeded generator makes synthesis reproducible under test; the
//! ambient `rand::rng()` is only reached for at the `advisor` boundary.

use std::ops::Range;

use chrono::{Datelike, NaiveDate};
use rand::RngExt;

use crate::models::{Condition, WeatherReading};
use crate::recommendations;

/// Calendar season used by both synthesis and the seasonal advisory block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// December, January, February
    Winter,
    /// June through September
    Summer,
    /// Everything else (spring and autumn share one profile)
    Shoulder,
}

impl Season {
    /// Season for a chrono month number (1 = January)
    #[must_use]
    pub fn for_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            6..=9 => Season::Summer,
            _ => Season::Shoulder,
        }
    }

    /// Season the given date falls in
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_month(date.month())
    }

    fn profile(self) -> SeasonProfile {
        match self {
            Season::Winter => SeasonProfile {
                temperature_c: 2.0..17.0,
                wind_speed_kmh: 10.0..35.0,
                humidity_pct: 60.0..90.0,
                condition_draw: ConditionDraw {
                    first_above: 0.6,
                    first: Condition::Rainy,
                    second_above: 0.3,
                    second: Condition::Cloudy,
                    fallback: Condition::Sunny,
                },
            },
            Season::Summer => SeasonProfile {
                temperature_c: 18.0..38.0,
                wind_speed_kmh: 5.0..20.0,
                humidity_pct: 40.0..80.0,
                condition_draw: ConditionDraw {
                    first_above: 0.7,
                    first: Condition::Sunny,
                    second_above: 0.4,
                    second: Condition::Cloudy,
                    fallback: Condition::Rainy,
                },
            },
            Season::Shoulder => SeasonProfile {
                temperature_c: 8.0..26.0,
                wind_speed_kmh: 8.0..28.0,
                humidity_pct: 50.0..85.0,
                condition_draw: ConditionDraw {
                    first_above: 0.5,
                    first: Condition::Cloudy,
                    second_above: 0.3,
                    second: Condition::Sunny,
                    fallback: Condition::Rainy,
                },
            },
        }
    }
}

/// Numeric ranges and condition odds for one season
struct SeasonProfile {
    temperature_c: Range<f64>,
    wind_speed_kmh: Range<f64>,
    humidity_pct: Range<f64>,
    condition_draw: ConditionDraw,
}

/// Two-step condition draw.
///
/// The second uniform draw only happens when the first check fails, so the
/// resulting distribution is not a flat categorical pick. Readings recorded by
/// the club application were produced this way; keep the exact sequence.
struct ConditionDraw {
    first_above: f64,
    first: Condition,
    second_above: f64,
    second: Condition,
    fallback: Condition,
}

impl ConditionDraw {
    fn draw<R: RngExt>(&self, rng: &mut R) -> Condition {
        if rng.random_range(0.0..1.0) > self.first_above {
            self.first
        } else if rng.random_range(0.0..1.0) > self.second_above {
            self.second
        } else {
            self.fallback
        }
    }
}

/// Synthesize a weather reading for a race, advisories included.
///
/// `_location` is accepted for signature compatibility with a future real
/// provider but does not vary the output. `evaluation_date` drives only the
/// seasonal advisory block; the numeric profile follows `race_date`. Past and
/// future race dates share this single path.
///
/// Draw order is fixed (temperature, condition, wind, humidity) so a seeded RNG
/// reproduces a reading exactly. The advisory rules see the unrounded draws;
/// the reading stores rounded values.
pub fn synthesize<R: RngExt>(
    _location: &str,
    race_date: NaiveDate,
    evaluation_date: NaiveDate,
    rng: &mut R,
) -> WeatherReading {
    let profile = Season::for_date(race_date).profile();

    let temperature_c = rng.random_range(profile.temperature_c.clone());
    let condition = profile.condition_draw.draw(rng);
    let wind_speed_kmh = rng.random_range(profile.wind_speed_kmh.clone());
    let humidity_pct = rng.random_range(profile.humidity_pct.clone());

    tracing::debug!(
        "Synthesized {condition} {temperature_c:.1}°C wind {wind_speed_kmh:.1} km/h \
         humidity {humidity_pct:.0}% for {race_date}"
    );

    let recommendations = recommendations::for_conditions(
        temperature_c,
        condition,
        wind_speed_kmh,
        humidity_pct,
        evaluation_date,
    );

    WeatherReading {
        temperature_c: temperature_c.round() as i32,
        condition,
        wind_speed_kmh: wind_speed_kmh.round() as i32,
        humidity_pct: humidity_pct.round() as i32,
        recommendations,
    }
}
