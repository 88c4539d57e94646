//! Public entry point for race-day weather lookups.
//!
//! `WeatherAdvisor` is what the race forms call: it parses the race date,
//! simulates the provider round trip, and returns a fresh reading with its
//! advisories attached. This is the only place where ambient randomness and the
//! real current date enter; everything below it is pure and parameterized.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::config::WeatherConfig;
use crate::error::RaceMeteoError;
use crate::forecast;
use crate::models::WeatherReading;
use crate::Result;

/// Weather lookup service for race planning
pub struct WeatherAdvisor {
    provider_latency: Duration,
}

impl WeatherAdvisor {
    /// Build an advisor from the weather section of the application config
    #[must_use]
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            provider_latency: Duration::from_millis(config.simulated_latency_ms),
        }
    }

    /// Fetch the weather reading for a race at `location` on `date_iso`.
    ///
    /// Repeated calls with the same inputs produce different readings; callers
    /// that refresh after an edit just display the latest one. `Ok(None)` is
    /// reserved for a real provider failing to answer; synthesis always yields
    /// a reading today.
    ///
    /// # Errors
    ///
    /// Returns [`RaceMeteoError::InvalidDate`] when `date_iso` is neither a
    /// `YYYY-MM-DD` date nor an RFC 3339 timestamp.
    pub async fn weather_for_race(
        &self,
        location: &str,
        date_iso: &str,
    ) -> Result<Option<WeatherReading>> {
        let race_date = parse_race_date(date_iso)?;

        debug!("Fetching weather for {location} on {race_date}");

        // Stand-in for the provider round trip
        tokio::time::sleep(self.provider_latency).await;

        let reading = forecast::synthesize(
            location,
            race_date,
            Utc::now().date_naive(),
            &mut rand::rng(),
        );

        Ok(Some(reading))
    }
}

impl Default for WeatherAdvisor {
    fn default() -> Self {
        Self::new(&WeatherConfig::default())
    }
}

/// Parse a race date from form input.
///
/// Accepts a plain `YYYY-MM-DD` date, or a full RFC 3339 timestamp for records
/// imported from calendar exports.
pub fn parse_race_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.date_naive())
        .map_err(|_| RaceMeteoError::invalid_date(input))
}
