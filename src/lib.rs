//! `RaceMeteo` - race-day weather forecasting and rider advisories for club cycling
//!
//! This library synthesizes a plausible weather reading for a race location and
//! date, and derives an ordered list of rider advisories from temperature, sky
//! condition, wind, humidity and the current season.

pub mod advisor;
pub mod config;
pub mod error;
pub mod forecast;
pub mod models;
pub mod recommendations;

// Re-export core types for public API
pub use advisor::{WeatherAdvisor, parse_race_date};
pub use config::RaceMeteoConfig;
pub use error::RaceMeteoError;
pub use forecast::Season;
pub use models::{Condition, WeatherReading, icon_for, label_for};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RaceMeteoError>;
