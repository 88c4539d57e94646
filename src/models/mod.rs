//! Data models for weather readings and rider advisories

pub mod weather;

pub use weather::{Condition, WeatherReading, icon_for, label_for};
