//! Display preferences
//!
//! An explicitly passed configuration value for the presentation boundary
//! (CLI, FFI consumers). The analytics core never reads it: every analytic
//! operates in canonical metric units and unit conversion happens at
//! display time only.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a canonical celsius value into this unit
    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindUnit {
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

impl WindUnit {
    /// Convert a canonical m/s value into this unit
    pub fn convert(&self, meters_per_second: f64) -> f64 {
        match self {
            WindUnit::MetersPerSecond => meters_per_second,
            WindUnit::KilometersPerHour => meters_per_second * 3.6,
            WindUnit::MilesPerHour => meters_per_second * 2.236_936,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            WindUnit::MetersPerSecond => "m/s",
            WindUnit::KilometersPerHour => "km/h",
            WindUnit::MilesPerHour => "mph",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    TwelveHour,
    TwentyFourHour,
}

impl TimeFormat {
    /// Render a slot timestamp's time of day in this format
    pub fn format_time(&self, timestamp: NaiveDateTime) -> String {
        match self {
            TimeFormat::TwelveHour => timestamp.format("%-I:%M %p").to_string(),
            TimeFormat::TwentyFourHour => timestamp.format("%H:%M").to_string(),
        }
    }
}

/// Recognized display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    pub temperature_unit: TemperatureUnit,
    pub wind_unit: WindUnit,
    pub time_format: TimeFormat,
    pub compact_view: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::Celsius,
            wind_unit: WindUnit::MetersPerSecond,
            time_format: TimeFormat::TwentyFourHour,
            compact_view: false,
        }
    }
}
