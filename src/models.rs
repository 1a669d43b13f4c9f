use std::fmt;
use std::time::{Duration, Instant};

use crate::constants::{
    DEFAULT_CONDITION, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_TEMPERATURE_C,
};

/// Temperature/condition pair currently displayed
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub condition: String,
}

impl WeatherReading {
    pub fn new(temperature_c: f64, condition: impl Into<String>) -> Self {
        WeatherReading {
            temperature_c,
            condition: condition.into(),
        }
    }

    /// "22°C" style label
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature_c)
    }
}

impl Default for WeatherReading {
    fn default() -> Self {
        WeatherReading::new(DEFAULT_TEMPERATURE_C, DEFAULT_CONDITION)
    }
}

/// Latitude/longitude used to parameterize the weather lookup
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    /// The mocked location (Kigali)
    pub fn kigali() -> Self {
        Coordinate::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    }

    /// Query form accepted by the weather endpoint: "lat,lon"
    pub fn as_query(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Transient error notification shown over the main pane
#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub raised_at: Instant,
}

impl Toast {
    pub fn destructive(title: impl Into<String>, message: impl Into<String>) -> Self {
        Toast {
            title: title.into(),
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_label_drops_trailing_zero() {
        assert_eq!(WeatherReading::new(22.0, "x").temperature_label(), "22°C");
        assert_eq!(WeatherReading::new(25.3, "x").temperature_label(), "25.3°C");
    }

    #[test]
    fn test_coordinate_query() {
        assert_eq!(Coordinate::kigali().as_query(), "-1.9441,30.0619");
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::destructive("t", "m");
        let ttl = Duration::from_secs(5);
        assert!(!toast.is_expired(toast.raised_at, ttl));
        assert!(toast.is_expired(toast.raised_at + ttl, ttl));
    }
}
