//! Application constants
//!
//! Centralized location for magic strings and startup defaults.

/// Application name
pub const APP_NAME: &str = "Travel Dash";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file written next to the working directory
pub const LOG_FILE_NAME: &str = "travel-dash.log";

/// Currency label shown next to wallet amounts
pub const CURRENCY: &str = "RWF";

/// Mock geolocation (Kigali, Rwanda)
pub const DEFAULT_LATITUDE: f64 = -1.9441;
pub const DEFAULT_LONGITUDE: f64 = 30.0619;

/// Weather shown until the first lookup succeeds
pub const DEFAULT_TEMPERATURE_C: f64 = 22.0;
pub const DEFAULT_CONDITION: &str = "Partly cloudy";

/// Title of the toast raised when a weather lookup fails
pub const WEATHER_ERROR_TITLE: &str = "Error fetching weather data";
