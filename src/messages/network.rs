//! Network messages - communication between App and Network layers

use crate::models::{Coordinate, WeatherReading};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Look up current weather at a coordinate
    FetchWeather {
        id: u64,
        coordinate: Coordinate,
    },
    /// Abort outstanding lookups and stop the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// Lookup succeeded with a well-formed payload
    WeatherUpdated {
        id: u64,
        reading: WeatherReading,
    },
    /// Transport error, non-success status or malformed payload
    WeatherFailed {
        id: u64,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::WeatherUpdated { id, .. } => *id,
            NetworkResponse::WeatherFailed { id, .. } => *id,
        }
    }
}
