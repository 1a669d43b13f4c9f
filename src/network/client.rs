//! Weather HTTP client - builds the lookup and validates the payload

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;
use crate::models::{Coordinate, WeatherReading};

/// Every way a lookup can fail. The UI treats them all the same.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout,
    #[error("Connection failed: {0}")]
    Connect(reqwest::Error),
    #[error("Request failed: {0}")]
    Transport(reqwest::Error),
    #[error("Network response was not ok")]
    Status(u16),
    #[error("Malformed weather payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    /// The request URL carries the API key, so it never reaches the message
    fn from(e: reqwest::Error) -> Self {
        let e = e.without_url();
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connect(e)
        } else {
            FetchError::Transport(e)
        }
    }
}

#[derive(Deserialize)]
struct CurrentPayload {
    current: Current,
}

#[derive(Deserialize)]
struct Current {
    temp_c: f64,
    condition: Condition,
}

#[derive(Deserialize)]
struct Condition {
    text: String,
}

/// Extract `current.temp_c` and `current.condition.text`; other fields are ignored
pub fn parse_current(body: &[u8]) -> Result<WeatherReading, FetchError> {
    let payload: CurrentPayload = serde_json::from_slice(body)?;
    Ok(WeatherReading::new(
        payload.current.temp_c,
        payload.current.condition.text,
    ))
}

/// Current-conditions client for a weatherapi.com compatible endpoint
#[derive(Clone, Debug)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Self {
        WeatherClient {
            client: create_client(config.request_timeout()),
            base_url: config.weather_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/current.json", self.base_url)
    }

    /// One GET, no retry
    pub async fn current(&self, coordinate: Coordinate) -> Result<WeatherReading, FetchError> {
        let q = coordinate.as_query();
        let resp = self
            .client
            .get(self.endpoint())
            .query(&[("key", self.api_key.as_str()), ("q", q.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        parse_current(&body)
    }
}

/// Create an HTTP client with the given request timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
