//! Client for the upstream weather forecast API.
//!
//! One outbound `GET /api/forecast/city/{code}` per call; no retry and
//! no caching. A 10-second client timeout bounds hung upstreams.

use std::time::Duration;

use serde::Deserialize;
use tunecast_core::error::CoreError;

/// Date label the upstream attaches to the current day's entry.
const TODAY_LABEL: &str = "今日";

/// HTTP client for the forecast API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

/// Response shape of the forecast endpoint. Only the fields we consume
/// are modelled.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    forecasts: Vec<ForecastEntry>,
}

/// One day's forecast, tagged with a relative date label.
#[derive(Debug, Deserialize)]
struct ForecastEntry {
    #[serde(rename = "dateLabel")]
    date_label: String,
    /// Short weather description (e.g. "晴れ").
    telop: String,
}

/// Errors from the forecast API layer.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The HTTP request failed (network, DNS, TLS, timeout) or the
    /// body could not be decoded as the expected JSON.
    #[error("Forecast request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Forecast API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<WeatherError> for CoreError {
    fn from(err: WeatherError) -> Self {
        CoreError::Upstream(err.to_string())
    }
}

impl WeatherClient {
    /// Create a client for the forecast API at `base_url`.
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch today's weather description for a location code.
    ///
    /// Returns `Ok(None)` when the upstream answered with a valid
    /// forecast list that has no entry for today. Transport failures,
    /// non-2xx statuses, and unparseable bodies are hard errors.
    pub async fn fetch_today(&self, city_code: &str) -> Result<Option<String>, WeatherError> {
        let url = format!("{}/api/forecast/city/{city_code}", self.base_url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let forecast: ForecastResponse = response.json().await?;

        Ok(forecast
            .forecasts
            .into_iter()
            .find(|entry| entry.date_label == TODAY_LABEL)
            .map(|entry| entry.telop))
    }
}
