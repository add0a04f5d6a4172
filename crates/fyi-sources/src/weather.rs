//! Current weather for the caller's location.
//!
//! [`WeatherApiClient`] talks to a weatherapi.com-compatible provider with
//! `reqwest`. The dashboard loop is synchronous, so [`BlockingWeatherSource`]
//! owns a current-thread tokio runtime and blocks on each request.
//!
//! ## Example
//!
//! ```no_run
//! use fyi_core::WeatherConfig;
//! use fyi_sources::{BlockingWeatherSource, WeatherSource};
//!
//! # fn example() -> fyi_sources::Result<()> {
//! let config = WeatherConfig::default();
//! let mut source = BlockingWeatherSource::new(&config, "my-api-key")?;
//! let sample = source.fetch_current(&config.location)?;
//! println!("{} {:.1} °C", sample.location_name, sample.temperature_celsius);
//! # Ok(())
//! # }
//! ```

use fyi_core::WeatherConfig;
use tracing::debug;

use crate::error::{Result, SourceError};
use crate::weather_types::{ApiErrorResponse, CurrentResponse};

/// Longest error body kept in [`SourceError::Status`].
const MAX_ERROR_BODY_LEN: usize = 200;

/// Current conditions at one location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSample {
    pub location_name: String,
    pub temperature_celsius: f64,
    /// Provider-defined condition code (1000 is clear)
    pub condition_code: u32,
    pub is_daytime: bool,
}

impl TryFrom<CurrentResponse> for WeatherSample {
    type Error = SourceError;

    fn try_from(response: CurrentResponse) -> Result<Self> {
        let location_name = response.location.name.trim().to_string();
        if location_name.is_empty() {
            return Err(SourceError::InvalidPayload(
                "location name is empty".to_string(),
            ));
        }
        if !response.current.temp_c.is_finite() {
            return Err(SourceError::InvalidPayload(
                "temperature is not finite".to_string(),
            ));
        }

        Ok(Self {
            location_name,
            temperature_celsius: response.current.temp_c,
            condition_code: response.current.condition.code,
            is_daytime: response.current.is_day == 1,
        })
    }
}

/// Something that can fetch current weather on demand.
pub trait WeatherSource {
    /// Fetch current conditions for `location` (e.g. `auto:ip`).
    /// Blocks until the request completes or times out.
    fn fetch_current(&mut self, location: &str) -> Result<WeatherSample>;
}

/// Async client for the provider's `current.json` endpoint.
pub struct WeatherApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    /// Create a client from config with the given API key.
    pub fn new(config: &WeatherConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SourceError::ClientSetup(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// The `current.json` URL requests go to.
    pub fn endpoint(&self) -> String {
        format!("{}/current.json", self.base_url)
    }

    /// Fetch and decode current conditions.
    pub async fn fetch_current(&self, location: &str) -> Result<WeatherSample> {
        let endpoint = self.endpoint();
        debug!(%endpoint, location, "requesting current weather");

        let response = self
            .client
            .get(&endpoint)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: error_message(&body),
            });
        }

        let decoded: CurrentResponse = serde_json::from_str(&body)?;
        WeatherSample::try_from(decoded)
    }
}

/// Pull the provider's message out of an error body, or fall back to a
/// truncated copy of the raw text.
fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
        return format!("{} (code {})", parsed.error.message, parsed.error.code);
    }
    body.chars().take(MAX_ERROR_BODY_LEN).collect()
}

/// [`WeatherSource`] that drives a [`WeatherApiClient`] on its own runtime.
pub struct BlockingWeatherSource {
    runtime: tokio::runtime::Runtime,
    client: WeatherApiClient,
}

impl BlockingWeatherSource {
    /// Create a blocking source from config with the given API key.
    ///
    /// Must not be called from inside another tokio runtime.
    pub fn new(config: &WeatherConfig, api_key: impl Into<String>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SourceError::ClientSetup(format!("tokio runtime: {e}")))?;
        let client = WeatherApiClient::new(config, api_key)?;
        Ok(Self { runtime, client })
    }
}

impl WeatherSource for BlockingWeatherSource {
    fn fetch_current(&mut self, location: &str) -> Result<WeatherSample> {
        self.runtime.block_on(self.client.fetch_current(location))
    }
}
