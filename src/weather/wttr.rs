//! wttr.in client
//!
//! Uses the `?format=j1` JSON endpoint and keeps only the first current
//! condition description.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

use super::WeatherSource;
use crate::config::WeatherConfig;
use crate::models::WeatherDescriptor;
use crate::{Result, TripPlannerError};

/// Weather client for wttr.in compatible endpoints
#[derive(Debug, Clone)]
pub struct WttrWeatherClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl WttrWeatherClient {
    /// Create a new weather client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tripplanner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TripPlannerError::config(format!("Failed to create HTTP client: {e}")))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(http)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request URL for a city
    #[must_use]
    pub fn url_for(&self, city: &str) -> String {
        format!(
            "{}/{}?format=j1",
            self.base_url,
            urlencoding::encode(city.trim())
        )
    }

    /// Fetch and parse the current condition, propagating every failure
    #[instrument(skip(self))]
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherDescriptor> {
        let url = self.url_for(city);
        debug!("wttr.in request URL: {}", url);
        let start_time = Instant::now();

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TripPlannerError::api(format!(
                "Weather API request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        let report: WttrResponse = response.json().await.map_err(|e| {
            TripPlannerError::api(format!("Failed to parse wttr.in response: {e}"))
        })?;

        let total_duration = start_time.elapsed();
        if total_duration.as_secs() > 5 {
            warn!(
                "Slow weather API response: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        report
            .description()
            .map(WeatherDescriptor::new)
            .ok_or_else(|| TripPlannerError::api("No current condition in wttr.in response"))
    }
}

#[async_trait]
impl WeatherSource for WttrWeatherClient {
    async fn current_weather(&self, city: &str) -> WeatherDescriptor {
        match self.fetch_current(city).await {
            Ok(weather) => {
                debug!(city, %weather, "Weather data retrieved");
                weather
            }
            Err(e) => {
                error!(city, error = %e, "Failed to fetch weather data");
                WeatherDescriptor::unknown()
            }
        }
    }
}

/// The subset of the j1 payload we read
#[derive(Debug, Deserialize)]
pub(crate) struct WttrResponse {
    #[serde(default)]
    current_condition: Vec<CurrentCondition>,
}

#[derive(Debug, Deserialize)]
struct CurrentCondition {
    #[serde(rename = "weatherDesc", default)]
    weather_desc: Vec<DescriptionValue>,
}

#[derive(Debug, Deserialize)]
struct DescriptionValue {
    value: String,
}

impl WttrResponse {
    fn description(&self) -> Option<&str> {
        self.current_condition
            .first()?
            .weather_desc
            .first()
            .map(|d| d.value.as_str())
            .filter(|value| !value.trim().is_empty())
    }
}
