//! Current-weather lookup

use async_trait::async_trait;

use crate::models::WeatherDescriptor;

pub mod wttr;

pub use wttr::WttrWeatherClient;

/// Resolves a city to its current weather.
///
/// Implementations never fail outward: any lookup problem is reported as
/// [`WeatherDescriptor::unknown`].
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current_weather(&self, city: &str) -> WeatherDescriptor;
}

/// Weather source that always reports the same condition
#[derive(Debug, Clone)]
pub struct FixedWeather(pub WeatherDescriptor);

#[async_trait]
impl WeatherSource for FixedWeather {
    async fn current_weather(&self, _city: &str) -> WeatherDescriptor {
        self.0.clone()
    }
}
