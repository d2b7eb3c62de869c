//! Resolved activity options and the final trip plan

use std::fmt;

use serde::{Deserialize, Serialize};

use super::WeatherDescriptor;

/// A concrete, human-readable recommendation such as "Visit City Museum"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityOption(String);

impl ActivityOption {
    #[must_use]
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActivityOption {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ActivityOption {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<&str> for ActivityOption {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Output of one planning run. Built once and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    itinerary: String,
    current_weather: Option<WeatherDescriptor>,
    activity_options: Vec<ActivityOption>,
}

impl TripPlan {
    #[must_use]
    pub fn new(
        itinerary: String,
        current_weather: Option<WeatherDescriptor>,
        activity_options: Vec<ActivityOption>,
    ) -> Self {
        Self {
            itinerary,
            current_weather,
            activity_options,
        }
    }

    #[must_use]
    pub fn itinerary(&self) -> &str {
        &self.itinerary
    }

    #[must_use]
    pub fn current_weather(&self) -> Option<&WeatherDescriptor> {
        self.current_weather.as_ref()
    }

    #[must_use]
    pub fn activity_options(&self) -> &[ActivityOption] {
        &self.activity_options
    }
}
