//! Normalized current-weather descriptor

use std::fmt;

use serde::{Deserialize, Serialize};

/// Short human-readable weather condition such as "Sunny" or "Light rain".
///
/// `"Unknown"` is a regular value: it is what a failed or incomplete lookup
/// produces, and it never gates anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherDescriptor(String);

impl WeatherDescriptor {
    pub const UNKNOWN: &'static str = "Unknown";

    /// Create a descriptor, collapsing blank input to `"Unknown"`
    #[must_use]
    pub fn new<S: Into<String>>(description: S) -> Self {
        let description = description.into();
        let trimmed = description.trim();
        if trimmed.is_empty() {
            Self::unknown()
        } else {
            Self(trimmed.to_string())
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the condition is exactly rain or snow (case-insensitive).
    /// Outdoor tours are skipped in that case.
    #[must_use]
    pub fn is_precipitation(&self) -> bool {
        let normalized = self.0.to_lowercase();
        normalized == "rain" || normalized == "snow"
    }

    /// True when the condition mentions rain anywhere or is exactly snow.
    /// Picks the indoor default when nothing else could be planned.
    #[must_use]
    pub fn favours_indoors(&self) -> bool {
        let normalized = self.0.to_lowercase();
        normalized.contains("rain") || normalized == "snow"
    }
}

impl Default for WeatherDescriptor {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for WeatherDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WeatherDescriptor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WeatherDescriptor {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
