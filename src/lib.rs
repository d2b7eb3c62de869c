//! `TripPlanner` - weather-aware city itineraries from free-text preferences
//!
//! This library classifies activity preferences, resolves them against
//! venue, event and weather data, guarantees a non-empty result and writes
//! a multi-day itinerary from what survived.

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod fallback;
pub mod logging;
pub mod models;
pub mod narrative;
pub mod planner;
pub mod resolver;
pub mod sources;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use classifier::{ClassificationTag, classify};
pub use config::TripPlannerConfig;
pub use error::TripPlannerError;
pub use fallback::apply_fallback;
pub use models::{ActivityOption, EventRecord, TripPlan, VenueRecord, WeatherDescriptor};
pub use narrative::{ItineraryContext, ItinerarySynthesizer, NarrativeGenerator};
pub use planner::TripPlanner;
pub use resolver::{AvailabilitySnapshot, Resolution, resolve};
pub use sources::{EventSource, VenueSource};
pub use weather::WeatherSource;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripPlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
