//! Trip planning orchestration
//!
//! One run: fetch weather, venues and events concurrently, resolve every
//! preference against that snapshot, apply the fallback, then synthesize.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::{info, instrument, warn};

use crate::config::TripPlannerConfig;
use crate::fallback::apply_fallback;
use crate::models::TripPlan;
use crate::narrative::{
    ItineraryContext, ItinerarySynthesizer, NarrativeGenerator, OpenAiNarrator, TemplateNarrator,
};
use crate::resolver::{AvailabilitySnapshot, Resolution};
use crate::sources::{CatalogEventSource, CatalogVenueSource, EventSource, VenueSource};
use crate::weather::{WeatherSource, WttrWeatherClient};

/// Coordinates the data sources, resolution and synthesis.
///
/// Holds only shared, read-only collaborators, so one planner can serve
/// many concurrent runs.
#[derive(Clone)]
pub struct TripPlanner {
    weather: Arc<dyn WeatherSource>,
    venues: Arc<dyn VenueSource>,
    events: Arc<dyn EventSource>,
    synthesizer: ItinerarySynthesizer,
}

impl TripPlanner {
    pub fn new(
        weather: Arc<dyn WeatherSource>,
        venues: Arc<dyn VenueSource>,
        events: Arc<dyn EventSource>,
        narrator: Arc<dyn NarrativeGenerator>,
    ) -> Self {
        Self {
            weather,
            venues,
            events,
            synthesizer: ItinerarySynthesizer::new(narrator),
        }
    }

    /// Build a planner with the collaborators selected in configuration
    pub fn from_config(config: &TripPlannerConfig) -> crate::Result<Self> {
        let weather = Arc::new(WttrWeatherClient::new(&config.weather)?);
        let venues = Arc::new(CatalogVenueSource::from_config(&config.catalog));
        let events = Arc::new(CatalogEventSource::from_config(&config.catalog));
        let narrator: Arc<dyn NarrativeGenerator> = match config.narrative.provider.as_str() {
            "openai" => Arc::new(OpenAiNarrator::new(&config.narrative)?),
            _ => Arc::new(TemplateNarrator),
        };

        info!(
            narrative = %config.narrative.provider,
            venues = config.catalog.venues.len(),
            events = config.catalog.events.len(),
            "Trip planner ready"
        );
        Ok(Self::new(weather, venues, events, narrator))
    }

    /// Plan a trip. Always succeeds: degraded upstreams fall back to
    /// "Unknown" weather or empty availability, and the result always
    /// carries at least one activity option.
    #[instrument(skip(self, preferences), fields(preferences = preferences.len()))]
    pub async fn plan_trip(&self, city: &str, preferences: &[String]) -> TripPlan {
        info!(?preferences, "Planning trip");
        let start_time = Instant::now();

        let snapshot = self.fetch_snapshot(city).await;
        let view = &snapshot;

        // join_all yields results in input order
        let resolutions: Vec<Resolution> = join_all(
            preferences
                .iter()
                .map(|preference| async move { view.resolution(preference) }),
        )
        .await;
        let options = apply_fallback(
            resolutions.iter().filter_map(|r| r.option.clone()).collect(),
            &snapshot.weather,
        );

        let context = ItineraryContext::new(city, &snapshot.weather, preferences, &options)
            .with_resolutions(resolutions);
        let itinerary = self.synthesizer.synthesize_context(&context).await;

        info!(
            weather = %snapshot.weather,
            options = ?options,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Trip planned"
        );

        TripPlan::new(itinerary, Some(snapshot.weather), options)
    }

    /// Fetch weather, venues and events concurrently
    async fn fetch_snapshot(&self, city: &str) -> AvailabilitySnapshot {
        let (weather, venues, events) = tokio::join!(
            self.weather.current_weather(city),
            self.venues.venues(city),
            self.events.events(city),
        );

        let venues = venues.unwrap_or_else(|e| {
            warn!(city, error = %e, "Venue availability unavailable, continuing without venues");
            Vec::new()
        });
        let events = events.unwrap_or_else(|e| {
            warn!(city, error = %e, "Live events unavailable, continuing without events");
            Vec::new()
        });

        AvailabilitySnapshot::new(venues, events, weather)
    }
}
