//! Sources backed by the static catalog from configuration

use async_trait::async_trait;
use tracing::debug;

use super::{EventSource, VenueSource};
use crate::Result;
use crate::config::CatalogConfig;
use crate::models::{EventRecord, VenueRecord};

/// Serves the configured venues that apply to the requested city
#[derive(Debug, Clone, Default)]
pub struct CatalogVenueSource {
    venues: Vec<VenueRecord>,
}

impl CatalogVenueSource {
    #[must_use]
    pub fn new(venues: Vec<VenueRecord>) -> Self {
        Self { venues }
    }

    #[must_use]
    pub fn from_config(catalog: &CatalogConfig) -> Self {
        Self::new(catalog.venues.clone())
    }
}

#[async_trait]
impl VenueSource for CatalogVenueSource {
    async fn venues(&self, city: &str) -> Result<Vec<VenueRecord>> {
        debug!(city, "Fetching venue availability");
        Ok(self
            .venues
            .iter()
            .filter(|venue| venue.applies_to(city))
            .cloned()
            .collect())
    }
}

/// Serves the configured events that apply to the requested city
#[derive(Debug, Clone, Default)]
pub struct CatalogEventSource {
    events: Vec<EventRecord>,
}

impl CatalogEventSource {
    #[must_use]
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self { events }
    }

    #[must_use]
    pub fn from_config(catalog: &CatalogConfig) -> Self {
        Self::new(catalog.events.clone())
    }
}

#[async_trait]
impl EventSource for CatalogEventSource {
    async fn events(&self, city: &str) -> Result<Vec<EventRecord>> {
        debug!(city, "Fetching live events");
        Ok(self
            .events
            .iter()
            .filter(|event| event.applies_to(city))
            .cloned()
            .collect())
    }
}
