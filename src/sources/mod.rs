//! Venue and live-event availability sources
//!
//! Sources return records in their natural order. Callers pick the first
//! match, so implementations must not reshuffle results between calls.

use async_trait::async_trait;

use crate::Result;
use crate::models::{EventRecord, VenueRecord};

pub mod catalog;

pub use catalog::{CatalogEventSource, CatalogVenueSource};

/// Open/ticketed status for museums and galleries
#[async_trait]
pub trait VenueSource: Send + Sync {
    async fn venues(&self, city: &str) -> Result<Vec<VenueRecord>>;
}

/// Live-event schedule and seat availability
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn events(&self, city: &str) -> Result<Vec<EventRecord>>;
}
