//! Data models for the trip planner
//!
//! This module contains the core domain models organized by concern:
//! - Weather: the normalized current-weather descriptor
//! - Availability: venue and live-event records from the data sources
//! - Plan: resolved activity options and the final trip plan

pub mod availability;
pub mod plan;
pub mod weather;

// Re-export all public types for convenient access
pub use availability::{EventRecord, VenueRecord};
pub use plan::{ActivityOption, TripPlan};
pub use weather::WeatherDescriptor;
