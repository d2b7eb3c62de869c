//! Activity resolution
//!
//! Turns one classified preference into at most one concrete recommendation
//! by reading the availability data and weather fetched for the run. No I/O
//! happens here, so the same snapshot always yields the same answer.

use tracing::debug;

use crate::classifier::{ClassificationTag, classify};
use crate::models::{ActivityOption, EventRecord, VenueRecord, WeatherDescriptor};

/// Recommendation emitted for outdoor preferences when the weather allows
pub const OUTDOOR_TOUR: &str = "Outdoor walking tour";

/// Read-only view of everything fetched for one planning run
#[derive(Debug, Clone, Default)]
pub struct AvailabilitySnapshot {
    pub venues: Vec<VenueRecord>,
    pub events: Vec<EventRecord>,
    pub weather: WeatherDescriptor,
}

impl AvailabilitySnapshot {
    #[must_use]
    pub fn new(
        venues: Vec<VenueRecord>,
        events: Vec<EventRecord>,
        weather: WeatherDescriptor,
    ) -> Self {
        Self {
            venues,
            events,
            weather,
        }
    }

    /// Classify and resolve a preference against this snapshot
    #[must_use]
    pub fn resolve(&self, preference: &str) -> Option<ActivityOption> {
        self.resolution(preference).option
    }

    /// Like [`resolve`](Self::resolve), but keeps the preference and its tag
    /// next to the outcome
    #[must_use]
    pub fn resolution(&self, preference: &str) -> Resolution {
        let tag = classify(preference);
        let option = resolve(preference, tag, &self.venues, &self.events, &self.weather);

        match &option {
            Some(option) => debug!(preference, %tag, %option, "Preference resolved"),
            None => debug!(preference, %tag, "Preference dropped, nothing available"),
        }

        Resolution {
            preference: preference.to_string(),
            tag,
            option,
        }
    }
}

/// What one preference turned into during a planning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub preference: String,
    pub tag: ClassificationTag,
    pub option: Option<ActivityOption>,
}

/// Resolve a preference that has already been classified.
///
/// Venues and events are scanned in the order the source returned them and
/// the first match is taken. Generic preferences pass through unchanged.
#[must_use]
pub fn resolve(
    preference: &str,
    tag: ClassificationTag,
    venues: &[VenueRecord],
    events: &[EventRecord],
    weather: &WeatherDescriptor,
) -> Option<ActivityOption> {
    match tag {
        ClassificationTag::Museum => venues
            .iter()
            .find(|venue| venue.is_bookable())
            .map(|venue| ActivityOption::new(format!("Visit {}", venue.name))),
        ClassificationTag::LiveEvent => events
            .iter()
            .find(|event| event.is_available)
            .map(|event| ActivityOption::new(format!("Attend {}", event.name))),
        ClassificationTag::Outdoor => {
            if weather.is_precipitation() {
                None
            } else {
                Some(ActivityOption::new(OUTDOOR_TOUR))
            }
        }
        ClassificationTag::Generic => Some(ActivityOption::new(preference)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venues() -> Vec<VenueRecord> {
        vec![
            VenueRecord::new("City Museum", true, true),
            VenueRecord::new("Art Gallery", false, false),
        ]
    }

    fn events() -> Vec<EventRecord> {
        vec![
            EventRecord::new("Jazz Night", true),
            EventRecord::new("Rock Concert", false),
        ]
    }

    fn sunny() -> WeatherDescriptor {
        WeatherDescriptor::new("Sunny")
    }

    #[test]
    fn test_museum_picks_first_bookable_venue() {
        let option = resolve("museums", ClassificationTag::Museum, &venues(), &[], &sunny());
        assert_eq!(option, Some(ActivityOption::new("Visit City Museum")));
    }

    #[test]
    fn test_museum_skips_unbookable_venues_in_order() {
        let venues = vec![
            VenueRecord::new("Closed Museum", false, true),
            VenueRecord::new("Sold Out Museum", true, false),
            VenueRecord::new("Maritime Museum", true, true),
            VenueRecord::new("Later Museum", true, true),
        ];
        let option = resolve("museums", ClassificationTag::Museum, &venues, &[], &sunny());
        assert_eq!(option, Some(ActivityOption::new("Visit Maritime Museum")));
    }

    #[test]
    fn test_museum_without_bookable_venue_is_dropped() {
        let venues = vec![VenueRecord::new("Art Gallery", false, false)];
        assert_eq!(
            resolve("museums", ClassificationTag::Museum, &venues, &events(), &sunny()),
            None
        );
    }

    #[test]
    fn test_live_event_picks_first_available() {
        let option = resolve("music events", ClassificationTag::LiveEvent, &[], &events(), &sunny());
        assert_eq!(option, Some(ActivityOption::new("Attend Jazz Night")));
    }

    #[test]
    fn test_live_event_without_seats_is_dropped() {
        let events = vec![EventRecord::new("Rock Concert", false)];
        assert_eq!(
            resolve("concerts", ClassificationTag::LiveEvent, &venues(), &events, &sunny()),
            None
        );
    }

    #[test]
    fn test_outdoor_in_good_weather() {
        let option = resolve("walking tours", ClassificationTag::Outdoor, &[], &[], &sunny());
        assert_eq!(option, Some(ActivityOption::new(OUTDOOR_TOUR)));
    }

    #[test]
    fn test_outdoor_gated_by_rain_or_snow() {
        for weather in ["Rain", "rain", "Snow"] {
            let weather = WeatherDescriptor::new(weather);
            assert_eq!(
                resolve("walking tours", ClassificationTag::Outdoor, &[], &[], &weather),
                None
            );
        }
    }

    #[test]
    fn test_outdoor_not_gated_by_unknown_weather() {
        let option = resolve(
            "walking tours",
            ClassificationTag::Outdoor,
            &[],
            &[],
            &WeatherDescriptor::unknown(),
        );
        assert!(option.is_some());
    }

    #[test]
    fn test_generic_passes_through_unchanged() {
        let option = resolve(
            "coffee shops",
            ClassificationTag::Generic,
            &[],
            &[],
            &WeatherDescriptor::new("Rain"),
        );
        assert_eq!(option, Some(ActivityOption::new("coffee shops")));
    }

    #[test]
    fn test_snapshot_resolution_is_repeatable() {
        let snapshot = AvailabilitySnapshot::new(venues(), events(), sunny());
        for preference in ["museums", "coffee shops", "walking tours", "music events"] {
            assert_eq!(snapshot.resolve(preference), snapshot.resolve(preference));
        }
    }

    #[test]
    fn test_resolution_keeps_preference_and_tag() {
        let snapshot = AvailabilitySnapshot::new(
            vec![VenueRecord::new("Art Gallery", false, false)],
            events(),
            sunny(),
        );

        let dropped = snapshot.resolution("museums");
        assert_eq!(dropped.preference, "museums");
        assert_eq!(dropped.tag, ClassificationTag::Museum);
        assert_eq!(dropped.option, None);

        let passed = snapshot.resolution("Visit the old town");
        assert_eq!(passed.tag, ClassificationTag::Generic);
        assert_eq!(passed.option, Some(ActivityOption::new("Visit the old town")));
    }

    #[test]
    fn test_snapshot_classifies_before_resolving() {
        let snapshot = AvailabilitySnapshot::new(venues(), events(), sunny());
        assert_eq!(
            snapshot.resolve("Jazz concert tonight"),
            Some(ActivityOption::new("Attend Jazz Night"))
        );
    }
}
