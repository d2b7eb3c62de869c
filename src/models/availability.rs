//! Venue and live-event availability records

use serde::{Deserialize, Serialize};

/// A museum or gallery and its current booking state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub name: String,
    pub is_open: bool,
    pub has_tickets: bool,
    /// City the venue belongs to; `None` means it is offered everywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl VenueRecord {
    #[must_use]
    pub fn new<S: Into<String>>(name: S, is_open: bool, has_tickets: bool) -> Self {
        Self {
            name: name.into(),
            is_open,
            has_tickets,
            city: None,
        }
    }

    /// Scope the venue to a single city
    #[must_use]
    pub fn in_city<S: Into<String>>(mut self, city: S) -> Self {
        self.city = Some(city.into());
        self
    }

    /// A venue can be booked only when it is open and still has tickets
    #[must_use]
    pub fn is_bookable(&self) -> bool {
        self.is_open && self.has_tickets
    }

    #[must_use]
    pub fn applies_to(&self, city: &str) -> bool {
        applies_to(self.city.as_deref(), city)
    }
}

/// A scheduled live event and whether seats are left
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl EventRecord {
    #[must_use]
    pub fn new<S: Into<String>>(name: S, is_available: bool) -> Self {
        Self {
            name: name.into(),
            is_available,
            city: None,
        }
    }

    #[must_use]
    pub fn in_city<S: Into<String>>(mut self, city: S) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn applies_to(&self, city: &str) -> bool {
        applies_to(self.city.as_deref(), city)
    }
}

fn applies_to(scope: Option<&str>, city: &str) -> bool {
    match scope {
        Some(scope) => scope.trim().eq_ignore_ascii_case(city.trim()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_bookable_needs_both_flags() {
        assert!(VenueRecord::new("City Museum", true, true).is_bookable());
        assert!(!VenueRecord::new("Art Gallery", false, false).is_bookable());
        assert!(!VenueRecord::new("Closed Gallery", false, true).is_bookable());
        assert!(!VenueRecord::new("Sold Out Museum", true, false).is_bookable());
    }

    #[test]
    fn test_unscoped_records_apply_everywhere() {
        let venue = VenueRecord::new("City Museum", true, true);
        assert!(venue.applies_to("Barcelona"));
        assert!(venue.applies_to("Lisbon"));
    }

    #[test]
    fn test_scoped_records_match_city_case_insensitively() {
        let event = EventRecord::new("Fado Night", true).in_city("Lisbon");
        assert!(event.applies_to("lisbon"));
        assert!(event.applies_to(" LISBON "));
        assert!(!event.applies_to("Porto"));
    }
}
