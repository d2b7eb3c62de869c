//! Preference classification
//!
//! Routes a free-text preference to the data source that can resolve it.
//! Rules are checked top to bottom and the first keyword hit wins, so a
//! preference mentioning both a museum and a show is treated as a museum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category a preference is resolved under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationTag {
    Museum,
    LiveEvent,
    Outdoor,
    Generic,
}

impl fmt::Display for ClassificationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassificationTag::Museum => "museum",
            ClassificationTag::LiveEvent => "live-event",
            ClassificationTag::Outdoor => "outdoor",
            ClassificationTag::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Ordered keyword rules. Order is precedence.
const RULES: &[(ClassificationTag, &[&str])] = &[
    (ClassificationTag::Museum, &["museum"]),
    (
        ClassificationTag::LiveEvent,
        &[
            "music", "concert", "comedy", "theater", "play", "live", "show", "event",
        ],
    ),
    (ClassificationTag::Outdoor, &["walking"]),
];

/// Classify a preference by case-insensitive keyword match
#[must_use]
pub fn classify(preference: &str) -> ClassificationTag {
    let normalized = preference.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map_or(ClassificationTag::Generic, |(tag, _)| *tag)
}
