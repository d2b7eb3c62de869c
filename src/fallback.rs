//! Fallback policy guaranteeing a non-empty plan

use tracing::info;

use crate::models::{ActivityOption, WeatherDescriptor};

pub const INDOOR_DEFAULT: &str = "Read a book";
pub const OUTDOOR_DEFAULT: &str = "Go for a walk";

/// Return `options` untouched when non-empty, otherwise a single
/// weather-appropriate default. Applied once to the whole result set.
#[must_use]
pub fn apply_fallback(
    mut options: Vec<ActivityOption>,
    weather: &WeatherDescriptor,
) -> Vec<ActivityOption> {
    if !options.is_empty() {
        return options;
    }

    let default = if weather.favours_indoors() {
        INDOOR_DEFAULT
    } else {
        OUTDOOR_DEFAULT
    };
    info!(%weather, default, "No preference produced an activity, using fallback");

    options.push(ActivityOption::new(default));
    options
}
