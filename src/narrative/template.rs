//! Offline itinerary writer
//!
//! Lays the options out over three days, highest priority first, and
//! attaches a short reason to each stop. Output is deterministic.

use std::fmt::Write;

use async_trait::async_trait;

use super::{ItineraryContext, NarrativeGenerator};
use crate::Result;
use crate::classifier::ClassificationTag;
use crate::fallback::{INDOOR_DEFAULT, OUTDOOR_DEFAULT};
use crate::models::ActivityOption;

pub const TRIP_DAYS: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    /// Options for each day. Option `i` lands on day `i % 3`, so every day
    /// opens with one of the top-priority picks.
    #[must_use]
    pub fn schedule(options: &[ActivityOption]) -> [Vec<&ActivityOption>; TRIP_DAYS] {
        let mut days: [Vec<&ActivityOption>; TRIP_DAYS] = Default::default();
        for (index, option) in options.iter().enumerate() {
            days[index % TRIP_DAYS].push(option);
        }
        days
    }

    /// Tag of the preference that produced `option`, if it was tracked
    fn source_tag(context: &ItineraryContext, option: &ActivityOption) -> Option<ClassificationTag> {
        context
            .resolutions
            .iter()
            .find(|resolution| resolution.option.as_ref() == Some(option))
            .map(|resolution| resolution.tag)
    }

    fn reason(context: &ItineraryContext, option: &ActivityOption) -> String {
        match Self::source_tag(context, option) {
            Some(ClassificationTag::Museum) => {
                "open with tickets available, so it is a safe anchor for the day".to_string()
            }
            Some(ClassificationTag::LiveEvent) => "seats are still available, book early".to_string(),
            Some(ClassificationTag::Outdoor) => format!(
                "the current weather ({}) is fine for being outside",
                context.weather
            ),
            Some(ClassificationTag::Generic) => "taken straight from your preferences".to_string(),
            None if option == &INDOOR_DEFAULT || option == &OUTDOOR_DEFAULT => {
                "nothing on your list was available, so here is a relaxed default".to_string()
            }
            None => "picked for your preferences".to_string(),
        }
    }

    /// Preferences that produced no option, in preference order
    fn unavailable(context: &ItineraryContext) -> Vec<&str> {
        context
            .resolutions
            .iter()
            .filter(|resolution| resolution.option.is_none())
            .map(|resolution| resolution.preference.as_str())
            .collect()
    }

    fn alternatives(context: &ItineraryContext) -> Vec<String> {
        let mut alternatives = Vec::new();
        if context.weather.favours_indoors() {
            alternatives.push(
                "Wet weather is likely: keep a cafe or covered market in reserve.".to_string(),
            );
        } else if context.weather.is_unknown() {
            alternatives
                .push("The forecast is unavailable: keep one indoor option in reserve.".to_string());
        } else {
            alternatives.push(format!(
                "Good conditions ({}): add a park or viewpoint between stops.",
                context.weather
            ));
        }

        let missing = Self::unavailable(context);
        if !missing.is_empty() {
            alternatives.push(format!(
                "Some of your interests ({}) had nothing available right now; check again closer to the date.",
                missing.join(", ")
            ));
        }
        alternatives
    }

    #[must_use]
    pub fn render(context: &ItineraryContext) -> String {
        let mut text = String::new();
        let _ = writeln!(
            text,
            "{TRIP_DAYS}-day itinerary for {} (weather: {})",
            context.city, context.weather
        );

        for (day, stops) in Self::schedule(&context.options).iter().enumerate() {
            let _ = writeln!(text, "\nDay {}", day + 1);
            if stops.is_empty() {
                let _ = writeln!(
                    text,
                    "- Free time to explore {} at your own pace.",
                    context.city
                );
            }
            for stop in stops {
                let _ = writeln!(text, "- {stop}: {}.", Self::reason(context, stop));
            }
        }

        let _ = writeln!(text, "\nAlternatives");
        for alternative in Self::alternatives(context) {
            let _ = writeln!(text, "- {alternative}");
        }

        text
    }
}

#[async_trait]
impl NarrativeGenerator for TemplateNarrator {
    async fn generate(&self, context: &ItineraryContext) -> Result<Option<String>> {
        Ok(Some(Self::render(context)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::fallback::apply_fallback;
    use crate::models::WeatherDescriptor;
    use crate::resolver::{OUTDOOR_TOUR, Resolution};

    /// Context built from `(preference, resolved option)` pairs, with the
    /// fallback applied the way a planning run does
    fn context(weather: &str, outcomes: &[(&str, Option<&str>)]) -> ItineraryContext {
        let weather = WeatherDescriptor::new(weather);
        let resolutions: Vec<Resolution> = outcomes
            .iter()
            .map(|(preference, option)| Resolution {
                preference: preference.to_string(),
                tag: classify(preference),
                option: option.map(ActivityOption::from),
            })
            .collect();
        let preferences: Vec<String> = resolutions.iter().map(|r| r.preference.clone()).collect();
        let options = apply_fallback(
            resolutions.iter().filter_map(|r| r.option.clone()).collect(),
            &weather,
        );

        ItineraryContext::new("Barcelona", &weather, &preferences, &options)
            .with_resolutions(resolutions)
    }

    #[test]
    fn test_schedule_round_robin() {
        let options: Vec<ActivityOption> = ["a", "b", "c", "d"]
            .into_iter()
            .map(ActivityOption::from)
            .collect();
        let days = TemplateNarrator::schedule(&options);
        assert_eq!(days[0], vec![&options[0], &options[3]]);
        assert_eq!(days[1], vec![&options[1]]);
        assert_eq!(days[2], vec![&options[2]]);
    }

    #[test]
    fn test_render_covers_three_days() {
        let text = TemplateNarrator::render(&context(
            "Sunny",
            &[
                ("museums", Some("Visit City Museum")),
                ("walking tours", Some(OUTDOOR_TOUR)),
            ],
        ));

        assert!(text.starts_with("3-day itinerary for Barcelona (weather: Sunny)"));
        assert!(text.contains("Day 1\n- Visit City Museum: open with tickets available"));
        assert!(text.contains("Day 2\n- Outdoor walking tour: the current weather (Sunny)"));
        assert!(text.contains("Day 3\n- Free time to explore Barcelona"));
        assert!(text.contains("add a park or viewpoint"));
        assert!(!text.contains("Some of your interests"));
    }

    #[test]
    fn test_render_mentions_unavailable_interests() {
        let text = TemplateNarrator::render(&context(
            "Heavy rain",
            &[("museums", None), ("concerts", None)],
        ));
        assert!(text.contains("Read a book: nothing on your list was available"));
        assert!(text.contains("keep a cafe or covered market in reserve"));
        assert!(text.contains("Some of your interests (museums, concerts)"));
    }

    #[test]
    fn test_render_lists_only_missing_interests() {
        let text = TemplateNarrator::render(&context(
            "Sunny",
            &[
                ("museums", Some("Visit City Museum")),
                ("concerts", None),
                ("coffee shops", Some("coffee shops")),
            ],
        ));
        assert!(text.contains("Some of your interests (concerts)"));
    }

    #[test]
    fn test_pass_through_looking_like_a_venue_keeps_its_own_reason() {
        let text = TemplateNarrator::render(&context(
            "Sunny",
            &[("museums", None), ("Visit the old town", Some("Visit the old town"))],
        ));
        assert!(text.contains("- Visit the old town: taken straight from your preferences."));
        assert!(!text.contains("open with tickets available"));
        assert!(text.contains("Some of your interests (museums)"));
    }

    #[test]
    fn test_untracked_context_lists_no_missing_interests() {
        let options = vec![ActivityOption::new("Visit City Museum")];
        let ctx = ItineraryContext::new(
            "Barcelona",
            &WeatherDescriptor::new("Sunny"),
            &["museums".to_string(), "concerts".to_string()],
            &options,
        );
        let text = TemplateNarrator::render(&ctx);
        assert!(text.contains("- Visit City Museum: picked for your preferences."));
        assert!(!text.contains("Some of your interests"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let ctx = context("Unknown", &[("coffee shops", Some("coffee shops"))]);
        assert_eq!(TemplateNarrator::render(&ctx), TemplateNarrator::render(&ctx));
        assert!(TemplateNarrator::render(&ctx).contains("forecast is unavailable"));
    }

    #[tokio::test]
    async fn test_generate_always_returns_text() {
        let ctx = context("Sunny", &[]);
        let text = TemplateNarrator.generate(&ctx).await.unwrap();
        assert!(text.is_some_and(|t| !t.is_empty()));
    }
}
