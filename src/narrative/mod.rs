//! Itinerary synthesis
//!
//! The synthesizer hands a structured context to a pluggable narrative
//! generator and turns any failure into a fixed, user-visible sentence.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, instrument};

use crate::Result;
use crate::models::{ActivityOption, WeatherDescriptor};
use crate::resolver::Resolution;

pub mod openai;
pub mod template;

pub use openai::OpenAiNarrator;
pub use template::TemplateNarrator;

/// Returned when the narrative backend fails or produces no text
pub const SYNTHESIS_FAILED: &str = "Could not generate itinerary";

/// Fixed instruction sent along with every context
pub const ITINERARY_INSTRUCTION: &str = "Create a detailed 3-day itinerary. Decide the order, \
suggest alternatives if needed, and explain reasoning for each choice.";

/// Everything a narrative backend gets to work with
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryContext {
    pub city: String,
    pub weather: WeatherDescriptor,
    pub preferences: Vec<String>,
    pub options: Vec<ActivityOption>,
    /// Per-preference outcomes, in preference order. Empty when the caller
    /// did not track them.
    pub resolutions: Vec<Resolution>,
    pub instruction: &'static str,
}

impl ItineraryContext {
    #[must_use]
    pub fn new(
        city: &str,
        weather: &WeatherDescriptor,
        preferences: &[String],
        options: &[ActivityOption],
    ) -> Self {
        Self {
            city: city.to_string(),
            weather: weather.clone(),
            preferences: preferences.to_vec(),
            options: options.to_vec(),
            resolutions: Vec::new(),
            instruction: ITINERARY_INSTRUCTION,
        }
    }

    /// Attach what each preference resolved to
    #[must_use]
    pub fn with_resolutions(mut self, resolutions: Vec<Resolution>) -> Self {
        self.resolutions = resolutions;
        self
    }

    /// Render the context as a plain-text prompt
    #[must_use]
    pub fn prompt(&self) -> String {
        let options = self
            .options
            .iter()
            .map(ActivityOption::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "You are a travel planning assistant.\n\
             City: {}\n\
             Weather: {}\n\
             User Preferences: {}\n\
             Candidate activities: {}\n\n\
             {}",
            self.city,
            self.weather,
            self.preferences.join(", "),
            options,
            self.instruction
        )
    }
}

/// Text-generation backend.
///
/// `Ok(None)` and blank text both count as "nothing generated".
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, context: &ItineraryContext) -> Result<Option<String>>;
}

/// Produces the final itinerary text for a planning run
#[derive(Clone)]
pub struct ItinerarySynthesizer {
    generator: Arc<dyn NarrativeGenerator>,
}

impl ItinerarySynthesizer {
    pub fn new(generator: Arc<dyn NarrativeGenerator>) -> Self {
        Self { generator }
    }

    pub async fn synthesize(
        &self,
        city: &str,
        weather: &WeatherDescriptor,
        preferences: &[String],
        options: &[ActivityOption],
    ) -> String {
        let context = ItineraryContext::new(city, weather, preferences, options);
        self.synthesize_context(&context).await
    }

    /// Synthesize from a prepared context, e.g. one carrying resolutions
    #[instrument(skip_all, fields(city = %context.city, options = context.options.len()))]
    pub async fn synthesize_context(&self, context: &ItineraryContext) -> String {
        match self.generator.generate(context).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                error!("Narrative backend returned no itinerary text");
                SYNTHESIS_FAILED.to_string()
            }
            Err(e) => {
                error!(error = %e, "Itinerary synthesis failed");
                SYNTHESIS_FAILED.to_string()
            }
        }
    }
}
