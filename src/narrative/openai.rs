//! OpenAI compatible chat-completions backend

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{ItineraryContext, NarrativeGenerator};
use crate::config::NarrativeConfig;
use crate::{Result, TripPlannerError};

const SYSTEM_PROMPT: &str = "You are a travel planning AI. Write clear, practical itineraries.";

/// Narrative backend calling `{base_url}/chat/completions`
pub struct OpenAiNarrator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

impl OpenAiNarrator {
    pub fn new(config: &NarrativeConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TripPlannerError::config("narrative.api_key is required"))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|e| TripPlannerError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NarrativeGenerator for OpenAiNarrator {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate(&self, context: &ItineraryContext) -> Result<Option<String>> {
        let prompt = context.prompt();
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(TripPlannerError::narrative(format!("HTTP {status}: {text}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| TripPlannerError::narrative(format!("Invalid completion payload: {e}")))?;
        debug!(choices = parsed.choices.len(), "Completion received");

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> NarrativeConfig {
        NarrativeConfig {
            provider: "openai".to_string(),
            api_key: key.map(str::to_string),
            ..NarrativeConfig::default()
        }
    }

    #[test]
    fn test_requires_api_key() {
        assert!(OpenAiNarrator::new(&config_with_key(None)).is_err());
        assert!(OpenAiNarrator::new(&config_with_key(Some(" "))).is_err());
    }

    #[test]
    fn test_endpoint_from_base_url() {
        let mut config = config_with_key(Some("sk-test"));
        config.base_url = "http://localhost:11434/v1/".to_string();
        let narrator = OpenAiNarrator::new(&config).unwrap();
        assert_eq!(narrator.endpoint(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_completion_content_parsing() {
        let body = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"Day 1"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("Day 1"));

        let empty: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.choices.is_empty());
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            temperature: 0.5,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["temperature"], 0.5);
    }
}
