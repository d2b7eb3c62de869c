//! Configuration management for the trip planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripPlannerError;
use crate::models::{EventRecord, VenueRecord};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the trip planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripPlannerConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Weather lookup configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Narrative backend configuration
    #[serde(default)]
    pub narrative: NarrativeConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Venue and event catalog
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
    /// Maximum accepted request body in KB
    #[serde(default = "default_body_limit")]
    pub body_limit_kb: u32,
}

/// Weather lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the wttr.in compatible weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for failed requests
    #[serde(default = "default_weather_max_retries")]
    pub max_retries: u32,
}

/// Narrative backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeConfig {
    /// Backend to use: "template" (offline) or "openai"
    #[serde(default = "default_narrative_provider")]
    pub provider: String,
    /// API key for the "openai" provider
    pub api_key: Option<String>,
    /// Base URL of an OpenAI compatible API
    #[serde(default = "default_narrative_base_url")]
    pub base_url: String,
    #[serde(default = "default_narrative_model")]
    pub model: String,
    #[serde(default = "default_narrative_temperature")]
    pub temperature: f32,
    #[serde(default = "default_narrative_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Venues and events served by the catalog sources, in priority order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_venues")]
    pub venues: Vec<VenueRecord>,
    #[serde(default = "default_events")]
    pub events: Vec<EventRecord>,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    4000
}

fn default_request_timeout() -> u32 {
    60
}

fn default_body_limit() -> u32 {
    64
}

fn default_weather_base_url() -> String {
    "https://wttr.in".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_weather_max_retries() -> u32 {
    2
}

fn default_narrative_provider() -> String {
    "template".to_string()
}

fn default_narrative_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_narrative_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_narrative_temperature() -> f32 {
    0.7
}

fn default_narrative_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_venues() -> Vec<VenueRecord> {
    vec![
        VenueRecord::new("City Museum", true, true),
        VenueRecord::new("Art Gallery", false, false),
    ]
}

fn default_events() -> Vec<EventRecord> {
    vec![
        EventRecord::new("Jazz Night", true),
        EventRecord::new("Rock Concert", false),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            request_timeout_seconds: default_request_timeout(),
            body_limit_kb: default_body_limit(),
        }
    }
}

impl ServerConfig {
    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
            max_retries: default_weather_max_retries(),
        }
    }
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            provider: default_narrative_provider(),
            api_key: None,
            base_url: default_narrative_base_url(),
            model: default_narrative_model(),
            temperature: default_narrative_temperature(),
            timeout_seconds: default_narrative_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            venues: default_venues(),
            events: default_events(),
        }
    }
}

impl TripPlannerConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRIPPLANNER__LOGGING__LEVEL=debug and friends
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLANNER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripPlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripplanner").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.server.body_limit_kb == 0 {
            self.server.body_limit_kb = default_body_limit();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.narrative.provider.is_empty() {
            self.narrative.provider = default_narrative_provider();
        }
        if self.narrative.base_url.is_empty() {
            self.narrative.base_url = default_narrative_base_url();
        }
        if self.narrative.model.is_empty() {
            self.narrative.model = default_narrative_model();
        }
        if self.narrative.timeout_seconds == 0 {
            self.narrative.timeout_seconds = default_narrative_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        match (&self.narrative.api_key, self.narrative.provider.as_str()) {
            (None, "openai") => Err(TripPlannerError::config(
                "The openai narrative provider needs narrative.api_key to be set.",
            )
            .into()),
            (Some(api_key), _) if api_key.trim().is_empty() => Err(TripPlannerError::config(
                "Narrative API key cannot be empty if provided. Either remove it or provide a valid key.",
            )
            .into()),
            _ => Ok(()),
        }
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TripPlannerError::config("Server port cannot be 0").into());
        }

        if self.server.request_timeout_seconds > 600 {
            return Err(
                TripPlannerError::config("Request timeout cannot exceed 600 seconds").into(),
            );
        }

        if self.weather.timeout_seconds > 300 {
            return Err(
                TripPlannerError::config("Weather API timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.weather.max_retries > 10 {
            return Err(TripPlannerError::config("Weather API max retries cannot exceed 10").into());
        }

        if self.narrative.timeout_seconds > 300 {
            return Err(
                TripPlannerError::config("Narrative timeout cannot exceed 300 seconds").into(),
            );
        }

        if !(0.0..=2.0).contains(&self.narrative.temperature) {
            return Err(
                TripPlannerError::config("Narrative temperature must be between 0.0 and 2.0")
                    .into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let valid_providers = ["template", "openai"];
        if !valid_providers.contains(&self.narrative.provider.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid narrative provider '{}'. Must be one of: {}",
                self.narrative.provider,
                valid_providers.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Weather API", &self.weather.base_url),
            ("Narrative API", &self.narrative.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TripPlannerError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        if self.catalog.venues.iter().any(|v| v.name.trim().is_empty())
            || self.catalog.events.iter().any(|e| e.name.trim().is_empty())
        {
            return Err(TripPlannerError::config("Catalog entries must have a name").into());
        }

        Ok(())
    }
}
