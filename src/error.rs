//! Error types and handling for the trip planner

use thiserror::Error;

/// Main error type for the trip planner
#[derive(Error, Debug)]
pub enum TripPlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream data source errors (weather, venues, events)
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Narrative backend errors
    #[error("Narrative error: {message}")]
    Narrative { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripPlannerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new narrative error
    pub fn narrative<S: Into<String>>(message: S) -> Self {
        Self::Narrative {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripPlannerError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TripPlannerError::Api { .. } => {
                "Unable to reach an external data source. Please try again later.".to_string()
            }
            TripPlannerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripPlannerError::Narrative { .. } => {
                "The itinerary writer is unavailable right now.".to_string()
            }
            TripPlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for TripPlannerError {
    fn from(err: reqwest::Error) -> Self {
        TripPlannerError::api(err.to_string())
    }
}

impl From<reqwest_middleware::Error> for TripPlannerError {
    fn from(err: reqwest_middleware::Error) -> Self {
        TripPlannerError::api(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripPlannerError::config("missing API key");
        assert!(matches!(config_err, TripPlannerError::Config { .. }));

        let api_err = TripPlannerError::api("connection failed");
        assert!(matches!(api_err, TripPlannerError::Api { .. }));

        let validation_err = TripPlannerError::validation("city must not be empty");
        assert!(matches!(validation_err, TripPlannerError::Validation { .. }));

        let narrative_err = TripPlannerError::narrative("empty completion");
        assert!(matches!(narrative_err, TripPlannerError::Narrative { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TripPlannerError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let api_err = TripPlannerError::api("test");
        assert!(api_err.user_message().contains("Unable to reach"));

        let validation_err = TripPlannerError::validation("city is blank");
        assert_eq!(validation_err.user_message(), "Invalid input: city is blank");
    }

    #[test]
    fn test_display_includes_message() {
        let err = TripPlannerError::api("wttr.in returned 503");
        assert_eq!(err.to_string(), "API error: wttr.in returned 503");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TripPlannerError = io_err.into();
        assert!(matches!(err, TripPlannerError::Io { .. }));
    }
}
