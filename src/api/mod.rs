use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;

use crate::{TripPlannerError, VERSION, models::TripPlan, planner::TripPlanner};

/// Body of `POST /plan-trip`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanTripRequest {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// Query of `GET /plan-trip`, preferences comma separated
#[derive(Debug, Deserialize)]
pub struct PlanTripQuery {
    #[serde(default)]
    pub city: String,
    pub preferences: Option<String>,
}

impl From<PlanTripQuery> for PlanTripRequest {
    fn from(query: PlanTripQuery) -> Self {
        Self {
            city: query.city,
            preferences: query
                .preferences
                .map(|list| list.split(',').map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }
}

impl PlanTripRequest {
    /// Trim input, drop blank preferences and reject a blank city
    pub fn normalize(self) -> crate::Result<(String, Vec<String>)> {
        let city = self.city.trim().to_string();
        if city.is_empty() {
            return Err(TripPlannerError::validation("city must not be empty"));
        }

        let preferences = self
            .preferences
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Ok((city, preferences))
    }
}

/// Error response carrying the user-facing message
pub struct ApiError(TripPlannerError);

impl From<TripPlannerError> for ApiError {
    fn from(err: TripPlannerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            TripPlannerError::Validation { .. } => StatusCode::BAD_REQUEST,
            TripPlannerError::Api { .. } | TripPlannerError::Narrative { .. } => {
                StatusCode::BAD_GATEWAY
            }
            TripPlannerError::Config { .. } | TripPlannerError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        warn!(%status, error = %self.0, "Request rejected");
        (status, Json(json!({ "error": self.0.user_message() }))).into_response()
    }
}

pub fn router(planner: Arc<TripPlanner>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/plan-trip", get(plan_trip_query).post(plan_trip))
        .with_state(planner)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": VERSION }))
}

async fn plan_trip(
    State(planner): State<Arc<TripPlanner>>,
    Json(request): Json<PlanTripRequest>,
) -> Result<Json<TripPlan>, ApiError> {
    let (city, preferences) = request.normalize()?;
    Ok(Json(planner.plan_trip(&city, &preferences).await))
}

async fn plan_trip_query(
    State(planner): State<Arc<TripPlanner>>,
    Query(query): Query<PlanTripQuery>,
) -> Result<Json<TripPlan>, ApiError> {
    let (city, preferences) = PlanTripRequest::from(query).normalize()?;
    Ok(Json(planner.plan_trip(&city, &preferences).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_drops_blanks() {
        let request = PlanTripRequest {
            city: "  Barcelona ".to_string(),
            preferences: vec![
                " museums ".to_string(),
                "   ".to_string(),
                "coffee shops".to_string(),
            ],
        };
        let (city, preferences) = request.normalize().unwrap();
        assert_eq!(city, "Barcelona");
        assert_eq!(preferences, ["museums", "coffee shops"]);
    }

    #[test]
    fn test_normalize_rejects_blank_city() {
        let request = PlanTripRequest {
            city: " ".to_string(),
            preferences: vec!["museums".to_string()],
        };
        let err = request.normalize().unwrap_err();
        assert!(matches!(err, TripPlannerError::Validation { .. }));
    }

    #[test]
    fn test_query_splits_preferences() {
        let query = PlanTripQuery {
            city: "Lisbon".to_string(),
            preferences: Some("museums,walking tours, fado show".to_string()),
        };
        let request = PlanTripRequest::from(query);
        assert_eq!(request.preferences, ["museums", "walking tours", " fado show"]);
    }

    #[test]
    fn test_query_without_preferences() {
        let query = PlanTripQuery {
            city: "Lisbon".to_string(),
            preferences: None,
        };
        assert!(PlanTripRequest::from(query).preferences.is_empty());
    }
}
