/// Unified error handling module
use crate::domain::SpacecraftType;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Structural failures of the mission-control core.
///
/// Expected launch outcomes (bad weather, low fuel, ...) are not errors; they
/// travel back as a [`LaunchResult`](crate::domain::LaunchResult).
#[derive(Debug, Error)]
pub enum MissionError {
    #[error("Spacecraft with ID {0} is already registered")]
    DuplicateId(String),
    #[error("Spacecraft with ID {0} not found")]
    NotFound(String),
    #[error("Unknown destination: {0}")]
    UnknownDestination(String),
    #[error("Unknown spacecraft type: {0}")]
    UnknownVehicleType(SpacecraftType),
    #[error("{0}")]
    InvalidArgument(String),
    /// `required` is `None` when navigation cannot price the trip at all.
    #[error(
        "Destination {destination} is not reachable with current fuel level. \
         Required: {}, Available: {available}",
        fuel_label(.required)
    )]
    Unreachable {
        destination: String,
        required: Option<f64>,
        available: f64,
    },
    #[error("Weather data unavailable for {0}")]
    WeatherUnavailable(String),
    #[error("Telemetry transport error: {0}")]
    Telemetry(#[from] reqwest::Error),
}

pub type MissionResult<T> = Result<T, MissionError>;

fn fuel_label(required: &Option<f64>) -> String {
    match required {
        Some(fuel) => fuel.to_string(),
        None => "unknown".to_string(),
    }
}

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    Mission(MissionError),
    InvalidInput(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Mission(e) => write!(f, "Mission error: {}", e),
            ApiError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<MissionError> for ApiError {
    fn from(err: MissionError) -> Self {
        ApiError::Mission(err)
    }
}

impl ApiError {
    /// Stable machine-readable code for the error variant
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Mission(e) => match e {
                MissionError::DuplicateId(_) => "DUPLICATE_ID",
                MissionError::NotFound(_) => "NOT_FOUND",
                MissionError::UnknownDestination(_) => "UNKNOWN_DESTINATION",
                MissionError::UnknownVehicleType(_) => "UNKNOWN_VEHICLE_TYPE",
                MissionError::InvalidArgument(_) => "INVALID_INPUT",
                MissionError::Unreachable { .. } => "UNREACHABLE",
                MissionError::WeatherUnavailable(_) | MissionError::Telemetry(_) => {
                    "UPSTREAM_ERROR"
                }
            },
            ApiError::InvalidInput(_) => "INVALID_INPUT",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Mission(e) => e.to_string(),
            other => other.to_string(),
        };

        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: self.code().to_string(),
                message,
            },
        };

        // Always return HTTP 200 with ok=false
        (StatusCode::OK, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_errors_map_to_codes() {
        let cases = [
            (MissionError::DuplicateId("SC-1".into()), "DUPLICATE_ID"),
            (MissionError::NotFound("SC-1".into()), "NOT_FOUND"),
            (MissionError::UnknownDestination("Vulcan".into()), "UNKNOWN_DESTINATION"),
            (
                MissionError::UnknownVehicleType(SpacecraftType::Rover),
                "UNKNOWN_VEHICLE_TYPE",
            ),
            (MissionError::InvalidArgument("neg".into()), "INVALID_INPUT"),
            (
                MissionError::Unreachable {
                    destination: "Pluto".into(),
                    required: Some(4_770.0),
                    available: 120.0,
                },
                "UNREACHABLE",
            ),
            (MissionError::WeatherUnavailable(" ".into()), "UPSTREAM_ERROR"),
        ];

        for (err, code) in cases {
            assert_eq!(ApiError::from(err).code(), code);
        }
    }

    #[test]
    fn test_unreachable_message_reports_fuel() {
        let err = MissionError::Unreachable {
            destination: "Mars".into(),
            required: Some(94.0),
            available: 30.0,
        };
        assert_eq!(
            err.to_string(),
            "Destination Mars is not reachable with current fuel level. \
             Required: 94, Available: 30"
        );
    }

    #[test]
    fn test_unreachable_message_without_price() {
        let err = MissionError::Unreachable {
            destination: "Vulcan".into(),
            required: None,
            available: 200.5,
        };
        assert_eq!(
            err.to_string(),
            "Destination Vulcan is not reachable with current fuel level. \
             Required: unknown, Available: 200.5"
        );
    }

    #[tokio::test]
    async fn test_error_renders_as_ok_false_envelope() {
        let response = ApiError::from(MissionError::NotFound("SC-404".into())).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Spacecraft with ID SC-404 not found");
    }
}
