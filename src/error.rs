// Error handling module for the Prices API
// Provides centralized error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use tracing::{debug, error};

/// Main error type for the API
///
/// Every handler returns Result<T, ApiError>. Each variant maps to one HTTP
/// status code and a structured error body, so the three logical resolution
/// outcomes stay distinguishable at the boundary: a store failure is a 500 and
/// never collapses into the 404 that "no applicable price" produces.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed query parameter, detected before the typed query
    /// is built. Maps to HTTP 400 Bad Request.
    #[error("{message}")]
    InvalidParameter { message: String },

    /// Field-level validation failures on the typed query.
    /// Maps to HTTP 400 Bad Request.
    #[error("request validation failed")]
    ValidationError(#[from] validator::ValidationErrors),

    /// No pricing rule is applicable to the requested brand, product, and
    /// instant. Maps to HTTP 404 Not Found. An expected outcome, not a bug.
    #[error("no price found for brand {brand_id} and product {product_id} at {application_date}")]
    NotFound {
        brand_id: i32,
        product_id: i32,
        application_date: NaiveDateTime,
    },

    /// The candidate fetch failed. Maps to HTTP 500 Internal Server Error;
    /// details are logged but filtered from the client response.
    #[error("database error")]
    DatabaseError(#[from] sqlx::Error),

    /// Any other internal failure. Maps to HTTP 500 Internal Server Error.
    #[error("internal error: {0}")]
    InternalError(String),
}

/// Consistent error response structure
///
/// JSON format shared by all error types: a machine-readable `error_code`, a
/// human-readable `message`, optional field-level `details`, and an ISO 8601
/// timestamp.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = self.to_error_response();
        (status, Json(error_response)).into_response()
    }
}

impl ApiError {
    fn to_error_response(&self) -> (StatusCode, ErrorResponse) {
        let body = match self {
            ApiError::InvalidParameter { message } => {
                debug!("Invalid parameter: {}", message);

                ErrorResponse {
                    error_code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    details: None,
                    timestamp: Utc::now().to_rfc3339(),
                }
            }
            ApiError::ValidationError(errors) => {
                debug!("Validation error: {:?}", errors);

                ErrorResponse {
                    error_code: "VALIDATION_ERROR".to_string(),
                    message: "Request validation failed".to_string(),
                    details: Some(serde_json::to_value(errors).unwrap_or(serde_json::json!({}))),
                    timestamp: Utc::now().to_rfc3339(),
                }
            }
            ApiError::NotFound {
                brand_id,
                product_id,
                application_date,
            } => {
                debug!(
                    "No price found for brand {} and product {} at {}",
                    brand_id, product_id, application_date
                );

                ErrorResponse {
                    error_code: "PRICE_NOT_FOUND".to_string(),
                    message: format!(
                        "No price found for brand {} and product {} at {}",
                        brand_id, product_id, application_date
                    ),
                    details: None,
                    timestamp: Utc::now().to_rfc3339(),
                }
            }
            ApiError::DatabaseError(db_error) => {
                // Full detail stays in the logs, never in the client response
                error!("Database error: {:?}", db_error);

                ErrorResponse {
                    error_code: "DATABASE_ERROR".to_string(),
                    message: "A database error occurred".to_string(),
                    details: None,
                    timestamp: Utc::now().to_rfc3339(),
                }
            }
            ApiError::InternalError(internal_msg) => {
                error!("Internal error: {}", internal_msg);

                ErrorResponse {
                    error_code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    details: None,
                    timestamp: Utc::now().to_rfc3339(),
                }
            }
        };

        (self.status_code(), body)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
