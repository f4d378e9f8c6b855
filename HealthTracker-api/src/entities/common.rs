use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use health_tracker_domain::services::{ClassificationError, HealthRecordServiceError};

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a not found error response
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: "not_found".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a validation error response
    pub fn validation_error(message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.into(),
            details,
        }
    }

    /// Create a bad request error response
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: "bad_request".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response for a record without a reading
    pub fn unclassified_state(message: impl Into<String>) -> Self {
        Self {
            error: "unclassified_state".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
        }
    }

    /// Status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" | "bad_request" => StatusCode::BAD_REQUEST,
            "unclassified_state" => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// JSON body extractor that rejects with an `ErrorResponse`
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ErrorResponse))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        match rejection {
            // Well-formed JSON whose values do not fit the request type,
            // e.g. a negative or oversized reading
            JsonRejection::JsonDataError(err) => ErrorResponse::validation_error(
                "Request body contains invalid values",
                Some(serde_json::json!({ "body": err.body_text() })),
            ),
            other => ErrorResponse::bad_request(other.body_text()),
        }
    }
}

impl From<ClassificationError> for ErrorResponse {
    fn from(err: ClassificationError) -> Self {
        ErrorResponse::validation_error(err.to_string(), None)
    }
}

impl From<HealthRecordServiceError> for ErrorResponse {
    fn from(err: HealthRecordServiceError) -> Self {
        match err {
            HealthRecordServiceError::ValidationError(msg) => ErrorResponse::validation_error(msg, None),
            HealthRecordServiceError::UnclassifiedState(msg) => ErrorResponse::unclassified_state(msg),
            HealthRecordServiceError::NotFound(msg) => ErrorResponse::not_found(msg),
            HealthRecordServiceError::RepositoryError(msg) => {
                tracing::error!("Repository failure: {}", msg);
                ErrorResponse::internal_error()
            }
        }
    }
}

/// Run derive-based validation on a request payload
pub fn validate_request<T: Validate>(request: &T) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_errors| {
        let details: serde_json::Map<String, serde_json::Value> = validation_errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let messages: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|err| match &err.message {
                        Some(msg) => msg.to_string().into(),
                        None => format!("Invalid {}", field).into(),
                    })
                    .collect();
                (field.to_string(), serde_json::Value::Array(messages))
            })
            .collect();

        ErrorResponse::validation_error("Request validation failed", Some(details.into()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(range(min = 1, max = 999, message = "Value must be between 1 and 999"))]
        value: u16,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorResponse::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorResponse::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorResponse::unclassified_state("x").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ErrorResponse::internal_error().status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_service_errors_map_to_responses() {
        let response: ErrorResponse = HealthRecordServiceError::UnclassifiedState("no reading".into()).into();
        assert_eq!(response.error, "unclassified_state");

        let response: ErrorResponse = HealthRecordServiceError::RepositoryError("poisoned".into()).into();
        assert_eq!(response.error, "internal_error");
        // Storage details stay out of the body
        assert!(!response.message.contains("poisoned"));
    }

    #[test]
    fn test_validate_request_collects_field_messages() {
        let err = validate_request(&Sample { value: 0 }).unwrap_err();
        assert_eq!(err.error, "validation_error");
        let details = err.details.unwrap();
        assert_eq!(details["value"][0], "Value must be between 1 and 999");

        assert!(validate_request(&Sample { value: 120 }).is_ok());
    }
}
