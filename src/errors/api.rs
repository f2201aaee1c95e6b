use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use super::ErrorResponse;

/// Error types shared by the CRUD endpoints
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Request is missing or carrying an invalid credential
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Authenticated but lacking the required role
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Referenced record does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Request payload failed a domain check
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Downstream store failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ApiError {
    /// Create an Unauthorized error
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(Json(ErrorResponse {
            error: "unauthorized".to_string(),
            message: "Authentication required".to_string(),
            status_code: 401,
        }))
    }

    /// Create a Forbidden error
    pub fn forbidden() -> Self {
        ApiError::Forbidden(Json(ErrorResponse {
            error: "forbidden".to_string(),
            message: "Administrator role required".to_string(),
            status_code: 403,
        }))
    }

    /// Create a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: message.into(),
            status_code: 404,
        }))
    }

    /// Create a BadRequest error
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(Json(ErrorResponse {
            error: "bad_request".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an InternalError
    ///
    /// The client always receives the same generic body; callers log the
    /// underlying failure before constructing this.
    pub fn internal_error() -> Self {
        ApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized(json) => json.0.message.clone(),
            ApiError::Forbidden(json) => json.0.message.clone(),
            ApiError::NotFound(json) => json.0.message.clone(),
            ApiError::BadRequest(json) => json.0.message.clone(),
            ApiError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
