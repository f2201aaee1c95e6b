use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use super::ErrorResponse;

/// Authentication error types
///
/// Credential failures deliberately collapse to the same externally visible
/// message whether the username was unknown or the password wrong, so the
/// API cannot be used to enumerate accounts.
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Invalid username or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Username already exists
    #[oai(status = 400)]
    DuplicateUsername(Json<ErrorResponse>),

    /// No valid credential on the request
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// No externally-established identity-provider session
    #[oai(status = 401)]
    MissingSsoSession(Json<ErrorResponse>),

    /// SSO email has no matching local account
    #[oai(status = 404)]
    UserNotProvisioned(Json<ErrorResponse>),

    /// Downstream user store failure
    #[oai(status = 500)]
    StoreUnavailable(Json<ErrorResponse>),
}

impl AuthError {
    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid username or password".to_string(),
            status_code: 401,
        }))
    }

    /// Create a DuplicateUsername error
    pub fn duplicate_username() -> Self {
        AuthError::DuplicateUsername(Json(ErrorResponse {
            error: "duplicate_username".to_string(),
            message: "Username already exists".to_string(),
            status_code: 400,
        }))
    }

    /// Create a generic Unauthorized error
    ///
    /// Used for every invalid, expired, or absent credential so the response
    /// never reveals which check failed.
    pub fn unauthorized() -> Self {
        AuthError::Unauthorized(Json(ErrorResponse {
            error: "unauthorized".to_string(),
            message: "Authentication required".to_string(),
            status_code: 401,
        }))
    }

    /// Create a MissingSsoSession error
    pub fn missing_sso_session() -> Self {
        AuthError::MissingSsoSession(Json(ErrorResponse {
            error: "missing_sso_session".to_string(),
            message: "No identity provider session found".to_string(),
            status_code: 401,
        }))
    }

    /// Create a UserNotProvisioned error
    ///
    /// Safe to disclose: this path is only reachable after the identity
    /// provider already vouched for the email.
    pub fn user_not_provisioned() -> Self {
        AuthError::UserNotProvisioned(Json(ErrorResponse {
            error: "user_not_provisioned".to_string(),
            message: "No account exists for this email. Contact an administrator to request access."
                .to_string(),
            status_code: 404,
        }))
    }

    /// Create a StoreUnavailable error
    ///
    /// The caller-visible message stays generic; the underlying store error
    /// is logged server-side before this is constructed.
    pub fn store_unavailable() -> Self {
        AuthError::StoreUnavailable(Json(ErrorResponse {
            error: "store_unavailable".to_string(),
            message: "Authentication service unavailable".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::DuplicateUsername(json) => json.0.message.clone(),
            AuthError::Unauthorized(json) => json.0.message.clone(),
            AuthError::MissingSsoSession(json) => json.0.message.clone(),
            AuthError::UserNotProvisioned(json) => json.0.message.clone(),
            AuthError::StoreUnavailable(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
