use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::auth::UserInfo;

/// Request model for mobile login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MobileLoginRequest {
    /// Username for authentication
    #[oai(validator(min_length = 1, max_length = 100))]
    pub username: String,

    /// Password for authentication
    #[oai(validator(min_length = 1, max_length = 200))]
    pub password: String,
}

/// Response model for successful mobile login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MobileLoginResponse {
    /// Always true on this variant
    pub success: bool,

    /// Signed bearer token, valid for 7 days
    pub token: String,

    /// The authenticated user
    pub user: UserInfo,
}

/// Response model for failed mobile authentication
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MobileFailureResponse {
    /// Always false on this variant
    pub success: bool,

    /// Generic failure message
    pub message: String,
}

/// Response model for mobile session check
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MobileSessionResponse {
    /// Always true on this variant
    pub success: bool,

    /// The authenticated user
    pub user: UserInfo,
}

/// API response for mobile login endpoint
#[derive(ApiResponse)]
pub enum MobileLoginApiResponse {
    /// Authentication successful, token issued
    #[oai(status = 200)]
    Ok(Json<MobileLoginResponse>),

    /// Invalid username or password
    #[oai(status = 401)]
    Unauthorized(Json<MobileFailureResponse>),

    /// Authentication backend unavailable
    #[oai(status = 500)]
    InternalError(Json<MobileFailureResponse>),
}

/// API response for mobile session check endpoint
#[derive(ApiResponse)]
pub enum MobileSessionApiResponse {
    /// Token valid, user attached
    #[oai(status = 200)]
    Ok(Json<MobileSessionResponse>),

    /// Missing, invalid, or expired bearer token
    #[oai(status = 401)]
    Unauthorized(Json<MobileFailureResponse>),
}
