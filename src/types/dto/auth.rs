use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::auth::Identity;

/// User payload returned by every authentication endpoint
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// User id
    pub id: i32,

    /// Unique username
    pub username: String,

    /// Integer role: 1 = admin, 2 = general
    pub role: i32,

    /// First name, if set
    pub first_name: Option<String>,

    /// Last name, if set
    pub last_name: Option<String>,

    /// Email address, if set
    pub email: Option<String>,
}

impl From<&Identity> for UserInfo {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username.clone(),
            role: identity.role.as_i32(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            email: identity.email.clone(),
        }
    }
}

/// Request model for web login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,
}

/// Request model for user registration
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Username for the new account
    #[oai(validator(min_length = 1, max_length = 100))]
    pub username: String,

    /// Password for the new account
    #[oai(validator(min_length = 1, max_length = 200))]
    pub password: String,

    /// First name
    pub first_name: Option<String>,

    /// Last name
    pub last_name: Option<String>,

    /// Email address
    pub email: Option<String>,
}

/// Response model carrying the authenticated user
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// The authenticated user
    pub user: UserInfo,
}
