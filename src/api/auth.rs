use poem::Request;
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::services::{AuthResolver, AuthService};
use crate::types::dto::auth::{LoginRequest, RegisterRequest, UserInfo, UserResponse};
use crate::types::dto::common::MessageResponse;

/// Web authentication API endpoints
pub struct AuthApi {
    auth_service: Arc<AuthService>,
    auth_resolver: Arc<AuthResolver>,
}

impl AuthApi {
    /// Create a new AuthApi
    pub fn new(auth_service: Arc<AuthService>, auth_resolver: Arc<AuthResolver>) -> Self {
        Self {
            auth_service,
            auth_resolver,
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with username and password to receive a session cookie
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(
        &self,
        req: &Request,
        body: Json<LoginRequest>,
    ) -> Result<Json<UserResponse>, AuthError> {
        let identity = self
            .auth_service
            .login_web(req.cookie(), &body.username, &body.password)
            .await?;

        Ok(Json(UserResponse {
            user: UserInfo::from(&identity),
        }))
    }

    /// Register a new general-role account
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    async fn register(&self, body: Json<RegisterRequest>) -> Result<Json<UserResponse>, AuthError> {
        let body = body.0;

        let identity = self
            .auth_service
            .register(
                body.username,
                body.password,
                body.first_name,
                body.last_name,
                body.email,
            )
            .await?;

        Ok(Json(UserResponse {
            user: UserInfo::from(&identity),
        }))
    }

    /// Return the identity authenticated on this request
    #[oai(path = "/session", method = "get", tag = "AuthTags::Authentication")]
    async fn session(&self, req: &Request) -> Result<Json<UserResponse>, AuthError> {
        let resolved = self
            .auth_resolver
            .resolve_request(req)
            .ok_or_else(AuthError::unauthorized)?;

        Ok(Json(UserResponse {
            user: UserInfo::from(&resolved.identity),
        }))
    }

    /// Logout, clearing the session cookie unconditionally
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(&self, req: &Request) -> Json<MessageResponse> {
        self.auth_service.logout(req.cookie());

        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}
