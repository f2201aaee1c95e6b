use poem::Request;
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::services::AuthService;
use crate::types::dto::auth::{UserInfo, UserResponse};

/// SSO bridge API endpoints
///
/// The SSO handshake happens at an identity proxy upstream of this service;
/// by the time a request lands here the proxy has verified the user and
/// asserts their email in a trusted header. This endpoint only maps that
/// email onto a pre-provisioned local account and mints a normal session
/// cookie. It accepts no password and creates no users.
pub struct SsoApi {
    auth_service: Arc<AuthService>,
    email_header: String,
}

impl SsoApi {
    /// Create a new SsoApi reading the asserted email from `email_header`
    pub fn new(auth_service: Arc<AuthService>, email_header: String) -> Self {
        Self {
            auth_service,
            email_header,
        }
    }
}

/// API tags for SSO endpoints
#[derive(Tags)]
enum SsoTags {
    /// Single sign-on endpoints
    Sso,
}

#[OpenApi(prefix_path = "/sso")]
impl SsoApi {
    /// Complete an SSO login for an externally-verified email
    #[oai(path = "/complete", method = "post", tag = "SsoTags::Sso")]
    async fn complete(&self, req: &Request) -> Result<Json<UserResponse>, AuthError> {
        let asserted_email = req.header(self.email_header.as_str());

        let identity = self
            .auth_service
            .complete_sso(req.cookie(), asserted_email)
            .await?;

        Ok(Json(UserResponse {
            user: UserInfo::from(&identity),
        }))
    }
}
