use poem::Request;
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::services::{AuthService, TokenService};
use crate::types::dto::auth::UserInfo;
use crate::types::dto::mobile::{
    MobileFailureResponse, MobileLoginApiResponse, MobileLoginRequest, MobileLoginResponse,
    MobileSessionApiResponse, MobileSessionResponse,
};

/// Mobile authentication API endpoints
///
/// Mobile clients never carry cookies; they authenticate every request with
/// a stateless bearer token obtained here.
pub struct MobileApi {
    auth_service: Arc<AuthService>,
    token_service: Arc<TokenService>,
}

impl MobileApi {
    /// Create a new MobileApi
    pub fn new(auth_service: Arc<AuthService>, token_service: Arc<TokenService>) -> Self {
        Self {
            auth_service,
            token_service,
        }
    }
}

/// API tags for mobile endpoints
#[derive(Tags)]
enum MobileTags {
    /// Mobile authentication endpoints
    Mobile,
}

#[OpenApi(prefix_path = "/mobile")]
impl MobileApi {
    /// Login with username and password to receive a bearer token
    #[oai(path = "/login", method = "post", tag = "MobileTags::Mobile")]
    async fn login(&self, body: Json<MobileLoginRequest>) -> MobileLoginApiResponse {
        match self
            .auth_service
            .login_mobile(&body.username, &body.password)
            .await
        {
            Ok((token, identity)) => MobileLoginApiResponse::Ok(Json(MobileLoginResponse {
                success: true,
                token,
                user: UserInfo::from(&identity),
            })),
            Err(AuthError::StoreUnavailable(_)) => {
                MobileLoginApiResponse::InternalError(Json(MobileFailureResponse {
                    success: false,
                    message: "Authentication service unavailable".to_string(),
                }))
            }
            Err(_) => MobileLoginApiResponse::Unauthorized(Json(MobileFailureResponse {
                success: false,
                message: "Invalid username or password".to_string(),
            })),
        }
    }

    /// Verify the bearer token on this request and return its user
    #[oai(path = "/session", method = "get", tag = "MobileTags::Mobile")]
    async fn session(&self, req: &Request) -> MobileSessionApiResponse {
        let identity = TokenService::extract_bearer(req.header("Authorization"))
            .and_then(|token| self.token_service.verify(token));

        match identity {
            Some(identity) => MobileSessionApiResponse::Ok(Json(MobileSessionResponse {
                success: true,
                user: UserInfo::from(&identity),
            })),
            // One generic answer for missing header, bad signature, expiry,
            // and structural failures alike
            None => MobileSessionApiResponse::Unauthorized(Json(MobileFailureResponse {
                success: false,
                message: "Invalid or expired token".to_string(),
            })),
        }
    }
}
