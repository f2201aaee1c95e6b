use poem::web::cookie::CookieJar;
use poem::Request;
use std::sync::Arc;

use crate::services::{SessionService, TokenService};
use crate::types::internal::auth::{AuthMethod, ResolvedAuth};

/// The single entry point every protected route uses to establish identity
///
/// Tries the mobile bearer token first, then the web session cookie. When a
/// request carries both, the bearer token wins, so API clients that send
/// both for compatibility get a deterministic answer. Each call re-verifies
/// from scratch; nothing is cached between requests.
pub struct AuthResolver {
    session_service: Arc<SessionService>,
    token_service: Arc<TokenService>,
}

impl AuthResolver {
    /// Create a new AuthResolver over the two credential mechanisms
    pub fn new(session_service: Arc<SessionService>, token_service: Arc<TokenService>) -> Self {
        Self {
            session_service,
            token_service,
        }
    }

    /// Resolve an identity from the raw credential material
    ///
    /// Framework-independent: takes the Authorization header value and the
    /// cookie jar, so it is testable without a running server.
    pub fn resolve(&self, authorization: Option<&str>, cookies: &CookieJar) -> Option<ResolvedAuth> {
        if let Some(token) = TokenService::extract_bearer(authorization) {
            if let Some(identity) = self.token_service.verify(token) {
                return Some(ResolvedAuth {
                    identity,
                    method: AuthMethod::Mobile,
                });
            }
        }

        if let Some(identity) = self.session_service.resolve(cookies) {
            return Some(ResolvedAuth {
                identity,
                method: AuthMethod::Web,
            });
        }

        None
    }

    /// Convenience wrapper pulling the credential material off a request
    pub fn resolve_request(&self, req: &Request) -> Option<ResolvedAuth> {
        self.resolve(req.header("Authorization"), req.cookie())
    }
}
