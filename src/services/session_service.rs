use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use poem::web::cookie::{Cookie, CookieJar, SameSite};
use std::fmt;
use std::time::Duration;

use crate::config::Environment;
use crate::errors::auth::AuthError;
use crate::types::internal::auth::{ClaimsUser, Identity, SessionClaims};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

const MAX_AGE_DAYS: i64 = 7;

/// Issues, resolves, and revokes the cookie-backed primary session
///
/// The cookie value is a signed claim set using the same shared secret as
/// the mobile token signer, but with a different claim shape, so neither
/// credential verifies as the other.
pub struct SessionService {
    jwt_secret: String,
    environment: Environment,
}

impl SessionService {
    /// Create a new SessionService with the shared signing secret
    pub fn new(jwt_secret: String, environment: Environment) -> Self {
        Self {
            jwt_secret,
            environment,
        }
    }

    /// Issue a session cookie carrying the identity
    ///
    /// Cookie attributes: HttpOnly, SameSite=Lax, Path=/, Max-Age 7 days,
    /// Secure only in production-like environments.
    pub fn issue(&self, jar: &CookieJar, identity: &Identity) -> Result<(), AuthError> {
        let now = Utc::now().timestamp();

        let claims = SessionClaims {
            user: ClaimsUser::from(identity),
            iat: now,
            exp: now + MAX_AGE_DAYS * 24 * 60 * 60,
        };

        let value = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to sign session cookie");
            AuthError::store_unavailable()
        })?;

        let mut cookie = Cookie::new_with_str(SESSION_COOKIE, value);
        self.apply_attributes(&mut cookie);
        cookie.set_max_age(Duration::from_secs((MAX_AGE_DAYS * 24 * 60 * 60) as u64));
        jar.add(cookie);

        Ok(())
    }

    /// Resolve the session cookie into an identity
    ///
    /// An absent, expired, or tampered cookie yields `None`; this never
    /// surfaces an error to the caller.
    pub fn resolve(&self, jar: &CookieJar) -> Option<Identity> {
        let cookie = jar.get(SESSION_COOKIE)?;

        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<SessionClaims>(
            cookie.value_str(),
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .ok()?;

        Some(Identity::from(token_data.claims.user))
    }

    /// Clear the session cookie
    ///
    /// Replaces it with an empty value expiring immediately, on the same
    /// path the issuing cookie used.
    pub fn revoke(&self, jar: &CookieJar) {
        let mut cookie = Cookie::new_with_str(SESSION_COOKIE, "");
        self.apply_attributes(&mut cookie);
        cookie.set_max_age(Duration::from_secs(0));
        jar.add(cookie);
    }

    fn apply_attributes(&self, cookie: &mut Cookie) {
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_path("/");
        cookie.set_secure(self.environment.is_production());
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("jwt_secret", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::internal::auth::Role;

    const TEST_SECRET: &str = "test-secret-key-minimum-32-characters-long";

    fn test_service() -> SessionService {
        SessionService::new(TEST_SECRET.to_string(), Environment::Development)
    }

    fn test_identity() -> Identity {
        Identity {
            id: 3,
            username: "dave".to_string(),
            role: Role::General,
            first_name: Some("Dave".to_string()),
            last_name: None,
            email: Some("dave@example.com".to_string()),
        }
    }

    #[test]
    fn test_issue_then_resolve_round_trips_identity() {
        let service = test_service();
        let jar = CookieJar::default();
        let identity = test_identity();

        service.issue(&jar, &identity).unwrap();
        let resolved = service.resolve(&jar).expect("Session should resolve");

        assert_eq!(resolved, identity);
    }

    #[test]
    fn test_resolve_returns_none_without_cookie() {
        let service = test_service();
        let jar = CookieJar::default();

        assert!(service.resolve(&jar).is_none());
    }

    #[test]
    fn test_resolve_returns_none_for_tampered_cookie() {
        let service = test_service();
        let jar = CookieJar::default();

        service.issue(&jar, &test_identity()).unwrap();
        let cookie = jar.get(SESSION_COOKIE).unwrap();
        let mut tampered = cookie.value_str().to_string();
        tampered.push('x');
        jar.add(Cookie::new_with_str(SESSION_COOKIE, tampered));

        assert!(service.resolve(&jar).is_none());
    }

    #[test]
    fn test_resolve_returns_none_for_cookie_signed_with_other_secret() {
        let issuing = test_service();
        let resolving =
            SessionService::new("another-secret-key-minimum-32-chars-x".to_string(), Environment::Development);
        let jar = CookieJar::default();

        issuing.issue(&jar, &test_identity()).unwrap();

        assert!(resolving.resolve(&jar).is_none());
    }

    #[test]
    fn test_revoke_clears_cookie_so_resolve_returns_none() {
        let service = test_service();
        let jar = CookieJar::default();

        service.issue(&jar, &test_identity()).unwrap();
        assert!(service.resolve(&jar).is_some());

        service.revoke(&jar);

        assert!(service.resolve(&jar).is_none());
        // The replacement cookie is empty-valued
        assert_eq!(jar.get(SESSION_COOKIE).unwrap().value_str(), "");
    }

    #[test]
    fn test_cookie_attributes() {
        let service = test_service();
        let jar = CookieJar::default();

        service.issue(&jar, &test_identity()).unwrap();
        let rendered = jar.get(SESSION_COOKIE).unwrap().to_string();

        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("SameSite=Lax"));
        // Development environment leaves the cookie usable over plain HTTP
        assert!(!rendered.contains("Secure"));
    }

    #[test]
    fn test_production_cookie_is_secure() {
        let service = SessionService::new(TEST_SECRET.to_string(), Environment::Production);
        let jar = CookieJar::default();

        service.issue(&jar, &test_identity()).unwrap();
        let rendered = jar.get(SESSION_COOKIE).unwrap().to_string();

        assert!(rendered.contains("Secure"));
    }

    #[test]
    fn test_mobile_token_is_not_a_valid_session_cookie() {
        use crate::services::token_service::TokenService;

        let session_service = test_service();
        let token_service = TokenService::new(TEST_SECRET.to_string());
        let jar = CookieJar::default();

        // Same secret, different claim shape: must not resolve as a session
        let mobile_token = token_service.sign(&test_identity()).unwrap();
        jar.add(Cookie::new_with_str(SESSION_COOKIE, mobile_token));

        assert!(session_service.resolve(&jar).is_none());
    }

    #[test]
    fn test_session_cookie_is_not_a_valid_mobile_token() {
        use crate::services::token_service::TokenService;

        let session_service = test_service();
        let token_service = TokenService::new(TEST_SECRET.to_string());
        let jar = CookieJar::default();

        session_service.issue(&jar, &test_identity()).unwrap();
        let cookie_value = jar.get(SESSION_COOKIE).unwrap().value_str().to_string();

        assert!(token_service.verify(&cookie_value).is_none());
    }

    #[test]
    fn test_debug_trait_does_not_expose_secret() {
        let service = test_service();

        let debug_output = format!("{:?}", service);

        assert!(!debug_output.contains(TEST_SECRET));
        assert!(debug_output.contains("<redacted>"));
    }
}
