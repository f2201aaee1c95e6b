use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;
use std::fmt;

use crate::errors::auth::AuthError;
use crate::types::internal::auth::{Identity, MobileClaims, Role};

/// Case-sensitive prefix required on the Authorization header
const BEARER_PREFIX: &str = "Bearer ";

/// Issues and verifies stateless bearer tokens for mobile clients
///
/// Tokens are signed with the shared secret and die only by expiry; there is
/// no server-side revocation list. Logout on mobile is a client-side token
/// discard.
pub struct TokenService {
    jwt_secret: String,
    expiration_days: i64,
}

impl TokenService {
    /// Create a new TokenService with the shared signing secret
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            expiration_days: 7,
        }
    }

    /// Sign the canonical identity into a bearer token
    ///
    /// Subject is the stringified user id; expiry is 7 days from issuance.
    pub fn sign(&self, identity: &Identity) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = MobileClaims {
            sub: identity.id.to_string(),
            id: identity.id,
            username: identity.username.clone(),
            role: identity.role,
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            email: identity.email.clone(),
            iat: now,
            exp: now + self.expiration_days * 24 * 60 * 60,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to sign mobile token");
            AuthError::store_unavailable()
        })
    }

    /// Verify a bearer token and return the identity it carries
    ///
    /// Signature and expiry are checked first by the JWT library. A token
    /// that passes both is still rejected unless `id` is a number,
    /// `username` a string, and `role` a number - a syntactically valid but
    /// semantically incomplete token is not a session. All failures collapse
    /// to `None`.
    pub fn verify(&self, token: &str) -> Option<Identity> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Value>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .ok()?;
        let claims = token_data.claims;

        // Structural check, independent of signature validity
        let id = claims.get("id")?.as_i64()?;
        let id = i32::try_from(id).ok()?;
        let username = claims.get("username")?.as_str()?.to_string();
        let role_value = claims.get("role")?.as_i64()?;
        let role = i32::try_from(role_value).map(Role::from).unwrap_or(Role::General);

        let first_name = claims
            .get("firstName")
            .and_then(Value::as_str)
            .map(str::to_string);
        let last_name = claims
            .get("lastName")
            .and_then(Value::as_str)
            .map(str::to_string);
        let email = claims
            .get("email")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Identity {
            id,
            username,
            role,
            first_name,
            last_name,
            email,
        })
    }

    /// Extract the token from an Authorization header value
    ///
    /// The prefix match is case-sensitive with exactly one space; anything
    /// else yields `None`.
    pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
        header?.strip_prefix(BEARER_PREFIX)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("expiration_days", &self.expiration_days)
            .finish()
    }
}

impl fmt::Display for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenService {{ expiration: {}days }}", self.expiration_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_SECRET: &str = "test-secret-key-minimum-32-characters-long";

    fn test_service() -> TokenService {
        TokenService::new(TEST_SECRET.to_string())
    }

    fn test_identity() -> Identity {
        Identity {
            id: 7,
            username: "carol".to_string(),
            role: Role::Admin,
            first_name: Some("Carol".to_string()),
            last_name: Some("Reed".to_string()),
            email: Some("carol@example.com".to_string()),
        }
    }

    fn encode_raw_claims(claims: &Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_sign_then_verify_round_trips_identity() {
        let service = test_service();
        let identity = test_identity();

        let token = service.sign(&identity).unwrap();
        let verified = service.verify(&token).expect("Token should verify");

        assert_eq!(verified, identity);
    }

    #[test]
    fn test_sign_uses_stringified_id_as_subject() {
        let service = test_service();
        let token = service.sign(&test_identity()).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        let claims = decode::<Value>(
            &token,
            &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
            &validation,
        )
        .unwrap()
        .claims;

        assert_eq!(claims.get("sub").and_then(Value::as_str), Some("7"));
    }

    #[test]
    fn test_token_expiry_is_seven_days() {
        let service = test_service();
        let token = service.sign(&test_identity()).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        let claims = decode::<Value>(
            &token,
            &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
            &validation,
        )
        .unwrap()
        .claims;

        let iat = claims.get("iat").and_then(Value::as_i64).unwrap();
        let exp = claims.get("exp").and_then(Value::as_i64).unwrap();
        assert_eq!(exp - iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_verify_fails_with_wrong_secret() {
        let service = test_service();
        let other_service = TokenService::new("wrong-secret-key-minimum-32-chars-xx".to_string());

        let token = service.sign(&test_identity()).unwrap();

        assert!(other_service.verify(&token).is_none());
    }

    #[test]
    fn test_verify_rejects_expired_token_with_valid_signature() {
        let service = test_service();
        let now = Utc::now().timestamp();

        let token = encode_raw_claims(&json!({
            "sub": "7",
            "id": 7,
            "username": "carol",
            "role": 1,
            "iat": now - 7200,
            "exp": now - 3600,
        }));

        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_verify_rejects_role_as_string_despite_valid_signature() {
        let service = test_service();
        let now = Utc::now().timestamp();

        let token = encode_raw_claims(&json!({
            "sub": "7",
            "id": 7,
            "username": "carol",
            "role": "1",
            "iat": now,
            "exp": now + 3600,
        }));

        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_verify_rejects_id_as_string() {
        let service = test_service();
        let now = Utc::now().timestamp();

        let token = encode_raw_claims(&json!({
            "sub": "7",
            "id": "7",
            "username": "carol",
            "role": 1,
            "iat": now,
            "exp": now + 3600,
        }));

        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_verify_rejects_missing_username() {
        let service = test_service();
        let now = Utc::now().timestamp();

        let token = encode_raw_claims(&json!({
            "sub": "7",
            "id": 7,
            "role": 1,
            "iat": now,
            "exp": now + 3600,
        }));

        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_verify_rejects_malformed_token() {
        let service = test_service();

        assert!(service.verify("not-a-jwt").is_none());
        assert!(service.verify("").is_none());
    }

    #[test]
    fn test_verify_treats_unrecognized_role_number_as_general() {
        let service = test_service();
        let now = Utc::now().timestamp();

        let token = encode_raw_claims(&json!({
            "sub": "7",
            "id": 7,
            "username": "carol",
            "role": 42,
            "iat": now,
            "exp": now + 3600,
        }));

        let identity = service.verify(&token).expect("Token should verify");
        assert_eq!(identity.role, Role::General);
        assert!(!identity.is_admin());
    }

    #[test]
    fn test_extract_bearer_accepts_exact_prefix() {
        assert_eq!(
            TokenService::extract_bearer(Some("Bearer abc123")),
            Some("abc123")
        );
    }

    #[test]
    fn test_extract_bearer_rejects_lowercase_prefix() {
        assert_eq!(TokenService::extract_bearer(Some("bearer abc123")), None);
    }

    #[test]
    fn test_extract_bearer_rejects_missing_header() {
        assert_eq!(TokenService::extract_bearer(None), None);
    }

    #[test]
    fn test_extract_bearer_rejects_other_schemes() {
        assert_eq!(TokenService::extract_bearer(Some("Basic abc123")), None);
        assert_eq!(TokenService::extract_bearer(Some("Bearerabc123")), None);
    }

    #[test]
    fn test_debug_trait_does_not_expose_secret() {
        let service = test_service();

        let debug_output = format!("{:?}", service);

        assert!(!debug_output.contains(TEST_SECRET));
        assert!(debug_output.contains("<redacted>"));
    }
}
