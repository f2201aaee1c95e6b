use poem::web::cookie::CookieJar;
use std::sync::Arc;

use crate::audit::login as audit;
use crate::errors::auth::AuthError;
use crate::services::{SessionService, TokenService};
use crate::stores::CredentialStore;
use crate::types::internal::auth::Identity;

/// Authentication service that orchestrates the login, SSO, and logout flows
///
/// Coordinates the credential store with the two credential issuers and owns
/// the audit logging of every attempt. Route handlers translate the returned
/// errors to HTTP; nothing here panics on bad input.
pub struct AuthService {
    credential_store: Arc<CredentialStore>,
    session_service: Arc<SessionService>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(
        credential_store: Arc<CredentialStore>,
        session_service: Arc<SessionService>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            credential_store,
            session_service,
            token_service,
        }
    }

    /// Web login: verify credentials, then set the session cookie
    pub async fn login_web(
        &self,
        jar: &CookieJar,
        username: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let identity = self.verify_credentials(username, password, "web").await?;

        self.session_service.issue(jar, &identity)?;
        audit::log_login_success(username, "web");

        Ok(identity)
    }

    /// Mobile login: verify credentials, then sign a stateless bearer token
    pub async fn login_mobile(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, Identity), AuthError> {
        let identity = self.verify_credentials(username, password, "mobile").await?;

        let token = self.token_service.sign(&identity)?;
        audit::log_login_success(username, "mobile");

        Ok((token, identity))
    }

    /// SSO completion: resolve an externally-asserted email into a session
    ///
    /// The SSO handshake itself happened upstream; this trusts the asserted
    /// email, requires a pre-provisioned local account, and never creates
    /// one. On success the issued session is identical to a password login.
    pub async fn complete_sso(
        &self,
        jar: &CookieJar,
        asserted_email: Option<&str>,
    ) -> Result<Identity, AuthError> {
        let email = asserted_email
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .ok_or_else(AuthError::missing_sso_session)?;

        let user = self.credential_store.find_by_email(email).await?;

        let Some(user) = user else {
            audit::log_sso_unmatched(email);
            return Err(AuthError::user_not_provisioned());
        };

        let identity = CredentialStore::identity_from(user);
        self.session_service.issue(jar, &identity)?;
        audit::log_login_success(&identity.username, "sso");

        Ok(identity)
    }

    /// Logout: clear the session cookie unconditionally
    pub fn logout(&self, jar: &CookieJar) {
        self.session_service.revoke(jar);
        audit::log_logout();
    }

    /// Register a new general-role user
    pub async fn register(
        &self,
        username: String,
        password: String,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Result<Identity, AuthError> {
        self.credential_store
            .add_user(username, password, first_name, last_name, email)
            .await
    }

    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
        method: &str,
    ) -> Result<Identity, AuthError> {
        match self.credential_store.authenticate(username, password).await {
            Ok(identity) => Ok(identity),
            Err(err) => {
                let reason = match &err {
                    AuthError::InvalidCredentials(_) => "invalid_credentials",
                    _ => "authentication_error",
                };
                audit::log_login_failure(username, method, reason);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::types::internal::auth::Role;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    const TEST_SECRET: &str = "test-secret-key-minimum-32-characters-long";

    async fn setup_test_service() -> (AuthService, Arc<CredentialStore>) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let credential_store = Arc::new(CredentialStore::new(
            db,
            "test-pepper-for-unit-tests".to_string(),
        ));
        let session_service = Arc::new(SessionService::new(
            TEST_SECRET.to_string(),
            Environment::Development,
        ));
        let token_service = Arc::new(TokenService::new(TEST_SECRET.to_string()));

        let service = AuthService::new(
            credential_store.clone(),
            session_service,
            token_service,
        );

        (service, credential_store)
    }

    async fn seed_user(store: &CredentialStore) -> Identity {
        store
            .add_user(
                "frank".to_string(),
                "frankpass".to_string(),
                Some("Frank".to_string()),
                None,
                Some("frank@example.com".to_string()),
            )
            .await
            .expect("Failed to seed user")
    }

    #[tokio::test]
    async fn test_login_web_sets_resolvable_session_cookie() {
        let (service, store) = setup_test_service().await;
        let seeded = seed_user(&store).await;
        let jar = poem::web::cookie::CookieJar::default();

        let identity = service
            .login_web(&jar, "frank", "frankpass")
            .await
            .expect("Login should succeed");

        assert_eq!(identity, seeded);

        // The issued cookie resolves back to the exact same identity
        let resolved = service
            .session_service
            .resolve(&jar)
            .expect("Session should resolve");
        assert_eq!(resolved, seeded);
    }

    #[tokio::test]
    async fn test_login_web_with_bad_password_issues_no_cookie() {
        let (service, store) = setup_test_service().await;
        seed_user(&store).await;
        let jar = poem::web::cookie::CookieJar::default();

        let result = service.login_web(&jar, "frank", "wrong").await;

        assert!(result.is_err());
        assert!(jar.get(crate::services::session_service::SESSION_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_login_mobile_returns_verifiable_token() {
        let (service, store) = setup_test_service().await;
        let seeded = seed_user(&store).await;

        let (token, identity) = service
            .login_mobile("frank", "frankpass")
            .await
            .expect("Login should succeed");

        assert_eq!(identity, seeded);

        let verified = service
            .token_service
            .verify(&token)
            .expect("Token should verify");
        assert_eq!(verified, seeded);
    }

    #[tokio::test]
    async fn test_complete_sso_with_provisioned_email() {
        let (service, store) = setup_test_service().await;
        let seeded = seed_user(&store).await;
        let jar = poem::web::cookie::CookieJar::default();

        let identity = service
            .complete_sso(&jar, Some("frank@example.com"))
            .await
            .expect("SSO completion should succeed");

        assert_eq!(identity, seeded);
        assert!(service.session_service.resolve(&jar).is_some());
    }

    #[tokio::test]
    async fn test_complete_sso_without_assertion_fails() {
        let (service, _store) = setup_test_service().await;
        let jar = poem::web::cookie::CookieJar::default();

        for asserted in [None, Some(""), Some("   ")] {
            let result = service.complete_sso(&jar, asserted).await;
            match result {
                Err(AuthError::MissingSsoSession(_)) => {
                    // Expected error type
                }
                _ => panic!("Expected MissingSsoSession error"),
            }
        }
    }

    #[tokio::test]
    async fn test_complete_sso_unmatched_email_is_not_provisioned_and_idempotent() {
        let (service, store) = setup_test_service().await;
        seed_user(&store).await;
        let jar = poem::web::cookie::CookieJar::default();

        for _ in 0..2 {
            let result = service.complete_sso(&jar, Some("stranger@example.com")).await;
            match result {
                Err(AuthError::UserNotProvisioned(_)) => {
                    // Expected error type
                }
                _ => panic!("Expected UserNotProvisioned error"),
            }
        }

        // No account was auto-created on either attempt
        let created = store
            .find_by_email("stranger@example.com")
            .await
            .expect("Lookup failed");
        assert!(created.is_none());

        // And no session cookie appeared
        assert!(service.session_service.resolve(&jar).is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (service, store) = setup_test_service().await;
        seed_user(&store).await;
        let jar = poem::web::cookie::CookieJar::default();

        service
            .login_web(&jar, "frank", "frankpass")
            .await
            .expect("Login should succeed");
        assert!(service.session_service.resolve(&jar).is_some());

        service.logout(&jar);

        assert!(service.session_service.resolve(&jar).is_none());
    }

    #[tokio::test]
    async fn test_register_creates_general_user() {
        let (service, _store) = setup_test_service().await;

        let identity = service
            .register(
                "grace".to_string(),
                "gracepass".to_string(),
                None,
                None,
                None,
            )
            .await
            .expect("Register should succeed");

        assert_eq!(identity.role, Role::General);
        assert!(!identity.is_admin());
    }
}
