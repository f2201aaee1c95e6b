use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher,
    PasswordVerifier, Version,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::errors::auth::AuthError;
use crate::types::db::user::{self, ActiveModel, Entity as User};
use crate::types::internal::auth::{Identity, Role};

/// CredentialStore manages user records and password verification
///
/// This is the only place identities are minted from raw rows, so it is also
/// the single point where unrecognized role integers are coerced to
/// non-admin.
pub struct CredentialStore {
    db: DatabaseConnection,
    pepper: String,
}

impl CredentialStore {
    /// Create a new CredentialStore with the given database connection and
    /// password pepper
    pub fn new(db: DatabaseConnection, pepper: String) -> Self {
        Self { db, pepper }
    }

    /// Look up a user by username
    ///
    /// # Returns
    /// * `Ok(Some(model))` - User found
    /// * `Ok(None)` - No such username
    /// * `Err(AuthError::StoreUnavailable)` - Database failure (logged server-side)
    pub async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, AuthError> {
        User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "User lookup by username failed");
                AuthError::store_unavailable()
            })
    }

    /// Look up a user by exact email address
    ///
    /// Backs the SSO bridge; emails are matched exactly as stored.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AuthError> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "User lookup by email failed");
                AuthError::store_unavailable()
            })
    }

    /// Verify a plaintext password against a stored Argon2 hash
    ///
    /// Relies entirely on the hashing library's comparison; any parse or
    /// verification failure is a mismatch.
    pub fn verify_password(&self, plain: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        let Ok(argon2) = self.hasher() else {
            return false;
        };

        argon2.verify_password(plain.as_bytes(), &parsed_hash).is_ok()
    }

    /// Verify credentials and return the canonical identity on success
    ///
    /// Unknown username and wrong password produce the identical error, so
    /// callers cannot distinguish the two.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let user = self
            .find_by_username(username)
            .await?
            .ok_or_else(AuthError::invalid_credentials)?;

        if !self.verify_password(password, &user.password_hash) {
            return Err(AuthError::invalid_credentials());
        }

        Ok(Self::identity_from(user))
    }

    /// Add a new user to the database
    ///
    /// # Returns
    /// * `Ok(Identity)` - The created user's identity
    /// * `Err(AuthError)` - DuplicateUsername if taken, or StoreUnavailable
    pub async fn add_user(
        &self,
        username: String,
        password: String,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Result<Identity, AuthError> {
        let existing = self.find_by_username(&username).await?;
        if existing.is_some() {
            return Err(AuthError::duplicate_username());
        }

        let password_hash = self.hash_password(&password)?;
        let now = Utc::now().timestamp();

        let new_user = ActiveModel {
            username: Set(username),
            password_hash: Set(password_hash),
            role: Set(Role::General.as_i32()),
            first_name: Set(first_name),
            last_name: Set(last_name),
            email: Set(email),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = new_user.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                AuthError::duplicate_username()
            } else {
                tracing::error!(error = %e, "User insert failed");
                AuthError::store_unavailable()
            }
        })?;

        Ok(Self::identity_from(inserted))
    }

    /// Mint the canonical identity from a stored row
    ///
    /// Role integers outside the enum are coerced to `General` here, so no
    /// issued credential ever carries an unrecognized role.
    pub fn identity_from(model: user::Model) -> Identity {
        Identity {
            id: model.id,
            username: model.username,
            role: Role::from(model.role),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
        }
    }

    /// Hash a password with Argon2id using the pepper as secret parameter
    fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);

        let hash = self
            .hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                AuthError::store_unavailable()
            })?
            .to_string();

        Ok(hash)
    }

    fn hasher(&self) -> Result<Argon2<'_>, AuthError> {
        Argon2::new_with_secret(
            self.pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to initialize Argon2 with secret");
            AuthError::store_unavailable()
        })
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("db", &"<connection>")
            .field("pepper", &"<redacted>")
            .finish()
    }
}
