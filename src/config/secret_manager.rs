use std::fmt;

/// Custom error type for secret-related failures
#[derive(Debug)]
pub enum SecretError {
    Missing { secret_name: String },
    TooShort { secret_name: String, expected: usize, actual: usize },
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { secret_name } => {
                write!(f, "Required secret '{}' is missing", secret_name)
            }
            Self::TooShort { secret_name, expected, actual } => {
                write!(
                    f,
                    "Secret '{}' must be at least {} characters, got {}",
                    secret_name, expected, actual
                )
            }
        }
    }
}

impl std::error::Error for SecretError {}

/// Centralized manager for application secrets
///
/// The JWT secret is shared between the web session signer and the mobile
/// token signer; the pepper feeds password hashing only.
pub struct SecretManager {
    jwt_secret: String,
    pepper: String,
}

impl SecretManager {
    const JWT_SECRET_VAR: &'static str = "JWT_SECRET";
    const JWT_SECRET_MIN_LENGTH: usize = 32;
    const PEPPER_VAR: &'static str = "PEPPER";
    const PEPPER_MIN_LENGTH: usize = 16;

    /// Initialize the SecretManager by loading and validating all secrets
    ///
    /// # Errors
    /// Returns `SecretError` if any required secret is missing or too short
    pub fn init() -> Result<Self, SecretError> {
        let jwt_secret = Self::load_secret(Self::JWT_SECRET_VAR, Self::JWT_SECRET_MIN_LENGTH)?;
        let pepper = Self::load_secret(Self::PEPPER_VAR, Self::PEPPER_MIN_LENGTH)?;

        Ok(Self { jwt_secret, pepper })
    }

    /// Get the shared signing secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Get the pepper for password hashing
    pub fn pepper(&self) -> &str {
        &self.pepper
    }

    fn load_secret(name: &str, min_length: usize) -> Result<String, SecretError> {
        let value = std::env::var(name).map_err(|_| SecretError::Missing {
            secret_name: name.to_string(),
        })?;

        if value.len() < min_length {
            return Err(SecretError::TooShort {
                secret_name: name.to_string(),
                expected: min_length,
                actual: value.len(),
            });
        }

        Ok(value)
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"<redacted>")
            .field("pepper", &"<redacted>")
            .finish()
    }
}
