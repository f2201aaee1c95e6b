use std::env;
use std::fmt;

/// Deployment environment, derived from `APP_ENV`
///
/// Controls the `Secure` attribute on the session cookie: only
/// production-like deployments require HTTPS-only cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Bootstrap settings for infrastructure configuration
pub struct BootstrapSettings {
    database_url: String,
    bind_addr: String,
    environment: Environment,
    sso_email_header: String,
}

impl BootstrapSettings {
    /// Load bootstrap settings from environment variables
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://warehouse.db?mode=rwc".to_string());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        let sso_email_header = env::var("SSO_EMAIL_HEADER")
            .unwrap_or_else(|_| "X-Auth-Request-Email".to_string());

        Self {
            database_url,
            bind_addr,
            environment,
            sso_email_header,
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Trusted header carrying the SSO-verified email, set by the identity
    /// proxy in front of this service
    pub fn sso_email_header(&self) -> &str {
        &self.sso_email_header
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("bind_addr", &self.bind_addr)
            .field("environment", &self.environment)
            .field("sso_email_header", &self.sso_email_header)
            .finish()
    }
}
