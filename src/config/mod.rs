// Config layer - environment-driven application configuration
pub mod bootstrap_settings;
pub mod database;
pub mod logging;
pub mod secret_manager;

pub use bootstrap_settings::{BootstrapSettings, Environment};
pub use secret_manager::{SecretError, SecretManager};
