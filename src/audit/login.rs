use super::mask_username;

/// Log a successful login
pub fn log_login_success(username: &str, method: &str) {
    tracing::info!(
        username = %mask_username(username),
        method,
        "Login succeeded"
    );
}

/// Log a failed login attempt
///
/// The username is masked; the caller-visible error never appears here, only
/// the internal reason.
pub fn log_login_failure(username: &str, method: &str, reason: &str) {
    tracing::warn!(
        username = %mask_username(username),
        method,
        reason,
        "Login failed"
    );
}

/// Log an SSO completion attempt for an email with no local account
pub fn log_sso_unmatched(email: &str) {
    tracing::warn!(
        email = %mask_username(email),
        "SSO email has no provisioned account"
    );
}

/// Log a logout
pub fn log_logout() {
    tracing::info!("Session revoked");
}
