use serde::{Deserialize, Serialize};

/// Integer-backed user role
///
/// Stored as an integer in the users table and carried as a number inside
/// signed claims. Any stored value outside the enum is coerced to `General`
/// at the point an identity is minted, so no credential ever carries an
/// unrecognized role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Role {
    Admin,
    General,
}

impl Role {
    /// Integer value persisted for this role
    pub fn as_i32(self) -> i32 {
        match self {
            Role::Admin => 1,
            Role::General => 2,
        }
    }
}

impl From<i32> for Role {
    fn from(value: i32) -> Self {
        match value {
            1 => Role::Admin,
            _ => Role::General,
        }
    }
}

impl From<Role> for i32 {
    fn from(value: Role) -> Self {
        value.as_i32()
    }
}

/// Canonical authenticated principal
///
/// Identical in shape regardless of which credential mechanism produced it
/// (session cookie, mobile bearer token, or SSO-derived session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i32,
    pub username: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    /// The single role-gating predicate used by every admin-only route
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Which mechanism authenticated the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    Mobile,
    Web,
}

/// Output of the unified auth resolver: who, and via which mechanism
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAuth {
    pub identity: Identity,
    pub method: AuthMethod,
}

/// Identity fields as they appear inside signed claims
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&Identity> for ClaimsUser {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username.clone(),
            role: identity.role,
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            email: identity.email.clone(),
        }
    }
}

impl From<ClaimsUser> for Identity {
    fn from(user: ClaimsUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Claim set signed into mobile bearer tokens
///
/// Subject is the stringified user id; identity fields sit at the top level
/// so the verifier can structurally check them before trusting the token.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileClaims {
    pub sub: String,
    pub id: i32,
    pub username: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

/// Claim set signed into the web session cookie
///
/// Nests the identity under `user`, so a session cookie never satisfies the
/// mobile verifier's top-level structural check and vice versa, even though
/// both credentials share one signing secret.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user: ClaimsUser,
    pub iat: i64,
    pub exp: i64,
}
