// API layer - HTTP endpoints
pub mod auth;
pub mod categories;
pub mod guard;
pub mod health;
pub mod inventory;
pub mod mobile;
pub mod products;
pub mod sso;
pub mod suppliers;
pub mod warehouses;

pub use auth::AuthApi;
pub use categories::CategoriesApi;
pub use guard::ApiGuard;
pub use health::HealthApi;
pub use inventory::InventoryApi;
pub use mobile::MobileApi;
pub use products::ProductsApi;
pub use sso::SsoApi;
pub use suppliers::SuppliersApi;
pub use warehouses::WarehousesApi;

use poem::Request;

use crate::errors::api::ApiError;
use crate::services::AuthResolver;
use crate::types::internal::auth::ResolvedAuth;

/// Handler-level authentication shared by every protected API
///
/// The edge gate only checks cookie presence, so each handler re-resolves
/// the request's identity here; no route trusts the gate alone.
pub trait ProtectedApi {
    fn resolver(&self) -> &AuthResolver;

    /// Resolve the request's identity or reject with 401
    fn require_identity(&self, req: &Request) -> Result<ResolvedAuth, ApiError> {
        self.resolver()
            .resolve_request(req)
            .ok_or_else(ApiError::unauthorized)
    }

    /// Resolve the request's identity and require the admin role
    fn require_admin(&self, req: &Request) -> Result<ResolvedAuth, ApiError> {
        let resolved = self.require_identity(req)?;

        if !resolved.identity.is_admin() {
            return Err(ApiError::forbidden());
        }

        Ok(resolved)
    }
}
