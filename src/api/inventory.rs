use poem::Request;
use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::ProtectedApi;
use crate::errors::api::ApiError;
use crate::services::AuthResolver;
use crate::stores::InventoryStore;
use crate::types::dto::inventory::{AdjustInventoryRequest, InventoryLevel};

/// Inventory API endpoints
pub struct InventoryApi {
    inventory_store: Arc<InventoryStore>,
    auth_resolver: Arc<AuthResolver>,
}

impl InventoryApi {
    /// Create a new InventoryApi
    pub fn new(inventory_store: Arc<InventoryStore>, auth_resolver: Arc<AuthResolver>) -> Self {
        Self {
            inventory_store,
            auth_resolver,
        }
    }
}

impl ProtectedApi for InventoryApi {
    fn resolver(&self) -> &AuthResolver {
        &self.auth_resolver
    }
}

/// API tags for inventory endpoints
#[derive(Tags)]
enum InventoryTags {
    /// Stock level endpoints
    Inventory,
}

#[OpenApi]
impl InventoryApi {
    /// List stock levels, optionally filtered to one warehouse
    #[oai(path = "/inventory", method = "get", tag = "InventoryTags::Inventory")]
    async fn list(
        &self,
        req: &Request,
        #[oai(name = "warehouseId")] warehouse_id: Query<Option<i32>>,
    ) -> Result<Json<Vec<InventoryLevel>>, ApiError> {
        self.require_identity(req)?;

        let levels = self.inventory_store.list(warehouse_id.0).await?;

        Ok(Json(levels.into_iter().map(InventoryLevel::from).collect()))
    }

    /// Adjust the stock of a product in a warehouse (admin only)
    #[oai(path = "/inventory/adjust", method = "post", tag = "InventoryTags::Inventory")]
    async fn adjust(
        &self,
        req: &Request,
        body: Json<AdjustInventoryRequest>,
    ) -> Result<Json<InventoryLevel>, ApiError> {
        self.require_admin(req)?;

        let level = self
            .inventory_store
            .adjust(body.product_id, body.warehouse_id, body.delta)
            .await?;

        Ok(Json(InventoryLevel::from(level)))
    }
}
