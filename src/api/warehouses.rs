use poem::Request;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::ProtectedApi;
use crate::errors::api::ApiError;
use crate::services::AuthResolver;
use crate::stores::WarehouseStore;
use crate::types::dto::warehouses::{CreateWarehouseRequest, Warehouse};
use crate::types::dto::common::MessageResponse;

/// Warehouse API endpoints
pub struct WarehousesApi {
    warehouse_store: Arc<WarehouseStore>,
    auth_resolver: Arc<AuthResolver>,
}

impl WarehousesApi {
    /// Create a new WarehousesApi
    pub fn new(warehouse_store: Arc<WarehouseStore>, auth_resolver: Arc<AuthResolver>) -> Self {
        Self {
            warehouse_store,
            auth_resolver,
        }
    }
}

impl ProtectedApi for WarehousesApi {
    fn resolver(&self) -> &AuthResolver {
        &self.auth_resolver
    }
}

/// API tags for warehouse endpoints
#[derive(Tags)]
enum WarehouseTags {
    /// Warehouse endpoints
    Warehouses,
}

#[OpenApi]
impl WarehousesApi {
    /// List all warehouses
    #[oai(path = "/warehouses", method = "get", tag = "WarehouseTags::Warehouses")]
    async fn list(&self, req: &Request) -> Result<Json<Vec<Warehouse>>, ApiError> {
        self.require_identity(req)?;

        let warehouses = self.warehouse_store.list().await?;

        Ok(Json(warehouses.into_iter().map(Warehouse::from).collect()))
    }

    /// Create a warehouse (admin only)
    #[oai(path = "/warehouses", method = "post", tag = "WarehouseTags::Warehouses")]
    async fn create(
        &self,
        req: &Request,
        body: Json<CreateWarehouseRequest>,
    ) -> Result<Json<Warehouse>, ApiError> {
        self.require_admin(req)?;

        let warehouse = self.warehouse_store.create(&body).await?;

        Ok(Json(Warehouse::from(warehouse)))
    }

    /// Delete a warehouse (admin only); its stock records go with it
    #[oai(path = "/warehouses/:id", method = "delete", tag = "WarehouseTags::Warehouses")]
    async fn delete(&self, req: &Request, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        self.require_admin(req)?;

        self.warehouse_store.delete(id.0).await?;

        Ok(Json(MessageResponse {
            message: "Warehouse deleted".to_string(),
        }))
    }
}
