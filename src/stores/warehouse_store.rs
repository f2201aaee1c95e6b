use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::errors::api::ApiError;
use crate::types::db::warehouse::{self, ActiveModel, Entity as Warehouse};
use crate::types::dto::warehouses::CreateWarehouseRequest;

/// WarehouseStore manages warehouse locations
pub struct WarehouseStore {
    db: DatabaseConnection,
}

impl WarehouseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all warehouses ordered by name
    pub async fn list(&self) -> Result<Vec<warehouse::Model>, ApiError> {
        Warehouse::find()
            .order_by_asc(warehouse::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Warehouse list query failed");
                ApiError::internal_error()
            })
    }

    /// Find a warehouse by id
    pub async fn find(&self, id: i32) -> Result<Option<warehouse::Model>, ApiError> {
        Warehouse::find_by_id(id).one(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, warehouse_id = id, "Warehouse lookup failed");
            ApiError::internal_error()
        })
    }

    /// Create a warehouse
    ///
    /// # Returns
    /// * `Err(ApiError::BadRequest)` - Name already taken
    pub async fn create(&self, request: &CreateWarehouseRequest) -> Result<warehouse::Model, ApiError> {
        let new_warehouse = ActiveModel {
            name: Set(request.name.clone()),
            location: Set(request.location.clone()),
            capacity: Set(request.capacity),
            ..Default::default()
        };

        new_warehouse.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::bad_request("Warehouse name already exists")
            } else {
                tracing::error!(error = %e, "Warehouse insert failed");
                ApiError::internal_error()
            }
        })
    }

    /// Delete a warehouse by id; its inventory records go with it
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let result = Warehouse::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, warehouse_id = id, "Warehouse delete failed");
            ApiError::internal_error()
        })?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found("Warehouse not found"));
        }

        Ok(())
    }
}
