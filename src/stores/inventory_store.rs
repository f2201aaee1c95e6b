use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::api::ApiError;
use crate::types::db::inventory::{self, ActiveModel, Entity as Inventory};
use crate::types::db::{product, warehouse};

/// InventoryStore manages per-warehouse stock levels
pub struct InventoryStore {
    db: DatabaseConnection,
}

impl InventoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List stock levels, optionally restricted to one warehouse
    pub async fn list(&self, warehouse_id: Option<i32>) -> Result<Vec<inventory::Model>, ApiError> {
        let mut query = Inventory::find().order_by_asc(inventory::Column::Id);

        if let Some(warehouse_id) = warehouse_id {
            query = query.filter(inventory::Column::WarehouseId.eq(warehouse_id));
        }

        query.all(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, "Inventory list query failed");
            ApiError::internal_error()
        })
    }

    /// Adjust the stock of a product in a warehouse by a signed delta
    ///
    /// Creates the record on first adjustment; the resulting quantity is
    /// floored at zero.
    ///
    /// # Returns
    /// * `Err(ApiError::NotFound)` - Unknown product or warehouse
    pub async fn adjust(
        &self,
        product_id: i32,
        warehouse_id: i32,
        delta: i32,
    ) -> Result<inventory::Model, ApiError> {
        // Referenced rows must exist before an upsert is attempted
        let product_exists = product::Entity::find_by_id(product_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Product existence check failed");
                ApiError::internal_error()
            })?
            .is_some();
        if !product_exists {
            return Err(ApiError::not_found("Product not found"));
        }

        let warehouse_exists = warehouse::Entity::find_by_id(warehouse_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Warehouse existence check failed");
                ApiError::internal_error()
            })?
            .is_some();
        if !warehouse_exists {
            return Err(ApiError::not_found("Warehouse not found"));
        }

        let existing = Inventory::find()
            .filter(inventory::Column::ProductId.eq(product_id))
            .filter(inventory::Column::WarehouseId.eq(warehouse_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Inventory lookup failed");
                ApiError::internal_error()
            })?;

        let now = Utc::now().timestamp();

        match existing {
            Some(record) => {
                let new_quantity = (record.quantity + delta).max(0);

                let mut active: ActiveModel = record.into();
                active.quantity = Set(new_quantity);
                active.updated_at = Set(now);

                active.update(&self.db).await.map_err(|e| {
                    tracing::error!(error = %e, "Inventory update failed");
                    ApiError::internal_error()
                })
            }
            None => {
                let new_record = ActiveModel {
                    product_id: Set(product_id),
                    warehouse_id: Set(warehouse_id),
                    quantity: Set(delta.max(0)),
                    updated_at: Set(now),
                    ..Default::default()
                };

                new_record.insert(&self.db).await.map_err(|e| {
                    tracing::error!(error = %e, "Inventory insert failed");
                    ApiError::internal_error()
                })
            }
        }
    }
}
