use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::inventory;

/// Stock level of one product in one warehouse
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct InventoryLevel {
    /// Record id
    pub id: i32,

    /// Product id
    pub product_id: i32,

    /// Warehouse id
    pub warehouse_id: i32,

    /// Units on hand
    pub quantity: i32,

    /// Last adjustment time (Unix timestamp)
    pub updated_at: i64,
}

impl From<inventory::Model> for InventoryLevel {
    fn from(model: inventory::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            warehouse_id: model.warehouse_id,
            quantity: model.quantity,
            updated_at: model.updated_at,
        }
    }
}

/// Request model for adjusting stock of a product in a warehouse
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct AdjustInventoryRequest {
    /// Product id
    pub product_id: i32,

    /// Warehouse id
    pub warehouse_id: i32,

    /// Signed change in units; the resulting quantity is floored at zero
    pub delta: i32,
}
