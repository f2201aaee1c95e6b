use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::warehouse;

/// Warehouse as returned by the API
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    /// Warehouse id
    pub id: i32,

    /// Unique warehouse name
    pub name: String,

    /// Physical location
    pub location: Option<String>,

    /// Storage capacity in units, if tracked
    pub capacity: Option<i32>,
}

impl From<warehouse::Model> for Warehouse {
    fn from(model: warehouse::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            location: model.location,
            capacity: model.capacity,
        }
    }
}

/// Request model for creating a warehouse
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateWarehouseRequest {
    /// Unique warehouse name
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,

    /// Physical location
    pub location: Option<String>,

    /// Storage capacity in units
    #[oai(validator(minimum(value = 0.0)))]
    pub capacity: Option<i32>,
}
