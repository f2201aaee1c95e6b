use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::product;

/// Product as returned by the API
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product id
    pub id: i32,

    /// Stock keeping unit, unique
    pub sku: String,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: Option<String>,

    /// Unit price
    pub price: f64,

    /// Owning category id, if categorized
    pub category_id: Option<i32>,

    /// Supplying vendor id, if known
    pub supplier_id: Option<i32>,

    /// Creation time (Unix timestamp)
    pub created_at: i64,

    /// Last modification time (Unix timestamp)
    pub updated_at: i64,
}

impl From<product::Model> for Product {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            sku: model.sku,
            name: model.name,
            description: model.description,
            price: model.price,
            category_id: model.category_id,
            supplier_id: model.supplier_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Request model for creating a product
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Stock keeping unit, must be unique
    #[oai(validator(min_length = 1, max_length = 64))]
    pub sku: String,

    /// Display name
    #[oai(validator(min_length = 1, max_length = 200))]
    pub name: String,

    /// Free-form description
    pub description: Option<String>,

    /// Unit price
    #[oai(validator(minimum(value = 0.0)))]
    pub price: f64,

    /// Owning category id
    pub category_id: Option<i32>,

    /// Supplying vendor id
    pub supplier_id: Option<i32>,
}

/// Request model for updating a product; omitted fields are left unchanged
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// Display name
    #[oai(validator(min_length = 1, max_length = 200))]
    pub name: Option<String>,

    /// Free-form description
    pub description: Option<String>,

    /// Unit price
    #[oai(validator(minimum(value = 0.0)))]
    pub price: Option<f64>,

    /// Owning category id
    pub category_id: Option<i32>,

    /// Supplying vendor id
    pub supplier_id: Option<i32>,
}
