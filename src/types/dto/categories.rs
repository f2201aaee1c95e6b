use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::category;

/// Category as returned by the API
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category id
    pub id: i32,

    /// Unique category name
    pub name: String,

    /// Free-form description
    pub description: Option<String>,
}

impl From<category::Model> for Category {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

/// Request model for creating a category
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    /// Unique category name
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,

    /// Free-form description
    pub description: Option<String>,
}
