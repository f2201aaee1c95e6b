use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::errors::api::ApiError;
use crate::types::db::category::{self, ActiveModel, Entity as Category};
use crate::types::dto::categories::CreateCategoryRequest;

/// CategoryStore manages product categories
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all categories ordered by name
    pub async fn list(&self) -> Result<Vec<category::Model>, ApiError> {
        Category::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Category list query failed");
                ApiError::internal_error()
            })
    }

    /// Create a category
    ///
    /// # Returns
    /// * `Err(ApiError::BadRequest)` - Name already taken
    pub async fn create(&self, request: &CreateCategoryRequest) -> Result<category::Model, ApiError> {
        let new_category = ActiveModel {
            name: Set(request.name.clone()),
            description: Set(request.description.clone()),
            ..Default::default()
        };

        new_category.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::bad_request("Category name already exists")
            } else {
                tracing::error!(error = %e, "Category insert failed");
                ApiError::internal_error()
            }
        })
    }

    /// Delete a category by id; products referencing it are uncategorized
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let result = Category::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, category_id = id, "Category delete failed");
            ApiError::internal_error()
        })?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found("Category not found"));
        }

        Ok(())
    }
}
