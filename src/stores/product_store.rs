use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::errors::api::ApiError;
use crate::types::db::product::{self, ActiveModel, Entity as Product};
use crate::types::dto::products::{CreateProductRequest, UpdateProductRequest};

/// ProductStore manages the product catalog
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all products ordered by id
    pub async fn list(&self) -> Result<Vec<product::Model>, ApiError> {
        Product::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Product list query failed");
                ApiError::internal_error()
            })
    }

    /// Find a product by id
    pub async fn find(&self, id: i32) -> Result<Option<product::Model>, ApiError> {
        Product::find_by_id(id).one(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, product_id = id, "Product lookup failed");
            ApiError::internal_error()
        })
    }

    /// Create a product
    ///
    /// # Returns
    /// * `Err(ApiError::BadRequest)` - SKU already taken
    pub async fn create(&self, request: &CreateProductRequest) -> Result<product::Model, ApiError> {
        let now = Utc::now().timestamp();

        let new_product = ActiveModel {
            sku: Set(request.sku.clone()),
            name: Set(request.name.clone()),
            description: Set(request.description.clone()),
            price: Set(request.price),
            category_id: Set(request.category_id),
            supplier_id: Set(request.supplier_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        new_product.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::bad_request("SKU already exists")
            } else {
                tracing::error!(error = %e, "Product insert failed");
                ApiError::internal_error()
            }
        })
    }

    /// Update a product; fields left as None are unchanged
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateProductRequest,
    ) -> Result<product::Model, ApiError> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Product not found"))?;

        let mut active: ActiveModel = existing.into();

        if let Some(name) = &request.name {
            active.name = Set(name.clone());
        }
        if let Some(description) = &request.description {
            active.description = Set(Some(description.clone()));
        }
        if let Some(price) = request.price {
            active.price = Set(price);
        }
        if let Some(category_id) = request.category_id {
            active.category_id = Set(Some(category_id));
        }
        if let Some(supplier_id) = request.supplier_id {
            active.supplier_id = Set(Some(supplier_id));
        }
        active.updated_at = Set(Utc::now().timestamp());

        active.update(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, product_id = id, "Product update failed");
            ApiError::internal_error()
        })
    }

    /// Delete a product by id
    ///
    /// # Returns
    /// * `Err(ApiError::NotFound)` - No such product
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let result = Product::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, product_id = id, "Product delete failed");
            ApiError::internal_error()
        })?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found("Product not found"));
        }

        Ok(())
    }
}
