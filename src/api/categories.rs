use poem::Request;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::ProtectedApi;
use crate::errors::api::ApiError;
use crate::services::AuthResolver;
use crate::stores::CategoryStore;
use crate::types::dto::categories::{Category, CreateCategoryRequest};
use crate::types::dto::common::MessageResponse;

/// Category API endpoints
pub struct CategoriesApi {
    category_store: Arc<CategoryStore>,
    auth_resolver: Arc<AuthResolver>,
}

impl CategoriesApi {
    /// Create a new CategoriesApi
    pub fn new(category_store: Arc<CategoryStore>, auth_resolver: Arc<AuthResolver>) -> Self {
        Self {
            category_store,
            auth_resolver,
        }
    }
}

impl ProtectedApi for CategoriesApi {
    fn resolver(&self) -> &AuthResolver {
        &self.auth_resolver
    }
}

/// API tags for category endpoints
#[derive(Tags)]
enum CategoryTags {
    /// Category endpoints
    Categories,
}

#[OpenApi]
impl CategoriesApi {
    /// List all categories
    #[oai(path = "/categories", method = "get", tag = "CategoryTags::Categories")]
    async fn list(&self, req: &Request) -> Result<Json<Vec<Category>>, ApiError> {
        self.require_identity(req)?;

        let categories = self.category_store.list().await?;

        Ok(Json(categories.into_iter().map(Category::from).collect()))
    }

    /// Create a category (admin only)
    #[oai(path = "/categories", method = "post", tag = "CategoryTags::Categories")]
    async fn create(
        &self,
        req: &Request,
        body: Json<CreateCategoryRequest>,
    ) -> Result<Json<Category>, ApiError> {
        self.require_admin(req)?;

        let category = self.category_store.create(&body).await?;

        Ok(Json(Category::from(category)))
    }

    /// Delete a category (admin only); its products become uncategorized
    #[oai(path = "/categories/:id", method = "delete", tag = "CategoryTags::Categories")]
    async fn delete(&self, req: &Request, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        self.require_admin(req)?;

        self.category_store.delete(id.0).await?;

        Ok(Json(MessageResponse {
            message: "Category deleted".to_string(),
        }))
    }
}
