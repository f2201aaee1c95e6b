use poem::Request;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::ProtectedApi;
use crate::errors::api::ApiError;
use crate::services::AuthResolver;
use crate::stores::ProductStore;
use crate::types::dto::products::{CreateProductRequest, Product, UpdateProductRequest};
use crate::types::dto::common::MessageResponse;

/// Product catalog API endpoints
pub struct ProductsApi {
    product_store: Arc<ProductStore>,
    auth_resolver: Arc<AuthResolver>,
}

impl ProductsApi {
    /// Create a new ProductsApi
    pub fn new(product_store: Arc<ProductStore>, auth_resolver: Arc<AuthResolver>) -> Self {
        Self {
            product_store,
            auth_resolver,
        }
    }
}

impl ProtectedApi for ProductsApi {
    fn resolver(&self) -> &AuthResolver {
        &self.auth_resolver
    }
}

/// API tags for product endpoints
#[derive(Tags)]
enum ProductTags {
    /// Product catalog endpoints
    Products,
}

#[OpenApi]
impl ProductsApi {
    /// List all products
    #[oai(path = "/products", method = "get", tag = "ProductTags::Products")]
    async fn list(&self, req: &Request) -> Result<Json<Vec<Product>>, ApiError> {
        self.require_identity(req)?;

        let products = self.product_store.list().await?;

        Ok(Json(products.into_iter().map(Product::from).collect()))
    }

    /// Create a product (admin only)
    #[oai(path = "/products", method = "post", tag = "ProductTags::Products")]
    async fn create(
        &self,
        req: &Request,
        body: Json<CreateProductRequest>,
    ) -> Result<Json<Product>, ApiError> {
        self.require_admin(req)?;

        let product = self.product_store.create(&body).await?;

        Ok(Json(Product::from(product)))
    }

    /// Get a product by id
    #[oai(path = "/products/:id", method = "get", tag = "ProductTags::Products")]
    async fn get(&self, req: &Request, id: Path<i32>) -> Result<Json<Product>, ApiError> {
        self.require_identity(req)?;

        let product = self
            .product_store
            .find(id.0)
            .await?
            .ok_or_else(|| ApiError::not_found("Product not found"))?;

        Ok(Json(Product::from(product)))
    }

    /// Update a product (admin only)
    #[oai(path = "/products/:id", method = "put", tag = "ProductTags::Products")]
    async fn update(
        &self,
        req: &Request,
        id: Path<i32>,
        body: Json<UpdateProductRequest>,
    ) -> Result<Json<Product>, ApiError> {
        self.require_admin(req)?;

        let product = self.product_store.update(id.0, &body).await?;

        Ok(Json(Product::from(product)))
    }

    /// Delete a product (admin only)
    #[oai(path = "/products/:id", method = "delete", tag = "ProductTags::Products")]
    async fn delete(&self, req: &Request, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        self.require_admin(req)?;

        self.product_store.delete(id.0).await?;

        Ok(Json(MessageResponse {
            message: "Product deleted".to_string(),
        }))
    }
}
