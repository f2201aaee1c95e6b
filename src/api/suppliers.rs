use poem::Request;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::ProtectedApi;
use crate::errors::api::ApiError;
use crate::services::AuthResolver;
use crate::stores::SupplierStore;
use crate::types::dto::suppliers::{CreateSupplierRequest, Supplier, UpdateSupplierRequest};
use crate::types::dto::common::MessageResponse;

/// Supplier API endpoints
pub struct SuppliersApi {
    supplier_store: Arc<SupplierStore>,
    auth_resolver: Arc<AuthResolver>,
}

impl SuppliersApi {
    /// Create a new SuppliersApi
    pub fn new(supplier_store: Arc<SupplierStore>, auth_resolver: Arc<AuthResolver>) -> Self {
        Self {
            supplier_store,
            auth_resolver,
        }
    }
}

impl ProtectedApi for SuppliersApi {
    fn resolver(&self) -> &AuthResolver {
        &self.auth_resolver
    }
}

/// API tags for supplier endpoints
#[derive(Tags)]
enum SupplierTags {
    /// Supplier endpoints
    Suppliers,
}

#[OpenApi]
impl SuppliersApi {
    /// List all suppliers
    #[oai(path = "/suppliers", method = "get", tag = "SupplierTags::Suppliers")]
    async fn list(&self, req: &Request) -> Result<Json<Vec<Supplier>>, ApiError> {
        self.require_identity(req)?;

        let suppliers = self.supplier_store.list().await?;

        Ok(Json(suppliers.into_iter().map(Supplier::from).collect()))
    }

    /// Create a supplier (admin only)
    #[oai(path = "/suppliers", method = "post", tag = "SupplierTags::Suppliers")]
    async fn create(
        &self,
        req: &Request,
        body: Json<CreateSupplierRequest>,
    ) -> Result<Json<Supplier>, ApiError> {
        self.require_admin(req)?;

        let supplier = self.supplier_store.create(&body).await?;

        Ok(Json(Supplier::from(supplier)))
    }

    /// Update a supplier (admin only)
    #[oai(path = "/suppliers/:id", method = "put", tag = "SupplierTags::Suppliers")]
    async fn update(
        &self,
        req: &Request,
        id: Path<i32>,
        body: Json<UpdateSupplierRequest>,
    ) -> Result<Json<Supplier>, ApiError> {
        self.require_admin(req)?;

        let supplier = self.supplier_store.update(id.0, &body).await?;

        Ok(Json(Supplier::from(supplier)))
    }

    /// Delete a supplier (admin only)
    #[oai(path = "/suppliers/:id", method = "delete", tag = "SupplierTags::Suppliers")]
    async fn delete(&self, req: &Request, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        self.require_admin(req)?;

        self.supplier_store.delete(id.0).await?;

        Ok(Json(MessageResponse {
            message: "Supplier deleted".to_string(),
        }))
    }
}
