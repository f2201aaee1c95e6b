use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::errors::api::ApiError;
use crate::types::db::supplier::{self, ActiveModel, Entity as Supplier};
use crate::types::dto::suppliers::{CreateSupplierRequest, UpdateSupplierRequest};

/// SupplierStore manages vendor records
pub struct SupplierStore {
    db: DatabaseConnection,
}

impl SupplierStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all suppliers ordered by name
    pub async fn list(&self) -> Result<Vec<supplier::Model>, ApiError> {
        Supplier::find()
            .order_by_asc(supplier::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Supplier list query failed");
                ApiError::internal_error()
            })
    }

    /// Find a supplier by id
    pub async fn find(&self, id: i32) -> Result<Option<supplier::Model>, ApiError> {
        Supplier::find_by_id(id).one(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, supplier_id = id, "Supplier lookup failed");
            ApiError::internal_error()
        })
    }

    /// Create a supplier
    pub async fn create(&self, request: &CreateSupplierRequest) -> Result<supplier::Model, ApiError> {
        let new_supplier = ActiveModel {
            name: Set(request.name.clone()),
            contact_name: Set(request.contact_name.clone()),
            email: Set(request.email.clone()),
            phone: Set(request.phone.clone()),
            address: Set(request.address.clone()),
            ..Default::default()
        };

        new_supplier.insert(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, "Supplier insert failed");
            ApiError::internal_error()
        })
    }

    /// Update a supplier; fields left as None are unchanged
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateSupplierRequest,
    ) -> Result<supplier::Model, ApiError> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Supplier not found"))?;

        let mut active: ActiveModel = existing.into();

        if let Some(name) = &request.name {
            active.name = Set(name.clone());
        }
        if let Some(contact_name) = &request.contact_name {
            active.contact_name = Set(Some(contact_name.clone()));
        }
        if let Some(email) = &request.email {
            active.email = Set(Some(email.clone()));
        }
        if let Some(phone) = &request.phone {
            active.phone = Set(Some(phone.clone()));
        }
        if let Some(address) = &request.address {
            active.address = Set(Some(address.clone()));
        }

        active.update(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, supplier_id = id, "Supplier update failed");
            ApiError::internal_error()
        })
    }

    /// Delete a supplier by id; products referencing it lose the link
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let result = Supplier::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            tracing::error!(error = %e, supplier_id = id, "Supplier delete failed");
            ApiError::internal_error()
        })?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found("Supplier not found"));
        }

        Ok(())
    }
}
