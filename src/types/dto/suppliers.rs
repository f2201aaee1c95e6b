use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::supplier;

/// Supplier as returned by the API
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Supplier id
    pub id: i32,

    /// Supplier name
    pub name: String,

    /// Contact person
    pub contact_name: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Postal address
    pub address: Option<String>,
}

impl From<supplier::Model> for Supplier {
    fn from(model: supplier::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            contact_name: model.contact_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
        }
    }
}

/// Request model for creating a supplier
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierRequest {
    /// Supplier name
    #[oai(validator(min_length = 1, max_length = 200))]
    pub name: String,

    /// Contact person
    pub contact_name: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Postal address
    pub address: Option<String>,
}

/// Request model for updating a supplier; omitted fields are left unchanged
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierRequest {
    /// Supplier name
    #[oai(validator(min_length = 1, max_length = 200))]
    pub name: Option<String>,

    /// Contact person
    pub contact_name: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Postal address
    pub address: Option<String>,
}
