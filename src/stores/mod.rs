// Stores layer - Database access
pub mod category_store;
pub mod credential_store;
pub mod inventory_store;
pub mod product_store;
pub mod supplier_store;
pub mod warehouse_store;

pub use category_store::CategoryStore;
pub use credential_store::CredentialStore;
pub use inventory_store::InventoryStore;
pub use product_store::ProductStore;
pub use supplier_store::SupplierStore;
pub use warehouse_store::WarehouseStore;
