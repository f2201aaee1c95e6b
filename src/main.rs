use poem::{listener::TcpListener, middleware::CookieJarManager, EndpointExt, Route, Server};
use poem_openapi::OpenApiService;
use std::sync::Arc;

use stockroom_backend::api::{
    ApiGuard, AuthApi, CategoriesApi, HealthApi, InventoryApi, MobileApi, ProductsApi, SsoApi,
    SuppliersApi, WarehousesApi,
};
use stockroom_backend::config::{self, BootstrapSettings, SecretManager};
use stockroom_backend::services::{AuthResolver, AuthService, SessionService, TokenService};
use stockroom_backend::stores::{
    CategoryStore, CredentialStore, InventoryStore, ProductStore, SupplierStore, WarehouseStore,
};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::logging::init_logging().expect("Failed to initialize logging");

    let settings = BootstrapSettings::from_env();
    let secrets = SecretManager::init().expect("Failed to load required secrets");

    // Connect to database and run migrations
    let db = config::database::init_database(settings.database_url())
        .await
        .expect("Failed to connect to database");
    config::database::migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Connected to database: {}", settings.database_url());

    // Stores
    let credential_store = Arc::new(CredentialStore::new(
        db.clone(),
        secrets.pepper().to_string(),
    ));
    let product_store = Arc::new(ProductStore::new(db.clone()));
    let category_store = Arc::new(CategoryStore::new(db.clone()));
    let supplier_store = Arc::new(SupplierStore::new(db.clone()));
    let warehouse_store = Arc::new(WarehouseStore::new(db.clone()));
    let inventory_store = Arc::new(InventoryStore::new(db.clone()));

    // Auth services share one signing secret across both credential kinds
    let session_service = Arc::new(SessionService::new(
        secrets.jwt_secret().to_string(),
        settings.environment(),
    ));
    let token_service = Arc::new(TokenService::new(secrets.jwt_secret().to_string()));
    let auth_resolver = Arc::new(AuthResolver::new(
        session_service.clone(),
        token_service.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        credential_store.clone(),
        session_service.clone(),
        token_service.clone(),
    ));

    // Create OpenAPI service with all API implementations
    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(auth_service.clone(), auth_resolver.clone()),
            MobileApi::new(auth_service.clone(), token_service.clone()),
            SsoApi::new(auth_service.clone(), settings.sso_email_header().to_string()),
            ProductsApi::new(product_store, auth_resolver.clone()),
            CategoriesApi::new(category_store, auth_resolver.clone()),
            SuppliersApi::new(supplier_store, auth_resolver.clone()),
            WarehousesApi::new(warehouse_store, auth_resolver.clone()),
            InventoryApi::new(inventory_store, auth_resolver.clone()),
        ),
        "Stockroom API",
        "1.0.0",
    )
    .server("http://localhost:3000/api");

    let ui = api_service.swagger_ui();

    // Compose routes: API under /api behind the edge gate, Swagger under /swagger
    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .with(ApiGuard)
        .with(CookieJarManager::new());

    tracing::info!("Starting server on {}", settings.bind_addr());

    Server::new(TcpListener::bind(settings.bind_addr().to_string()))
        .run(app)
        .await
}
