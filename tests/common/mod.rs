use poem::{middleware::CookieJarManager, EndpointExt, Response, Route};
use poem_openapi::OpenApiService;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use stockroom_backend::api::{
    ApiGuard, AuthApi, CategoriesApi, HealthApi, InventoryApi, MobileApi, ProductsApi, SsoApi,
    SuppliersApi, WarehousesApi,
};
use stockroom_backend::config::Environment;
use stockroom_backend::services::{AuthResolver, AuthService, SessionService, TokenService};
use stockroom_backend::stores::{
    CategoryStore, CredentialStore, InventoryStore, ProductStore, SupplierStore, WarehouseStore,
};
use stockroom_backend::types::db::user;
use stockroom_backend::types::internal::auth::Role;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";
pub const TEST_PEPPER: &str = "integration-test-pepper";
pub const SSO_HEADER: &str = "X-Auth-Request-Email";

/// A fully wired application over an in-memory database, mirroring the
/// production route composition (edge gate included)
pub struct TestApp {
    pub app: poem::endpoint::BoxEndpoint<'static, Response>,
    pub credential_store: Arc<CredentialStore>,
    pub db: DatabaseConnection,
}

pub async fn setup_app() -> TestApp {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let credential_store = Arc::new(CredentialStore::new(db.clone(), TEST_PEPPER.to_string()));

    let session_service = Arc::new(SessionService::new(
        TEST_SECRET.to_string(),
        Environment::Development,
    ));
    let token_service = Arc::new(TokenService::new(TEST_SECRET.to_string()));
    let auth_resolver = Arc::new(AuthResolver::new(
        session_service.clone(),
        token_service.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        credential_store.clone(),
        session_service,
        token_service.clone(),
    ));

    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(auth_service.clone(), auth_resolver.clone()),
            MobileApi::new(auth_service.clone(), token_service),
            SsoApi::new(auth_service, SSO_HEADER.to_string()),
            ProductsApi::new(Arc::new(ProductStore::new(db.clone())), auth_resolver.clone()),
            CategoriesApi::new(Arc::new(CategoryStore::new(db.clone())), auth_resolver.clone()),
            SuppliersApi::new(Arc::new(SupplierStore::new(db.clone())), auth_resolver.clone()),
            WarehousesApi::new(Arc::new(WarehouseStore::new(db.clone())), auth_resolver.clone()),
            InventoryApi::new(Arc::new(InventoryStore::new(db.clone())), auth_resolver),
        ),
        "Stockroom API",
        "test",
    );

    let app = Route::new()
        .nest("/api", api_service)
        .with(ApiGuard)
        .with(CookieJarManager::new())
        .map_to_response()
        .boxed();

    TestApp {
        app,
        credential_store,
        db,
    }
}

/// Seed a general-role user
pub async fn seed_user(app: &TestApp, username: &str, password: &str, email: Option<&str>) {
    app.credential_store
        .add_user(
            username.to_string(),
            password.to_string(),
            None,
            None,
            email.map(str::to_string),
        )
        .await
        .expect("Failed to seed user");
}

/// Seed a user and promote them to admin
pub async fn seed_admin(app: &TestApp, username: &str, password: &str) {
    seed_user(app, username, password, None).await;

    let model = app
        .credential_store
        .find_by_username(username)
        .await
        .expect("Lookup failed")
        .expect("Seeded user not found");

    let mut active: user::ActiveModel = model.into();
    active.role = Set(Role::Admin.as_i32());
    active.update(&app.db).await.expect("Failed to promote user");
}

/// Build a JSON POST request
pub fn post_json(path: &str, body: serde_json::Value) -> poem::Request {
    poem::Request::builder()
        .method(poem::http::Method::POST)
        .uri(path.parse().unwrap())
        .content_type("application/json")
        .body(body.to_string())
}

/// Build a JSON POST request carrying extra headers
pub fn post_json_with_headers(
    path: &str,
    body: serde_json::Value,
    headers: &[(&str, &str)],
) -> poem::Request {
    let mut builder = poem::Request::builder()
        .method(poem::http::Method::POST)
        .uri(path.parse().unwrap())
        .content_type("application/json");

    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    builder.body(body.to_string())
}

/// Build a GET request carrying extra headers
pub fn get_with_headers(path: &str, headers: &[(&str, &str)]) -> poem::Request {
    let mut builder = poem::Request::builder().uri(path.parse().unwrap());

    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    builder.finish()
}

/// Extract the session cookie pair ("token=...") from a response
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("token="))
        .map(|value| value.split(';').next().unwrap().to_string())
}

/// Full Set-Cookie line for the session cookie, attributes included
pub fn session_set_cookie_line(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("token="))
        .map(str::to_string)
}

/// Read a JSON response body
pub async fn json_body(response: Response) -> serde_json::Value {
    let body = response
        .into_body()
        .into_string()
        .await
        .expect("Failed to read body");
    serde_json::from_str(&body).expect("Body is not JSON")
}
