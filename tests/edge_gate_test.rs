mod common;

use common::*;
use poem::http::StatusCode;
use poem::Endpoint;
use serde_json::json;

async fn mobile_token(test_app: &common::TestApp, username: &str, password: &str) -> String {
    let login = test_app
        .app
        .get_response(post_json(
            "/api/mobile/login",
            json!({"username": username, "password": password}),
        ))
        .await;
    assert_eq!(login.status(), StatusCode::OK);

    let body = json_body(login).await;
    body["token"].as_str().unwrap().to_string()
}

async fn web_cookie(test_app: &common::TestApp, username: &str, password: &str) -> String {
    let login = test_app
        .app
        .get_response(post_json(
            "/api/auth/login",
            json!({"username": username, "password": password}),
        ))
        .await;
    assert_eq!(login.status(), StatusCode::OK);

    session_cookie(&login).expect("Session cookie should be set")
}

#[tokio::test]
async fn test_health_is_public() {
    let test_app = setup_app().await;

    let response = test_app
        .app
        .get_response(get_with_headers("/api/health", &[]))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_protected_path_without_cookie_is_rejected_at_the_edge() {
    let test_app = setup_app().await;

    let response = test_app
        .app
        .get_response(get_with_headers("/api/products", &[]))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body, json!({"error": "Unauthorized"}));
}

#[tokio::test]
async fn test_valid_bearer_without_cookie_is_still_rejected_at_the_edge() {
    // The gate is blind to the bearer path: a perfectly valid mobile token
    // does not get a cookie-less request past it on non-excluded paths
    let test_app = setup_app().await;
    seed_user(&test_app, "hank", "hankpass", None).await;

    let token = mobile_token(&test_app, "hank", "hankpass").await;
    let bearer = format!("Bearer {}", token);

    let response = test_app
        .app
        .get_response(get_with_headers("/api/products", &[("Authorization", &bearer)]))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body, json!({"error": "Unauthorized"}));
}

#[tokio::test]
async fn test_garbage_cookie_passes_the_gate_but_fails_at_the_handler() {
    let test_app = setup_app().await;

    let response = test_app
        .app
        .get_response(get_with_headers(
            "/api/products",
            &[("Cookie", "token=garbage")],
        ))
        .await;

    // Still 401, but from the handler's resolver, not the gate: the body is
    // the structured API error
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["error"], "unauthorized");
    assert_eq!(body["status_code"], 401);
}

#[tokio::test]
async fn test_bearer_plus_any_cookie_authenticates_as_mobile() {
    // An API client sending both credential kinds passes the gate on cookie
    // presence and authenticates at the handler via the bearer token
    let test_app = setup_app().await;
    seed_user(&test_app, "hank", "hankpass", None).await;

    let token = mobile_token(&test_app, "hank", "hankpass").await;
    let bearer = format!("Bearer {}", token);

    let response = test_app
        .app
        .get_response(get_with_headers(
            "/api/products",
            &[("Authorization", &bearer), ("Cookie", "token=garbage")],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_general_user_cannot_mutate_catalog() {
    let test_app = setup_app().await;
    seed_user(&test_app, "vera", "verapass", None).await;

    let cookie = web_cookie(&test_app, "vera", "verapass").await;

    let response = test_app
        .app
        .get_response(post_json_with_headers(
            "/api/products",
            json!({"sku": "FK-100", "name": "Forklift", "price": 15000.0}),
            &[("Cookie", &cookie)],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_can_mutate_and_general_can_read() {
    let test_app = setup_app().await;
    seed_admin(&test_app, "boss", "bosspass").await;
    seed_user(&test_app, "vera", "verapass", None).await;

    let admin_cookie = web_cookie(&test_app, "boss", "bosspass").await;

    let create = test_app
        .app
        .get_response(post_json_with_headers(
            "/api/products",
            json!({"sku": "FK-100", "name": "Forklift", "price": 15000.0}),
            &[("Cookie", &admin_cookie)],
        ))
        .await;
    assert_eq!(create.status(), StatusCode::OK);

    let user_cookie = web_cookie(&test_app, "vera", "verapass").await;
    let list = test_app
        .app
        .get_response(get_with_headers("/api/products", &[("Cookie", &user_cookie)]))
        .await;

    assert_eq!(list.status(), StatusCode::OK);
    let body = json_body(list).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["sku"], "FK-100");
}

#[tokio::test]
async fn test_admin_inventory_flow_over_http() {
    let test_app = setup_app().await;
    seed_admin(&test_app, "boss", "bosspass").await;

    let cookie = web_cookie(&test_app, "boss", "bosspass").await;
    let headers = [("Cookie", cookie.as_str())];

    let warehouse = test_app
        .app
        .get_response(post_json_with_headers(
            "/api/warehouses",
            json!({"name": "Main", "location": "Rotterdam"}),
            &headers,
        ))
        .await;
    assert_eq!(warehouse.status(), StatusCode::OK);
    let warehouse = json_body(warehouse).await;

    let product = test_app
        .app
        .get_response(post_json_with_headers(
            "/api/products",
            json!({"sku": "WRAP-1", "name": "Stretch wrap", "price": 12.5}),
            &headers,
        ))
        .await;
    assert_eq!(product.status(), StatusCode::OK);
    let product = json_body(product).await;

    let adjust = test_app
        .app
        .get_response(post_json_with_headers(
            "/api/inventory/adjust",
            json!({
                "productId": product["id"],
                "warehouseId": warehouse["id"],
                "delta": 25
            }),
            &headers,
        ))
        .await;
    assert_eq!(adjust.status(), StatusCode::OK);
    let level = json_body(adjust).await;
    assert_eq!(level["quantity"], 25);

    let list = test_app
        .app
        .get_response(get_with_headers("/api/inventory", &[("Cookie", &cookie)]))
        .await;
    assert_eq!(list.status(), StatusCode::OK);
    let body = json_body(list).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}
