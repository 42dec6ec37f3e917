//! End-to-end tests driving the router through tower without a socket

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use shop_service::domain::{Item, Store};
use shop_service::infrastructure::crypto::JwtConfig;
use shop_service::{create_api_router, JsonFileStore};

async fn app(dir: &tempfile::TempDir) -> Router {
    let store = JsonFileStore::open(dir.path().join("db.json")).await.unwrap();
    create_api_router(Arc::new(store), JwtConfig::default())
}

/// Router plus one pre-seeded catalog item with a known id
async fn app_with_widget(dir: &tempfile::TempDir) -> Router {
    let store = JsonFileStore::open(dir.path().join("db.json")).await.unwrap();
    store
        .create_item(Item {
            id: "a1".to_string(),
            title: "Widget".to_string(),
            category: "Home".to_string(),
            price: 200.0,
            image: None,
            description: None,
        })
        .await
        .unwrap();
    create_api_router(Arc::new(store), JwtConfig::default())
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn signup(app: &Router, name: &str, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn signup_returns_token_usable_for_me() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir).await;

    let token = signup(&app, "Bob", "bob@x.com", "pass1").await;
    let (status, body) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "bob@x.com");
    assert_eq!(body["name"], "Bob");
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
async fn duplicate_signup_is_a_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir).await;
    signup(&app, "Bob", "bob@x.com", "pass1").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({ "email": "bob@x.com", "password": "pass2" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already used");
}

#[tokio::test]
async fn login_failures_share_one_message() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir).await;
    signup(&app, "Bob", "bob@x.com", "pass1").await;

    let (unknown_status, unknown) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "nobody@x.com", "password": "pass1" })),
    )
    .await;
    let (wrong_status, wrong) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "bob@x.com", "password": "nope1" })),
    )
    .await;
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown["message"], wrong["message"]);
    assert_eq!(unknown["message"], "Invalid credentials");
}

#[tokio::test]
async fn protected_routes_reject_missing_and_bad_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir).await;

    let (status, body) = send(&app, "GET", "/api/cart", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing token");

    let (status, body) = send(&app, "GET", "/api/cart", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");

    let (status, _) = send(
        &app,
        "POST",
        "/api/items",
        None,
        Some(json!({ "title": "X", "price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn catalog_reads_are_public_and_filterable() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_widget(&dir).await;
    let token = signup(&app, "Bob", "bob@x.com", "pass1").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/items",
        Some(&token),
        Some(json!({ "title": "Gadget", "category": "Electronics", "price": 500.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/api/items", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/api/items?category=home", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Widget");

    let (_, body) = send(&app, "GET", "/api/items?q=gad&min=400&max=600", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Gadget");

    // non-numeric bounds are ignored rather than rejected
    let (status, body) = send(&app, "GET", "/api/items?min=abc", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, "GET", "/api/items/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found");
}

#[tokio::test]
async fn item_update_and_delete_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_widget(&dir).await;
    let token = signup(&app, "Bob", "bob@x.com", "pass1").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/items/a1",
        Some(&token),
        Some(json!({ "price": 150.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 150.0);
    assert_eq!(body["title"], "Widget");

    let (status, body) = send(&app, "DELETE", "/api/items/a1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let (status, _) = send(&app, "GET", "/api/items/a1", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_item_requires_title_and_price() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir).await;
    let token = signup(&app, "Bob", "bob@x.com", "pass1").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/items",
        Some(&token),
        Some(json!({ "title": "No price" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "title & price required");
}

#[tokio::test]
async fn cart_add_patch_and_remove_flow() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_widget(&dir).await;
    let token = signup(&app, "Bob", "bob@x.com", "pass1").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/cart",
        Some(&token),
        Some(json!({ "itemId": "a1", "qty": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["items"], json!([{ "itemId": "a1", "qty": 2 }]));

    // adding again accumulates onto the same line
    let (_, body) = send(
        &app,
        "POST",
        "/api/cart",
        Some(&token),
        Some(json!({ "itemId": "a1" })),
    )
    .await;
    assert_eq!(body["items"], json!([{ "itemId": "a1", "qty": 3 }]));

    // quantity below one is raised to one
    let (status, body) = send(
        &app,
        "PATCH",
        "/api/cart/a1",
        Some(&token),
        Some(json!({ "qty": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["qty"], 1);

    let (status, body) = send(&app, "DELETE", "/api/cart/a1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));

    // removal is idempotent
    let (status, _) = send(&app, "DELETE", "/api/cart/a1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn cart_error_cases() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_widget(&dir).await;
    let token = signup(&app, "Bob", "bob@x.com", "pass1").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/cart",
        Some(&token),
        Some(json!({ "qty": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "itemId required");

    let (status, body) = send(
        &app,
        "POST",
        "/api/cart",
        Some(&token),
        Some(json!({ "itemId": "ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item not found");

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/cart/a1",
        Some(&token),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "qty required");

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/cart/a1",
        Some(&token),
        Some(json!({ "qty": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not in cart");
}

#[tokio::test]
async fn carts_are_scoped_to_the_token_owner() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_widget(&dir).await;
    let bob = signup(&app, "Bob", "bob@x.com", "pass1").await;
    let alice = signup(&app, "Alice", "alice@x.com", "pass1").await;

    send(
        &app,
        "POST",
        "/api/cart",
        Some(&bob),
        Some(json!({ "itemId": "a1", "qty": 2 })),
    )
    .await;

    let (_, body) = send(&app, "GET", "/api/cart", Some(&alice), None).await;
    assert_eq!(body["items"], json!([]));

    let (_, body) = send(&app, "GET", "/api/cart", Some(&bob), None).await;
    assert_eq!(body["items"][0]["qty"], 2);
}

#[tokio::test]
async fn health_reports_ok_without_auth() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_widget(&dir).await;

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"]["items"], 1);
}
