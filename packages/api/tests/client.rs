//! End-to-end tests for `ApiClient` against an in-process backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use api::{
    ApiClient, ApiError, LoginRequest, OrderStatus, PageRequest, ProductRequest, Role,
};
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use store::{Cart, MemoryStore, Product, Session, SessionStore, UserProfile};

const TOKEN: &str = "good-token";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({"message": "Unauthorized"}))).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == "secret" {
        Json(json!({
            "data": {
                "id": 1, "firstName": "Ann", "lastName": "Lee",
                "email": body["email"], "role": "CUSTOMER", "token": TOKEN
            },
            "message": "Login successful"
        }))
        .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"message": "Bad credentials"}))).into_response()
    }
}

async fn my_orders(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "data": {"content": [], "currentPage": 0, "totalItems": 0, "totalPages": 0, "isLast": true}
    }))
    .into_response()
}

async fn profile(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "data": {"id": 1, "firstName": "Ann", "lastName": "Lee", "email": "ann@example.com", "role": "CUSTOMER"}
    }))
    .into_response()
}

async fn create_order(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let items = body["items"].as_array().cloned().unwrap_or_default();
    if items.iter().any(|item| item["productId"] == 99) {
        return (StatusCode::CONFLICT, Json(json!({"message": "Out of stock"}))).into_response();
    }
    Json(json!({
        "data": {"id": 500, "totalAmount": 20.0, "status": "PENDING", "items": []},
        "message": "Order created"
    }))
    .into_response()
}

async fn add_product() -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({"message": "Price must be positive"}))).into_response()
}

async fn get_product(Path(id): Path<i64>) -> Response {
    if id == 7 {
        return Json(json!({"data": "not a product"})).into_response();
    }
    Json(json!({"data": {"id": id, "name": "Mug", "price": 9.5, "quantity": 4}})).into_response()
}

async fn delete_product() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

async fn categories() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "Database down"}))).into_response()
}

async fn adjust(Path(id): Path<i64>, Query(query): Query<HashMap<String, String>>) -> Response {
    let change: i64 = query
        .get("quantityChange")
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    Json(json!({"data": {"id": id, "productId": 3, "quantity": 10 + change}})).into_response()
}

async fn db_metrics(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "message": "Performance metrics retrieved successfully",
        "data": {"findAll": {"count": 2, "avgTime": 4.5, "minTime": 3, "maxTime": 6, "totalTime": 9, "unit": "ms"}}
    }))
    .into_response()
}

async fn cache_metrics() -> Response {
    Json(json!({"message": "Cache metrics retrieved successfully"})).into_response()
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/users/login", post(login))
        .route("/api/users/profile", get(profile))
        .route("/api/orders/user", get(my_orders))
        .route("/api/orders/create", post(create_order))
        .route("/api/products/add", post(add_product))
        .route("/api/products/{id}", get(get_product).delete(delete_product))
        .route("/api/categories/public/all", get(categories))
        .route("/api/inventory/adjust/{id}", patch(adjust))
        .route("/api/performance/db-metrics", get(db_metrics))
        .route("/api/performance/cache-metrics", get(cache_metrics));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn signed_in_session() -> SessionStore<MemoryStore> {
    let sessions = SessionStore::new(MemoryStore::new());
    let user = UserProfile {
        id: 1,
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: "ann@example.com".to_string(),
        role: Role::Customer,
    };
    sessions.establish(Session::new(TOKEN, user).unwrap());
    sessions
}

fn counting_client(
    base_url: String,
    sessions: SessionStore<MemoryStore>,
) -> (ApiClient<MemoryStore>, Arc<AtomicUsize>) {
    let redirects = Arc::new(AtomicUsize::new(0));
    let counter = redirects.clone();
    let client = ApiClient::new(base_url, sessions).with_unauthorized_hook(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (client, redirects)
}

fn product(id: i64) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        price: 10.0,
        quantity: 5,
        category_name: None,
        description: None,
        sku: None,
    }
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let base = spawn_backend().await;
    let (client, redirects) = counting_client(base, signed_in_session());

    let user = client.profile().await.unwrap();
    assert_eq!(user.display_name(), "Ann Lee");
    assert_eq!(redirects.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_concurrent_401s_sign_out_once() {
    let base = spawn_backend().await;
    let sessions = SessionStore::new(MemoryStore::new());
    let user = UserProfile {
        id: 1,
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: "ann@example.com".to_string(),
        role: Role::Customer,
    };
    sessions.establish(Session::new("expired-token", user).unwrap());
    let (client, redirects) = counting_client(base, sessions.clone());

    let (a, b) = tokio::join!(
        client.my_orders(PageRequest::default()),
        client.my_orders(PageRequest::default())
    );
    assert!(matches!(a, Err(ApiError::Unauthorized)));
    assert!(matches!(b, Err(ApiError::Unauthorized)));
    assert_eq!(redirects.load(Ordering::SeqCst), 1);
    assert!(!sessions.is_authenticated());
    assert!(sessions.restore().is_none());
}

#[tokio::test]
async fn test_anonymous_401_redirects() {
    let base = spawn_backend().await;
    let (client, redirects) = counting_client(base, SessionStore::new(MemoryStore::new()));

    let err = client.my_orders(PageRequest::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(redirects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_login_persists_session() {
    let base = spawn_backend().await;
    let storage = MemoryStore::new();
    let (client, _) = counting_client(base, SessionStore::new(storage.clone()));

    let session = client
        .login(&LoginRequest {
            email: "ann@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(session.token(), TOKEN);
    assert_eq!(session.role(), Role::Customer);

    let reopened = SessionStore::open(storage, None);
    assert_eq!(reopened.current(), Some(session));
}

#[tokio::test]
async fn test_rejected_login_does_not_sign_out() {
    let base = spawn_backend().await;
    let sessions = signed_in_session();
    let (client, redirects) = counting_client(base, sessions.clone());

    let err = client
        .login(&LoginRequest {
            email: "ann@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(&err, ApiError::InvalidCredentials(m) if m == "Bad credentials"));
    assert_eq!(redirects.load(Ordering::SeqCst), 0);
    assert!(sessions.is_authenticated());
}

#[tokio::test]
async fn test_client_error_surfaces_server_message() {
    let base = spawn_backend().await;
    let (client, _) = counting_client(base, signed_in_session());

    let request = ProductRequest {
        name: "Mug".to_string(),
        category_id: 1,
        price: -1.0,
        sku: "MUG-1".to_string(),
        description: None,
        is_available: None,
    };
    let err = client.create_product(&request).await.unwrap_err();
    assert_eq!(err.user_message(), "Price must be positive");
    assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_REQUEST));

    let err = client.delete_product(3).await.unwrap_err();
    assert_eq!(err.user_message(), "Request failed (HTTP 404)");
}

#[tokio::test]
async fn test_server_error() {
    let base = spawn_backend().await;
    let (client, _) = counting_client(base, SessionStore::new(MemoryStore::new()));

    let err = client.categories(PageRequest::default()).await.unwrap_err();
    assert!(matches!(&err, ApiError::Server { message, .. } if message == "Database down"));
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let base = spawn_backend().await;
    let (client, _) = counting_client(base, SessionStore::new(MemoryStore::new()));

    assert_eq!(client.product(3).await.unwrap().name, "Mug");
    let err = client.product(7).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_place_order_clears_cart_only_on_success() {
    let base = spawn_backend().await;
    let (client, _) = counting_client(base, signed_in_session());
    let storage = MemoryStore::new();

    let mut cart = Cart::new(storage.clone(), None);
    cart.add(&product(99), 1);
    let err = client.place_order(&mut cart).await.unwrap_err();
    assert_eq!(err.user_message(), "Out of stock");
    assert_eq!(cart.len(), 1);

    cart.remove(99);
    cart.add(&product(1), 2);
    let order = client.place_order(&mut cart).await.unwrap();
    assert_eq!(order.id, 500);
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(cart.is_empty());
    assert!(Cart::restore(storage, None).is_empty());

    let err = client.place_order(&mut cart).await.unwrap_err();
    assert!(matches!(err, ApiError::EmptyCart));
}

#[tokio::test]
async fn test_adjust_inventory_sends_signed_change() {
    let base = spawn_backend().await;
    let (client, _) = counting_client(base, signed_in_session());

    let record = client.adjust_inventory(4, -3).await.unwrap();
    assert_eq!(record.id, 4);
    assert_eq!(record.quantity, 7);
}

#[tokio::test]
async fn test_performance_metrics_use_configured_base_url() {
    let base = spawn_backend().await;
    let (client, redirects) = counting_client(base, signed_in_session());

    let db = client.db_metrics().await.unwrap();
    assert_eq!(db["findAll"].count, 2);
    assert_eq!(db["findAll"].avg_time, 4.5);

    assert!(client.cache_metrics().await.unwrap().is_empty());
    assert_eq!(redirects.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let (client, redirects) =
        counting_client(format!("http://{addr}/api"), signed_in_session());

    let err = client.profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.user_message(), "Could not reach the server. Please try again.");
    assert!(client.session().is_authenticated());
    assert_eq!(redirects.load(Ordering::SeqCst), 0);
}
