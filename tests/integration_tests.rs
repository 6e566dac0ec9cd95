//! Integration tests for the localized content service
//!
//! These tests drive the router end to end: form binding flags the localized
//! fields, the updater clears them once required languages are filled in, and
//! stored products are read back per language.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use localized_content::{
    config::Config,
    server::{create_router, AppState, LanguageInfo, ProductView},
    Language,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

// ==================== Test Helpers ====================

fn create_test_config(required: Vec<Language>, default_language: Language) -> Config {
    Config {
        required_languages: required,
        default_language,
        port: 8080,
    }
}

fn create_test_app(required: Vec<Language>) -> Router {
    create_test_app_with_default(required, Language::ENGLISH)
}

fn create_test_app_with_default(required: Vec<Language>, default_language: Language) -> Router {
    let state = Arc::new(AppState::new(&create_test_config(
        required,
        default_language,
    )));
    create_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn post_product(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

fn complete_form() -> Value {
    json!({
        "name": [{"k": "en", "v": "Coffee"}, {"k": "ar", "v": "قهوة"}],
        "description": [{"k": "en", "v": "Dark roast"}, {"k": "ar", "v": "تحميص داكن"}]
    })
}

// ==================== Health Tests ====================

#[tokio::test]
async fn test_health() {
    let app = create_test_app(vec![Language::ENGLISH]);
    let response = app.oneshot(get("/health")).await.expect("request");
    assert_eq!(response.status(), StatusCode::OK);
}

// ==================== Language Tests ====================

#[tokio::test]
async fn test_list_languages() {
    let app = create_test_app_with_default(
        vec![Language::ENGLISH, Language::ARABIC],
        Language::FRENCH,
    );

    let (status, body) = send(&app, get("/languages")).await;

    assert_eq!(status, StatusCode::OK);
    let languages: Vec<LanguageInfo> = serde_json::from_value(body).unwrap();
    assert_eq!(languages.len(), 4);
    assert!(languages.iter().all(|l| l.code != "de"));

    let arabic = languages.iter().find(|l| l.code == "ar").unwrap();
    assert_eq!(arabic.native_name, "العربية");
    assert!(arabic.required);
    assert!(!arabic.is_default);

    let french = languages.iter().find(|l| l.code == "fr").unwrap();
    assert!(french.is_default);
    assert!(!french.required);
}

// ==================== Create Tests ====================

#[tokio::test]
async fn test_create_with_complete_content() {
    let app = create_test_app(vec![Language::ENGLISH, Language::ARABIC]);

    let (status, body) = send(&app, post_product(complete_form())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    let stored: Value = serde_json::from_str(body["name"].as_str().unwrap()).unwrap();
    assert_eq!(stored[0]["k"], "en");
    assert_eq!(stored[0]["v"], "Coffee");
}

#[tokio::test]
async fn test_create_with_blank_required_language() {
    let app = create_test_app(vec![Language::ENGLISH, Language::ARABIC]);

    let form = json!({
        "name": [{"k": "en", "v": "Coffee"}, {"k": "ar", "v": "  "}],
        "description": [{"k": "en", "v": "Dark roast"}, {"k": "ar", "v": "تحميص داكن"}]
    });
    let (status, body) = send(&app, post_product(form)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["Product.Name"][0], "The Name field is required.");
}

#[tokio::test]
async fn test_create_with_missing_fields() {
    let app = create_test_app(vec![Language::ENGLISH]);

    let (status, body) = send(&app, post_product(json!({}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_object().unwrap();
    assert!(errors.contains_key("Product.Name"));
    assert!(errors.contains_key("Product.Description"));
}

#[tokio::test]
async fn test_create_with_no_required_languages() {
    let app = create_test_app(vec![]);

    let (status, _) = send(&app, post_product(json!({}))).await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let app = create_test_app(vec![Language::ENGLISH]);

    let (_, first) = send(&app, post_product(complete_form())).await;
    let (_, second) = send(&app, post_product(complete_form())).await;

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
}

// ==================== Read Tests ====================

#[tokio::test]
async fn test_get_product_in_requested_language() {
    let app = create_test_app(vec![Language::ENGLISH]);
    send(&app, post_product(complete_form())).await;

    let (status, body) = send(&app, get("/products/1?lang=ar")).await;

    assert_eq!(status, StatusCode::OK);
    let view: ProductView = serde_json::from_value(body).unwrap();
    assert_eq!(view.language, "ar");
    assert_eq!(view.name, "قهوة");
    assert_eq!(view.description, "تحميص داكن");
}

#[tokio::test]
async fn test_get_product_falls_back_to_default_language() {
    let app = create_test_app(vec![Language::ENGLISH]);
    send(&app, post_product(complete_form())).await;

    let (status, body) = send(&app, get("/products/1?lang=fr")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "fr");
    assert_eq!(body["name"], "Coffee");
}

#[tokio::test]
async fn test_get_product_without_language_uses_default() {
    let app = create_test_app(vec![Language::ENGLISH]);
    send(&app, post_product(complete_form())).await;

    let (_, body) = send(&app, get("/products/1")).await;

    assert_eq!(body["language"], "en");
    assert_eq!(body["description"], "Dark roast");
}

#[tokio::test]
async fn test_get_product_falls_back_to_configured_default() {
    let app = create_test_app_with_default(vec![Language::FRENCH], Language::FRENCH);
    let form = json!({
        "name": [{"k": "fr", "v": "Café"}],
        "description": [{"k": "fr", "v": "Torréfaction foncée"}]
    });
    let (status, _) = send(&app, post_product(form)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, get("/products/1?lang=ar")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "ar");
    assert_eq!(body["name"], "Café");
    assert_eq!(body["description"], "Torréfaction foncée");
}

#[tokio::test]
async fn test_get_unknown_product() {
    let app = create_test_app(vec![Language::ENGLISH]);

    let (status, body) = send(&app, get("/products/42")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("42"));
}

#[tokio::test]
async fn test_get_with_unsupported_language() {
    let app = create_test_app(vec![Language::ENGLISH]);
    send(&app, post_product(complete_form())).await;

    let (status, _) = send(&app, get("/products/1?lang=zz")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
