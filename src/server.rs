//! HTTP surface: create products with localized fields and read them back.

use crate::config::Config;
use crate::content::LocalizedContent;
use crate::error::LocalizationError;
use crate::i18n::{Language, LanguageRegistry};
use crate::localizable::Localizable;
use crate::localized_property;
use crate::model_state::ModelStateDictionary;
use crate::property::Property;
use crate::updater::{LocalizedPropertyUpdater, SetLocalized};
use crate::validation::require_property;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Key prefix for product fields in the error store.
const PRODUCT_PREFIX: &str = "Product";

#[derive(Debug, Clone, Default, Serialize)]
pub struct Product {
    pub id: u64,
    /// Stored localized JSON
    pub name: String,
    /// Stored localized JSON
    pub description: String,
}

impl Localizable for Product {}

impl Product {
    pub fn name_property() -> Property<Product> {
        localized_property!(Product, name, "Name")
    }

    pub fn description_property() -> Property<Product> {
        localized_property!(Product, description, "Description")
    }
}

/// Form posted to create a product. Each field carries its per-language values.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: Vec<LocalizedContent>,
    #[serde(default)]
    pub description: Vec<LocalizedContent>,
}

/// A product rendered in one language.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductView {
    pub id: u64,
    pub language: String,
    pub name: String,
    pub description: String,
}

/// An enabled language as advertised to form builders.
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub native_name: String,
    /// Used when a product has no value in the requested language
    pub is_default: bool,
    /// Must be filled in for a product to be accepted
    pub required: bool,
}

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

pub struct AppState {
    pub updater: LocalizedPropertyUpdater,
    pub default_language: Language,
    pub products: RwLock<Vec<Product>>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            updater: LocalizedPropertyUpdater::new(config.required()),
            default_language: config.default_language,
            products: RwLock::new(Vec::new()),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/languages", get(list_languages))
        .route("/products", post(create_product))
        .route("/products/:id", get(get_product))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn list_languages(State(state): State<Arc<AppState>>) -> Json<Vec<LanguageInfo>> {
    let required = state.updater.required();
    let languages = LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|config| LanguageInfo {
            code: config.code.to_string(),
            name: config.name.to_string(),
            native_name: config.native_name.to_string(),
            is_default: config.code == state.default_language.code(),
            required: required.contains(config.code),
        })
        .collect();

    Json(languages)
}

/// Errors returned by handlers, rendered as JSON bodies.
#[derive(Debug)]
pub enum ApiError {
    Validation(ModelStateDictionary),
    NotFound(u64),
    BadLanguage(String),
    Internal(LocalizationError),
}

impl From<LocalizationError> for ApiError {
    fn from(err: LocalizationError) -> Self {
        match err {
            LocalizationError::InvalidLanguageCode(code)
            | LocalizationError::UnknownLanguage(code) => ApiError::BadLanguage(code),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "errors": errors.to_error_map() })),
            )
                .into_response(),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": format!("product {} not found", id) })),
            )
                .into_response(),
            ApiError::BadLanguage(code) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": format!("unsupported language '{}'", code) })),
            )
                .into_response(),
            ApiError::Internal(err) => {
                warn!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let name = Product::name_property();
    let description = Product::description_property();

    let mut product = Product::default();
    let mut errors = ModelStateDictionary::new();

    // Binding leaves the raw properties empty, so both start out flagged.
    require_property(&mut errors, PRODUCT_PREFIX, &name, &product);
    require_property(&mut errors, PRODUCT_PREFIX, &description, &product);

    product
        .set_localized_validated(&state.updater, &mut errors, &name, &form.name)?
        .set_localized_validated(&state.updater, &mut errors, &description, &form.description)?;

    if !errors.is_valid() {
        info!("Rejected product with {} validation errors", errors.error_count());
        return Err(ApiError::Validation(errors));
    }

    let mut products = state.products.write().await;
    product.id = products.len() as u64 + 1;
    products.push(product.clone());
    info!("Created product {}", product.id);

    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<ProductView>, ApiError> {
    let language = match query.lang.as_deref() {
        Some(code) => Language::from_code(code)?,
        None => state.default_language,
    };

    let products = state.products.read().await;
    let product = products
        .iter()
        .find(|p| p.id == id)
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(ProductView {
        id,
        language: language.code().to_string(),
        name: product.localized_or(
            &Product::name_property(),
            language,
            state.default_language,
        )?,
        description: product.localized_or(
            &Product::description_property(),
            language,
            state.default_language,
        )?,
    }))
}
