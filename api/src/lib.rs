//! FormCraft HTTP API
//!
//! JSON endpoints for the form builder and its DataTables grid, plus the
//! server-rendered preview page.
//!
//! ```text
//! /health                         liveness + storage probe
//! /api-docs/openapi.json          OpenAPI document
//! /api/v1/field-options           GET    option catalog
//! /api/v1/forms                   POST   create
//! /api/v1/forms/datatable         POST   paged listing
//! /api/v1/forms/{id}              GET    fetch, DELETE remove
//! /forms/{id}/preview             GET    HTML preview
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod preview;
pub mod routes;

use axum::{routing::get, Json, Router};
use formcraft_core::{FormService, FormUseCases, InMemoryFormGateway};
use handlebars::TemplateError;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use models::*;
pub use preview::PreviewRenderer;

/// API state
pub struct ApiState {
    /// Form lifecycle use cases
    pub forms: Arc<dyn FormUseCases>,
    /// Preview page templates
    pub preview: PreviewRenderer,
    /// API version
    pub version: String,
}

impl ApiState {
    /// State over any use-case implementation
    pub fn new(forms: Arc<dyn FormUseCases>) -> Result<Self, TemplateError> {
        Ok(Self {
            forms,
            preview: PreviewRenderer::new()?,
            version: env!("CARGO_PKG_VERSION").into(),
        })
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory() -> Result<Self, TemplateError> {
        let service = FormService::new(Arc::new(InMemoryFormGateway::new()));
        Self::new(Arc::new(service))
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FormCraft API",
        version = "0.1.0",
        description = "Dynamic form builder",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::health_check,
        routes::field_options::list_field_options,
        routes::forms::create_form,
        routes::forms::list_forms,
        routes::forms::get_form,
        routes::forms::delete_form,
        routes::preview::preview_form,
    ),
    components(
        schemas(
            ErrorResponse,
            routes::health::HealthResponse,
            FieldOptionView,
            FieldInput, FormCreate, FormCreated, FormDeleted,
            FieldView, FormView,
            DataTableRow, DataTableResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "field-options", description = "Dropdown option catalog"),
        (name = "forms", description = "Form lifecycle"),
        (name = "preview", description = "Rendered form preview")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/forms/:id/preview", get(routes::preview::preview_form))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(state))
}

fn api_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/field-options",
            get(routes::field_options::list_field_options),
        )
        .nest("/forms", routes::forms::router())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
