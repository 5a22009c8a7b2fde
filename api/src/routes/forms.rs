//! Form endpoints

use axum::routing::{get, post};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json, Router,
};
use formcraft_core::PagedQueryRequest;
use std::sync::Arc;

use crate::{error::ApiError, models::*, ApiState};

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", post(create_form))
        .route("/datatable", post(list_forms))
        .route("/:id", get(get_form).delete(delete_form))
}

/// Create a form
#[utoipa::path(
    post,
    path = "/api/v1/forms",
    request_body = FormCreate,
    responses(
        (status = 201, description = "Form created", body = FormCreated),
        (status = 400, description = "Definition or body rejected", body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn create_form(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<FormCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<FormCreated>>), ApiError> {
    let Json(req) = body?;
    let form_id = state.forms.create_form(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(FormCreated { form_id })),
    ))
}

/// Server-side paging for the forms grid
///
/// Accepts the DataTables request body (`draw`, `start`, `length`,
/// `search.value`, `order[0]`, `columns[].data`).
#[utoipa::path(
    post,
    path = "/api/v1/forms/datatable",
    request_body(content = Object, description = "DataTables paging request", content_type = "application/json"),
    responses(
        (status = 200, description = "One page of forms", body = DataTableResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn list_forms(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<PagedQueryRequest>, JsonRejection>,
) -> Result<Json<DataTableResponse>, ApiError> {
    let Json(req) = body?;
    let page = state.forms.list_forms(req).await?;
    Ok(Json(DataTableResponse::from(page)))
}

/// Get a form with its fields in display order
#[utoipa::path(
    get,
    path = "/api/v1/forms/{id}",
    params(("id" = i32, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Form", body = FormView),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn get_form(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<FormView>>, ApiError> {
    let form = state.forms.get_form(id).await?;
    Ok(Json(ApiResponse::success(FormView::from(form))))
}

/// Delete a form and its fields
#[utoipa::path(
    delete,
    path = "/api/v1/forms/{id}",
    params(("id" = i32, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Deleted", body = FormDeleted),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn delete_form(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<FormDeleted>>, ApiError> {
    state.forms.delete_form(id).await?;
    Ok(Json(ApiResponse::success(FormDeleted { deleted: id })))
}
