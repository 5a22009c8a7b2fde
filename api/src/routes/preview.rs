//! HTML preview page

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::{error::ApiError, ApiState};

/// Render a stored form as a read-only HTML page
#[utoipa::path(
    get,
    path = "/forms/{id}/preview",
    params(("id" = i32, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Preview page", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid ID", body = String, content_type = "text/html"),
        (status = 404, description = "Not found", body = String, content_type = "text/html")
    ),
    tag = "preview"
)]
pub async fn preview_form(State(state): State<Arc<ApiState>>, Path(id): Path<i32>) -> Response {
    match render(&state, id).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => error_page(&state, err),
    }
}

async fn render(state: &ApiState, id: i32) -> Result<String, ApiError> {
    let form = state.forms.get_form(id).await?;
    let options = state.forms.list_field_options().await?;
    Ok(state.preview.render_form(&form, &options)?)
}

fn error_page(state: &ApiState, err: ApiError) -> Response {
    let status = err.status();
    if status.is_server_error() {
        tracing::error!(error = %err, "preview failed");
    }

    let message = err.public_message();
    match state.preview.render_error(status.as_u16(), &message) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(render_err) => {
            tracing::error!(error = %render_err, "error page failed");
            (status, message).into_response()
        }
    }
}
