//! Dropdown option catalog

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{error::ApiError, models::*, ApiState};

/// List the selectable options for dropdown fields
#[utoipa::path(
    get,
    path = "/api/v1/field-options",
    responses(
        (status = 200, description = "Option catalog", body = [FieldOptionView]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "field-options"
)]
pub async fn list_field_options(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ApiResponse<Vec<FieldOptionView>>>, ApiError> {
    let options = state.forms.list_field_options().await?;
    Ok(Json(ApiResponse::success(
        options.into_iter().map(FieldOptionView::from).collect(),
    )))
}
