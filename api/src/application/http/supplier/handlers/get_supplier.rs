use axum::extract::{Path, State};
use tourscout_core::domain::{search::ports::SearchService, supplier::value_objects::SupplierDto};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "supplier",
    summary = "Get a supplier",
    params(
        ("id" = i64, Path, description = "Supplier id")
    ),
    responses(
        (status = 200, body = SupplierDto),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn get_supplier(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<SupplierDto>, ApiError> {
    let supplier = state
        .service
        .suppliers
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(supplier))
}
