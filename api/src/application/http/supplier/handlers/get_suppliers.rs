use axum::extract::State;
use tourscout_core::domain::{search::ports::SearchService, supplier::value_objects::SupplierDto};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "supplier",
    summary = "List suppliers",
    responses(
        (status = 200, body = Vec<SupplierDto>)
    ),
)]
pub async fn get_suppliers(
    State(state): State<AppState>,
) -> Result<Response<Vec<SupplierDto>>, ApiError> {
    let suppliers = state
        .service
        .suppliers
        .find_all()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suppliers))
}
