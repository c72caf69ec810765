use axum::extract::State;
use serde::Deserialize;
use tourscout_core::domain::{
    search::ports::SearchService,
    supplier::value_objects::{SupplierDto, SupplierSearchCriteria},
};
use utoipa::IntoParams;

use crate::application::http::query::SearchQuery;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchSuppliersQuery {
    pub name: Option<String>,
    pub address: Option<String>,
    /// Exact match.
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl From<SearchSuppliersQuery> for SupplierSearchCriteria {
    fn from(query: SearchSuppliersQuery) -> Self {
        Self {
            name: query.name,
            address: query.address,
            zip: query.zip,
            city: query.city,
            country: query.country,
        }
    }
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "supplier",
    summary = "Search suppliers",
    description = "Zip is matched exactly, every other filter is a case-insensitive partial match.",
    params(SearchSuppliersQuery),
    responses(
        (status = 200, body = Vec<SupplierDto>)
    ),
)]
pub async fn search_suppliers(
    SearchQuery(query): SearchQuery<SearchSuppliersQuery>,
    State(state): State<AppState>,
) -> Result<Response<Vec<SupplierDto>>, ApiError> {
    let suppliers = state
        .service
        .suppliers
        .search(SupplierSearchCriteria::from(query))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suppliers))
}
