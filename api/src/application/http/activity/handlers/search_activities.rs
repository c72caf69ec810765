use axum::extract::State;
use serde::Deserialize;
use tourscout_core::domain::{
    activity::value_objects::{ActivityDto, ActivitySearchCriteria},
    search::ports::SearchService,
};
use utoipa::IntoParams;

use crate::application::http::query::{SearchQuery, empty_as_none};
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase")]
pub struct SearchActivitiesQuery {
    /// Case-insensitive partial match on the title.
    pub title: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<i32>,
    /// Lower bound, inclusive, between 0 and 5.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_rating: Option<f64>,
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub special_offer: Option<bool>,
    /// Case-insensitive partial match on the supplier name.
    pub supplier_name: Option<String>,
}

impl From<SearchActivitiesQuery> for ActivitySearchCriteria {
    fn from(query: SearchActivitiesQuery) -> Self {
        Self {
            title: query.title,
            min_price: query.min_price,
            max_price: query.max_price,
            min_rating: query.min_rating,
            currency: query.currency,
            special_offer: query.special_offer,
            supplier_name: query.supplier_name,
        }
    }
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "activity",
    summary = "Search activities",
    description = "Every supplied filter narrows the result. Omitted or blank filters are ignored.",
    params(SearchActivitiesQuery),
    responses(
        (status = 200, body = Vec<ActivityDto>),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn search_activities(
    SearchQuery(query): SearchQuery<SearchActivitiesQuery>,
    State(state): State<AppState>,
) -> Result<Response<Vec<ActivityDto>>, ApiError> {
    let activities = state
        .service
        .activities
        .search(ActivitySearchCriteria::from(query))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(activities))
}
