use axum::extract::{Path, State};
use tourscout_core::domain::{
    activity::value_objects::{ActivityDto, ActivitySearchCriteria},
    search::ports::SearchService,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/search/{search}",
    tag = "activity",
    summary = "Search activities by title",
    params(
        ("search" = String, Path, description = "Case-insensitive fragment of the title")
    ),
    responses(
        (status = 200, body = Vec<ActivityDto>)
    ),
)]
pub async fn search_activities_by_title(
    Path(search): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<ActivityDto>>, ApiError> {
    let criteria = ActivitySearchCriteria {
        title: Some(search),
        ..Default::default()
    };

    let activities = state
        .service
        .activities
        .search(criteria)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(activities))
}
