use axum::extract::{Path, State};
use tourscout_core::domain::{activity::value_objects::ActivityDto, search::ports::SearchService};

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
    tag = "activity",
    summary = "Get an activity",
    params(
        ("id" = i64, Path, description = "Activity id")
    ),
    responses(
        (status = 200, body = ActivityDto),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn get_activity(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<ActivityDto>, ApiError> {
    let activity = state
        .service
        .activities
        .find_by_id(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(activity))
}
