use axum::extract::State;
use tourscout_core::domain::{activity::value_objects::ActivityDto, search::ports::SearchService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "activity",
    summary = "List activities",
    description = "Returns every activity ordered by id.",
    responses(
        (status = 200, body = Vec<ActivityDto>)
    ),
)]
pub async fn get_activities(
    State(state): State<AppState>,
) -> Result<Response<Vec<ActivityDto>>, ApiError> {
    let activities = state
        .service
        .activities
        .find_all()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(activities))
}
