use super::handlers::get_activities::{__path_get_activities, get_activities};
use super::handlers::get_activity::{__path_get_activity, get_activity};
use super::handlers::search_activities::{__path_search_activities, search_activities};
use super::handlers::search_activities_by_title::{
    __path_search_activities_by_title, search_activities_by_title,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_activities,
    get_activity,
    search_activities,
    search_activities_by_title
))]
pub struct ActivityApiDoc;

pub fn activity_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/activities", state.args.server.root_path),
            get(get_activities),
        )
        .route(
            &format!("{}/activities/search", state.args.server.root_path),
            get(search_activities),
        )
        .route(
            &format!("{}/activities/search/{{search}}", state.args.server.root_path),
            get(search_activities_by_title),
        )
        .route(
            &format!("{}/activities/{{id}}", state.args.server.root_path),
            get(get_activity),
        )
}
