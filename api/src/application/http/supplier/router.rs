use super::handlers::get_supplier::{__path_get_supplier, get_supplier};
use super::handlers::get_suppliers::{__path_get_suppliers, get_suppliers};
use super::handlers::search_suppliers::{__path_search_suppliers, search_suppliers};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_suppliers, get_supplier, search_suppliers))]
pub struct SupplierApiDoc;

pub fn supplier_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/suppliers", state.args.server.root_path),
            get(get_suppliers),
        )
        .route(
            &format!("{}/suppliers/search", state.args.server.root_path),
            get(search_suppliers),
        )
        .route(
            &format!("{}/suppliers/{{id}}", state.args.server.root_path),
            get(get_supplier),
        )
}
