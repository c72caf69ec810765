use crate::application::http::{
    activity::router::ActivityApiDoc, health::HealthApiDoc, supplier::router::SupplierApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tourscout API"
    ),
    nest(
        (path = "/activities", api = ActivityApiDoc),
        (path = "/suppliers", api = SupplierApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
