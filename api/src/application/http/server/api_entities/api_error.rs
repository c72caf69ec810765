use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tourscout_core::domain::common::entities::app_errors::{CoreError, CriteriaViolation};
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    BadRequest {
        message: String,
        details: Vec<CriteriaViolation>,
    },

    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ApiErrorDetail>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorDetail {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl From<CriteriaViolation> for ApiErrorDetail {
    fn from(violation: CriteriaViolation) -> Self {
        Self {
            field: violation.field,
            code: violation.code,
            message: violation.message,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound { .. } => ApiError::NotFound(error.to_string()),
            CoreError::InvalidCriteria(details) => ApiError::BadRequest {
                message: "Invalid search criteria".to_string(),
                details,
            },
            CoreError::StoreFailure(_) => {
                tracing::error!("Request failed: {}", error);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::BadRequest { .. } => "E_INVALID_CRITERIA",
            ApiError::InvalidQuery(_) => "E_INVALID_QUERY",
            ApiError::ServiceUnavailable(_) => "E_SERVICE_UNAVAILABLE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }

    pub fn body(&self) -> ApiErrorResponse {
        let details = match self {
            ApiError::BadRequest { details, .. } => {
                details.iter().cloned().map(ApiErrorDetail::from).collect()
            }
            _ => Vec::new(),
        };

        ApiErrorResponse {
            code: self.code().to_string(),
            status: self.status().as_u16(),
            message: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
