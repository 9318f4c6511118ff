use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::ApiError;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::ClientError(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status_code, Json(ErrorResponse { error: message })).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    /// Logs the error chain and hides it behind the generic server error.
    fn into_response(self) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{:?}", e);
            ApiError::internal()
        })
    }
}
