use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

pub mod prompt;
pub mod request;
pub mod response;
pub mod service;

use crate::response::{ApiResponse, ErrorResponse};
use crate::{ApiError, ApiState};

use self::{request::GenerateRequest, response::GenerateResponse};

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

/// Generate an image from a text prompt
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Image generated successfully", body = GenerateResponse),
        (status = 400, description = "Prompt is missing or too long", body = ErrorResponse),
        (status = 500, description = "Image provider failed", body = ErrorResponse)
    )
)]
pub async fn post_generate(
    State(state): State<ApiState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResponse<Json<GenerateResponse>> {
    let Json(body) = body.map_err(|rejection| {
        info!(%rejection, "rejected generate request body");
        ApiError::ClientError(INVALID_REQUEST_BODY.to_string())
    })?;

    let prompt = body.prompt.unwrap_or_default();
    let image_url = state.handler.generate(&prompt).await?;

    Ok(Json(GenerateResponse { image_url }))
}
