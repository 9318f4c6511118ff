use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use crate::{
    clients::ImageGenerator,
    response::{ApiResponse, IntoApiResponse},
    ApiError,
};

use super::prompt::Prompt;

/// Image URL on success, classified error otherwise.
pub type GenerationResult = ApiResponse<String>;

/// Validates a prompt, makes one provider call and normalizes the outcome.
#[derive(Clone)]
pub struct GenerationHandler {
    provider: Arc<dyn ImageGenerator>,
    model: String,
}

impl GenerationHandler {
    pub fn new(provider: Arc<dyn ImageGenerator>, model: String) -> Self {
        Self { provider, model }
    }

    pub async fn generate(&self, prompt: &str) -> GenerationResult {
        let prompt = Prompt::parse(prompt).map_err(|e| {
            info!(reason = %e, "rejected prompt");
            ApiError::ClientError(e.to_string())
        })?;

        let images = self
            .provider
            .generate_image(prompt.as_str(), &self.model)
            .await
            .context("image provider call failed")
            .into_response()?;

        let Some(images) = images else {
            error!(model = %self.model, "image provider returned no result");
            return Err(ApiError::internal());
        };

        let count = images.len();
        let Some(url) = images.into_iter().next().and_then(|image| image.url)
        else {
            error!(count, "image provider returned no image url");
            return Err(ApiError::internal());
        };

        info!(count, "image generated");

        Ok(url)
    }
}
