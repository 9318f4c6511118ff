pub mod implementation;

use anyhow::Context;
use serde::{Deserialize, Serialize};

static IMAGES_GENERATIONS: &str = "images/generations";

pub static STABLE_DIFFUSION_XL: &str = "stability-ai/sdxl";

pub trait TextToImage {
    /// Returns `Ok(None)` when the API answers with no result object at all.
    fn text_to_image(
        &self,
        request: TextToImageRequest,
    ) -> impl std::future::Future<
        Output = anyhow::Result<Option<TextToImageResponse>>,
    > + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Url,
    B64Json,
}

#[derive(Debug, Serialize, Default)]
pub struct TextToImageRequest {
    pub model: String,
    pub prompt: String,
    pub response_format: ResponseFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl TextToImageRequest {
    /// A request asking for hosted image URLs instead of inline data.
    pub fn url(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_format: ResponseFormat::Url,
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct TextToImageResponse {
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ImageData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub b64_json: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

pub(crate) fn parse_response(
    text: &str,
) -> anyhow::Result<Option<TextToImageResponse>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str::<Option<TextToImageResponse>>(text)
        .context("failed to parse response")
}
