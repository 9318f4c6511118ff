use anyhow::Context;

use crate::models::Models;

use super::{
    parse_response, TextToImage, TextToImageRequest, TextToImageResponse,
    IMAGES_GENERATIONS,
};

impl TextToImage for Models {
    async fn text_to_image(
        &self,
        request: TextToImageRequest,
    ) -> anyhow::Result<Option<TextToImageResponse>> {
        let body = serde_json::to_string(&request)
            .context("failed to serialize body")?;

        let text = self.string_response(body, IMAGES_GENERATIONS).await?;

        parse_response(&text)
    }
}
