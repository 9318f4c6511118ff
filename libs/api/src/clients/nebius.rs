use async_trait::async_trait;
use ::nebius::models::{
    text_to_image::{TextToImage, TextToImageRequest},
    Models,
};

use super::{GeneratedImage, ImageGenerator};

#[async_trait]
impl ImageGenerator for Models {
    async fn generate_image(
        &self,
        prompt: &str,
        model: &str,
    ) -> anyhow::Result<Option<Vec<GeneratedImage>>> {
        let response = self
            .text_to_image(TextToImageRequest::url(model, prompt))
            .await?;

        Ok(response.map(|response| {
            response
                .data
                .into_iter()
                .map(|image| GeneratedImage { url: image.url })
                .collect()
        }))
    }
}
