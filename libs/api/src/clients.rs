use async_trait::async_trait;

mod nebius;

/// One entry of a provider's result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: Option<String>,
}

impl GeneratedImage {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Text-to-image provider seen by the generation handler.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Asks for URL-formatted results. `Ok(None)` means the provider
    /// answered without any result object.
    async fn generate_image(
        &self,
        prompt: &str,
        model: &str,
    ) -> anyhow::Result<Option<Vec<GeneratedImage>>>;
}
