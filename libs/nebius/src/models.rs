use anyhow::{ensure, Context};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Body, Client,
};
use tracing::debug;

pub mod text_to_image;

pub static DEFAULT_BASE_URL: &str = "https://api.studio.nebius.com/v1/";

/// Client for the Nebius AI Studio inference API.
///
/// The API is OpenAI-compatible, so every model family lives under a path
/// relative to `base_url` (e.g. `images/generations`).
#[derive(Debug, Clone)]
pub struct Models {
    base_url: String,
    client: Client,
}

impl Models {
    pub fn new(token: &str, base_url: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut authorization =
            HeaderValue::from_str(format!("Bearer {}", token).as_str())
                .context("api key is not a valid header value")?;
        authorization.set_sensitive(true);
        headers.insert("Authorization", authorization);

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn string_response<R: Into<Body>>(
        &self,
        request: R,
        path: &str,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .body(request)
            .send()
            .await?;

        let status_code = response.status();
        let text = response.text().await;

        ensure!(
            status_code.is_success(),
            "status code: {}, response: {:?}",
            status_code,
            text
        );

        let text = text?;
        debug!(path, response = %text, "nebius response");

        Ok(text)
    }
}
