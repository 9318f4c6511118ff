use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Debug)]
pub struct GenerateRequest {
    /// Text describing the image, 1 to 600 characters.
    #[serde(default)]
    pub prompt: Option<String>,
}
