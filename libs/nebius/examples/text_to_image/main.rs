use nebius::models::{
    self,
    text_to_image::{TextToImage, TextToImageRequest, STABLE_DIFFUSION_XL},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let secrets = util::load_env("Secrets.dev.toml").ok();
    let token = util::secret("NEBIUS_API_KEY", secrets.as_ref())?;

    let models = models::Models::new(&token, models::DEFAULT_BASE_URL)?;

    let result = models
        .text_to_image(TextToImageRequest::url(
            STABLE_DIFFUSION_XL,
            "Hello World!",
        ))
        .await?;

    match result.and_then(|response| response.data.into_iter().next()) {
        Some(image) => println!("{}", image.url.unwrap_or_default()),
        None => println!("no image returned"),
    }

    Ok(())
}
