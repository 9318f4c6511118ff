use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{clients::ImageGenerator, generate::service::GenerationHandler};

pub mod clients;
pub mod generate;
pub mod healthz;
pub mod not_found;
mod response;

pub use response::{ApiResponse, IntoApiResponse, INTERNAL_SERVER_ERROR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    ClientError(String),
    ServerError(String),
}

impl ApiError {
    /// The only message a caller ever sees for a server-side failure.
    pub fn internal() -> Self {
        ApiError::ServerError(INTERNAL_SERVER_ERROR.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::ClientError(message) | ApiError::ServerError(message) => {
                message
            }
        }
    }
}

#[derive(Clone)]
pub struct ApiState {
    handler: GenerationHandler,
}

impl ApiState {
    pub fn new(generator: Arc<dyn ImageGenerator>, config: &Config) -> Self {
        Self {
            handler: GenerationHandler::new(
                generator,
                config.nebius.model.clone(),
            ),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: Server,
    pub nebius: Nebius,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub allow_origins: Vec<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            port: default_port(),
            allow_origins: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Nebius {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_port() -> u16 {
    8000
}

fn default_base_url() -> String {
    nebius::models::DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    nebius::models::text_to_image::STABLE_DIFFUSION_XL.to_string()
}

impl Config {
    pub fn load(config_name: &str) -> anyhow::Result<Self> {
        util::load_config(config_name)
    }

    pub fn from_toml(config: &str) -> anyhow::Result<Self> {
        toml::from_str(config).context("failed to parse config")
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(generate::post_generate, healthz::get_health),
    components(schemas(
        generate::request::GenerateRequest,
        generate::response::GenerateResponse,
        response::ErrorResponse
    )),
    tags(
        (name = "generate", description = "Text-to-image generation API")
    )
)]
struct ApiDoc;

pub async fn serve(api_key: String, config: &Config) -> anyhow::Result<Router> {
    info!(task = "start api serving", model = %config.nebius.model);

    let models = nebius::Models::new(&api_key, &config.nebius.base_url)
        .context("failed to build nebius client")?;

    let state = ApiState::new(Arc::new(models), config);

    router(state, &config.server.allow_origins)
}

pub fn router(
    state: ApiState,
    allow_origins: &[String],
) -> anyhow::Result<Router> {
    let origins = allow_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid cors origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    // api
    let api_router = Router::new()
        .route("/generate", post(generate::post_generate))
        .fallback(not_found::get_404)
        .with_state(state);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/api", api_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .fallback(not_found::get_404);

    Ok(router)
}
