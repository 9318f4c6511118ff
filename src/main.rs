use api::Config;
use shuttle_runtime::{Error, SecretStore, Secrets};

#[shuttle_runtime::main]
async fn main(#[Secrets] secret_store: SecretStore) -> shuttle_axum::ShuttleAxum {
    if let Some(env) = secret_store.get("ENV") {
        if env == "prod" {
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::INFO)
                .init();
        }
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let api_key = match secret_store.get("NEBIUS_API_KEY") {
        Some(api_key) => api_key,
        None => util::secret("NEBIUS_API_KEY", None)
            .map_err(|e| Error::BuildPanic(e.to_string()))?,
    };

    let config_name = match secret_store.get("CONFIG") {
        Some(config) => format!("Config{}.toml", config),
        None => "Config.toml".to_string(),
    };
    let config = Config::load(&config_name)
        .map_err(|e| Error::BuildPanic(format!("{:#}", e)))?;

    let router = api::serve(api_key, &config)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    Ok(router.into())
}
