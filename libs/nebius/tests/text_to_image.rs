use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use nebius::models::{
    text_to_image::{TextToImage, TextToImageRequest},
    Models,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}/v1/", address)
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    let prompt = body["prompt"].as_str().unwrap_or_default();

    Json(json!({
        "created": 1,
        "data": [
            { "url": format!("https://img/{}", prompt) },
            { "url": "https://img/second" },
        ],
    }))
}

#[tokio::test]
async fn test_text_to_image_returns_urls() {
    // Arrange
    let base_url =
        spawn(Router::new().route("/v1/images/generations", post(echo))).await;
    let models = Models::new("secret-key", &base_url).unwrap();

    // Act
    let response = models
        .text_to_image(TextToImageRequest::url("stability-ai/sdxl", "city"))
        .await;

    // Assert
    let response = response.unwrap().unwrap();
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].url.as_deref(), Some("https://img/city"));
}

#[tokio::test]
async fn test_text_to_image_sends_bearer_token_and_format() {
    async fn check(
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> impl IntoResponse {
        let authorized = headers
            .get("authorization")
            .is_some_and(|value| value == "Bearer secret-key");
        if !authorized || body["response_format"] != "url" {
            return (StatusCode::UNAUTHORIZED, "nope").into_response();
        }
        Json(json!({ "data": [{ "url": "https://img/ok" }] })).into_response()
    }

    let base_url =
        spawn(Router::new().route("/v1/images/generations", post(check))).await;
    let models = Models::new("secret-key", &base_url).unwrap();

    let response = models
        .text_to_image(TextToImageRequest::url("m", "p"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response.data[0].url.as_deref(), Some("https://img/ok"));
}

#[tokio::test]
async fn test_text_to_image_empty_body_is_none() {
    let base_url = spawn(
        Router::new().route("/v1/images/generations", post(|| async { "" })),
    )
    .await;
    let models = Models::new("k", &base_url).unwrap();

    let response = models
        .text_to_image(TextToImageRequest::url("m", "p"))
        .await;

    assert!(response.unwrap().is_none());
}

#[tokio::test]
async fn test_text_to_image_error_status() {
    let base_url = spawn(Router::new().route(
        "/v1/images/generations",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream exploded") }),
    ))
    .await;
    let models = Models::new("k", &base_url).unwrap();

    let response = models
        .text_to_image(TextToImageRequest::url("m", "p"))
        .await;

    let message = response.unwrap_err().to_string();
    assert!(message.contains("502"));
    assert!(message.contains("upstream exploded"));
}

#[tokio::test]
async fn test_text_to_image_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    let models = Models::new("k", &format!("http://{}/v1", address)).unwrap();

    let response = models
        .text_to_image(TextToImageRequest::url("m", "p"))
        .await;

    assert!(response.is_err());
}

#[test]
fn test_invalid_token_is_an_error() {
    assert!(Models::new("bad\nkey", "http://localhost").is_err());
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let models = Models::new("k", "https://api.studio.nebius.com/v1/").unwrap();

    assert_eq!(models.base_url(), "https://api.studio.nebius.com/v1");
}
