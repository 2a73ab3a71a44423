// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! OpenAI client tests against a fake provider
//!
//! Covers request shape, response parsing and structural error classification.

use axum::http::StatusCode;
use vibeboard::generation::image::IMAGE_STYLE_SUFFIX;
use vibeboard::generation::openai::CONNECTION_CHECK_MESSAGE;
use vibeboard::generation::{
    ConceptGenerator, ErrorKind, GenerationError, ImageGenerator, OpenAIClient, Prompt,
};

use crate::common::{
    chat_reply, closed_base_url, concept_content, image_url_for, openai_config, provider_error,
    FakeOpenAI, EXAMPLE_COLORS, EXAMPLE_PROMPT, FAIL,
};

async fn client_for(fake: &FakeOpenAI) -> OpenAIClient {
    let base_url = fake.spawn().await;
    OpenAIClient::new(&openai_config(&base_url)).unwrap()
}

async fn concept_error(status: StatusCode, body: serde_json::Value) -> GenerationError {
    let fake = FakeOpenAI::with_chat(status, body);
    let client = client_for(&fake).await;
    let prompt = Prompt::parse(EXAMPLE_PROMPT).unwrap();
    client.generate_style_concept(&prompt).await.unwrap_err()
}

#[tokio::test]
async fn test_style_concept_request_shape() {
    let fake = FakeOpenAI::with_concept(&["p1 hero", "p2 texture", "p3 ui"]);
    let client = client_for(&fake).await;
    let prompt = Prompt::parse(EXAMPLE_PROMPT).unwrap();

    let concept = client.generate_style_concept(&prompt).await.unwrap();
    assert_eq!(concept.colors, EXAMPLE_COLORS);
    assert_eq!(concept.font_pairing.category, "minimal");

    let requests = fake.chat_requests.lock().await;
    assert_eq!(requests.len(), 1);
    let body = &requests[0];
    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["max_tokens"], 500);
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(
        body["messages"][1]["content"],
        format!("Create a style concept for: {}", EXAMPLE_PROMPT)
    );

    let auth = fake.authorizations.lock().await;
    assert_eq!(auth[0], "Bearer sk-test");
}

#[tokio::test]
async fn test_invalid_key_is_config_error() {
    let error = concept_error(
        StatusCode::UNAUTHORIZED,
        provider_error("Incorrect API key provided", Some("invalid_request_error"), Some("invalid_api_key")),
    )
    .await;
    assert_eq!(error.kind(), ErrorKind::Config);
}

#[tokio::test]
async fn test_insufficient_quota_is_quota_error() {
    let error = concept_error(
        StatusCode::TOO_MANY_REQUESTS,
        provider_error("You exceeded your current quota", Some("insufficient_quota"), Some("insufficient_quota")),
    )
    .await;
    assert_eq!(error.kind(), ErrorKind::QuotaExceeded);
}

#[tokio::test]
async fn test_plain_429_is_rate_limited() {
    let error = concept_error(
        StatusCode::TOO_MANY_REQUESTS,
        provider_error("Rate limit reached for gpt-4", Some("requests"), Some("rate_limit_exceeded")),
    )
    .await;
    assert_eq!(error.kind(), ErrorKind::RateLimited);
}

#[tokio::test]
async fn test_server_error_is_transient() {
    let error = concept_error(
        StatusCode::SERVICE_UNAVAILABLE,
        provider_error("The server is overloaded", Some("server_error"), None),
    )
    .await;
    assert_eq!(error.kind(), ErrorKind::Transient);
}

#[tokio::test]
async fn test_bad_request_is_unknown() {
    let error = concept_error(
        StatusCode::BAD_REQUEST,
        provider_error("Invalid model", Some("invalid_request_error"), None),
    )
    .await;
    assert!(matches!(error, GenerationError::ApiError { status: 400, .. }));
    assert_eq!(error.kind(), ErrorKind::Unknown);
}

#[tokio::test]
async fn test_non_json_content_is_malformed() {
    let error = concept_error(
        StatusCode::OK,
        chat_reply("Here is a lovely style concept for your dashboard!"),
    )
    .await;
    assert!(matches!(error, GenerationError::MalformedConcept { .. }));
    assert_eq!(error.kind(), ErrorKind::Unknown);
}

#[tokio::test]
async fn test_wrong_color_count_is_malformed() {
    let mut content: serde_json::Value =
        serde_json::from_str(&concept_content(&["a", "b", "c"])).unwrap();
    content["colors"] = serde_json::json!(["#FFFFFF", "#000000"]);

    let error = concept_error(StatusCode::OK, chat_reply(&content.to_string())).await;
    assert!(matches!(error, GenerationError::MalformedConcept { .. }));
}

#[tokio::test]
async fn test_blank_content_is_empty_response() {
    let error = concept_error(StatusCode::OK, chat_reply("   ")).await;
    assert!(matches!(error, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn test_missing_choices_is_empty_response() {
    let error = concept_error(StatusCode::OK, serde_json::json!({ "choices": [] })).await;
    assert!(matches!(error, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn test_unreachable_provider_is_transient() {
    let base_url = closed_base_url().await;
    let client = OpenAIClient::new(&openai_config(&base_url)).unwrap();
    let prompt = Prompt::parse(EXAMPLE_PROMPT).unwrap();

    let error = client.generate_style_concept(&prompt).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Transient);
}

#[tokio::test]
async fn test_image_request_shape() {
    let fake = FakeOpenAI::with_concept(&["a", "b", "c"]);
    let client = client_for(&fake).await;

    let url = client.generate_image("stethoscope on a desk").await;
    assert_eq!(url, Some(image_url_for("stethoscope")));

    let requests = fake.image_requests.lock().await;
    let body = &requests[0];
    assert_eq!(body["model"], "dall-e-3");
    assert_eq!(body["size"], "1024x1024");
    assert_eq!(body["quality"], "standard");
    assert_eq!(body["n"], 1);
    assert_eq!(
        body["prompt"],
        format!("stethoscope on a desk{}", IMAGE_STYLE_SUFFIX)
    );
}

#[tokio::test]
async fn test_image_failure_is_none() {
    let fake = FakeOpenAI::with_concept(&["a", "b", "c"]);
    let client = client_for(&fake).await;

    let url = client.generate_image(&format!("broken {}", FAIL)).await;
    assert!(url.is_none());
    assert_eq!(fake.image_call_count().await, 1);
}

#[tokio::test]
async fn test_check_connection_uses_small_request() {
    let fake = FakeOpenAI::with_chat(StatusCode::OK, chat_reply("Hello, VibeBoard!"));
    let client = client_for(&fake).await;

    let reply = client.check_connection().await.unwrap();
    assert_eq!(reply, "Hello, VibeBoard!");

    let requests = fake.chat_requests.lock().await;
    let body = &requests[0];
    assert_eq!(body["max_tokens"], 10);
    assert!(body.get("temperature").is_none());
    assert_eq!(body["messages"][0]["content"], CONNECTION_CHECK_MESSAGE);
}

#[test]
fn test_client_requires_api_key() {
    let mut config = openai_config("http://localhost/v1");
    config.api_key = None;
    let error = OpenAIClient::new(&config).err().unwrap();
    assert_eq!(error.kind(), ErrorKind::Config);
}
