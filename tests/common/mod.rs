// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared test helpers: in-process fake OpenAI and Supabase servers

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{HeaderMap, Method, Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Barrier, Mutex};
use tower::util::ServiceExt;
use vibeboard::config::{OpenAIConfig, SupabaseConfig};
use vibeboard::generation::{
    parse_style_concept, ConceptGenerator, ErrorKind, GenerationError, ImageGenerator,
    MoodboardOrchestrator, Prompt, StyleConcept,
};

pub const EXAMPLE_PROMPT: &str = "Minimal AI dashboard for doctors";
pub const EXAMPLE_COLORS: [&str; 5] = ["#FFFFFF", "#000000", "#2563EB", "#9CA3AF", "#111827"];

/// Image prompt markers understood by the fake image endpoint
pub const FAIL: &str = "[fail]";
pub const EMPTY: &str = "[empty]";
pub const SLOW: &str = "[slow]";

/// Serve `router` on an ephemeral port and return its base URL
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1", addr)
}

/// Style concept JSON as the chat model would return it
pub fn concept_content(image_prompts: &[&str]) -> String {
    json!({
        "description": "Calm clinical interface with generous whitespace and a trustworthy blue accent.",
        "colors": EXAMPLE_COLORS,
        "fontPairing": { "heading": "Inter", "body": "Source Sans Pro", "category": "minimal" },
        "imagePrompts": image_prompts,
    })
    .to_string()
}

pub fn chat_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    })
}

pub fn provider_error(message: &str, error_type: Option<&str>, code: Option<&str>) -> Value {
    json!({ "error": { "message": message, "type": error_type, "code": code } })
}

/// URL the fake image endpoint returns for a prompt: first word of the prompt
pub fn image_url_for(prompt: &str) -> String {
    let slug = prompt.split_whitespace().next().unwrap_or("image");
    format!("https://images.test/{}.png", slug)
}

pub fn openai_config(base_url: &str) -> OpenAIConfig {
    OpenAIConfig {
        api_key: Some("sk-test".to_string()),
        base_url: base_url.to_string(),
        timeout_secs: 10,
        ..OpenAIConfig::default()
    }
}

pub fn supabase_config(base_url: &str) -> SupabaseConfig {
    SupabaseConfig {
        url: Some(base_url.to_string()),
        anon_key: Some("anon-test-key".to_string()),
        ..SupabaseConfig::default()
    }
}

/// Fake OpenAI API
///
/// The chat endpoint returns a fixed reply. The image endpoint reacts to markers
/// in the prompt: `[fail]` returns 500, `[empty]` returns an empty URL, `[slow]`
/// delays the response.
#[derive(Clone)]
pub struct FakeOpenAI {
    chat_status: StatusCode,
    chat_body: Value,
    image_barrier: Option<Arc<Barrier>>,
    pub chat_requests: Arc<Mutex<Vec<Value>>>,
    pub image_requests: Arc<Mutex<Vec<Value>>>,
    pub authorizations: Arc<Mutex<Vec<String>>>,
}

impl FakeOpenAI {
    pub fn with_concept(image_prompts: &[&str]) -> Self {
        Self::with_chat(StatusCode::OK, chat_reply(&concept_content(image_prompts)))
    }

    pub fn with_chat(status: StatusCode, body: Value) -> Self {
        Self {
            chat_status: status,
            chat_body: body,
            image_barrier: None,
            chat_requests: Arc::new(Mutex::new(Vec::new())),
            image_requests: Arc::new(Mutex::new(Vec::new())),
            authorizations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Hold every image response until `n` image requests are in flight
    pub fn with_image_barrier(mut self, n: usize) -> Self {
        self.image_barrier = Some(Arc::new(Barrier::new(n)));
        self
    }

    /// Start the server and return its `/v1` base URL
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/v1/chat/completions", post(chat_handler))
            .route("/v1/images/generations", post(image_handler))
            .with_state(self.clone());
        format!("{}/v1", spawn_server(router).await)
    }

    pub async fn image_call_count(&self) -> usize {
        self.image_requests.lock().await.len()
    }

    pub async fn chat_call_count(&self) -> usize {
        self.chat_requests.lock().await.len()
    }

    async fn record_auth(&self, headers: &HeaderMap) {
        if let Some(value) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
            self.authorizations.lock().await.push(value.to_string());
        }
    }
}

async fn chat_handler(
    State(fake): State<FakeOpenAI>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    fake.record_auth(&headers).await;
    fake.chat_requests.lock().await.push(body);
    (fake.chat_status, Json(fake.chat_body.clone()))
}

async fn image_handler(
    State(fake): State<FakeOpenAI>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    fake.record_auth(&headers).await;
    let prompt = body["prompt"].as_str().unwrap_or_default().to_string();
    fake.image_requests.lock().await.push(body);

    if let Some(barrier) = &fake.image_barrier {
        barrier.wait().await;
    }
    if prompt.contains(SLOW) {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
    if prompt.contains(FAIL) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(provider_error("image backend unavailable", Some("server_error"), None)),
        );
    }

    let url = if prompt.contains(EMPTY) {
        String::new()
    } else {
        image_url_for(&prompt)
    };

    (
        StatusCode::OK,
        Json(json!({
            "created": 1735700000,
            "data": [{ "url": url, "revised_prompt": prompt }]
        })),
    )
}

/// One request received by the fake Supabase endpoint
#[derive(Debug, Clone)]
pub struct RecordedInsert {
    pub headers: HeaderMap,
    pub body: Value,
}

/// Fake Supabase REST endpoint for the `vibe_boards` table
#[derive(Clone)]
pub struct FakeSupabase {
    failure: Option<(StatusCode, Value)>,
    return_rows: bool,
    pub inserts: Arc<Mutex<Vec<RecordedInsert>>>,
}

impl FakeSupabase {
    pub fn new() -> Self {
        Self {
            failure: None,
            return_rows: true,
            inserts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(status: StatusCode, body: Value) -> Self {
        Self {
            failure: Some((status, body)),
            ..Self::new()
        }
    }

    /// Acknowledge inserts with an empty representation
    pub fn without_rows() -> Self {
        Self {
            return_rows: false,
            ..Self::new()
        }
    }

    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/rest/v1/vibe_boards", post(insert_handler))
            .with_state(self.clone());
        spawn_server(router).await
    }
}

async fn insert_handler(
    State(fake): State<FakeSupabase>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    fake.inserts.lock().await.push(RecordedInsert {
        headers,
        body: body.clone(),
    });

    if let Some((status, error)) = &fake.failure {
        return (*status, Json(error.clone()));
    }
    if !fake.return_rows {
        return (StatusCode::CREATED, Json(json!([])));
    }

    let mut row = body;
    row["id"] = json!("9f1c2b3a-4d5e-4f60-8a7b-1c2d3e4f5a6b");
    row["project_id"] = Value::Null;
    row["created_at"] = json!("2025-03-01T10:20:30.123456+00:00");
    row["updated_at"] = json!("2025-03-01T10:20:30.123456+00:00");
    (StatusCode::CREATED, Json(json!([row])))
}

/// Concept generator double that succeeds or fails with a fixed kind
pub struct StubConcepts {
    failure: Option<ErrorKind>,
}

impl StubConcepts {
    pub fn ok() -> Self {
        Self { failure: None }
    }

    pub fn failing(kind: ErrorKind) -> Self {
        Self {
            failure: Some(kind),
        }
    }
}

#[async_trait]
impl ConceptGenerator for StubConcepts {
    async fn generate_style_concept(
        &self,
        _prompt: &Prompt,
    ) -> Result<StyleConcept, GenerationError> {
        let message = "stubbed failure".to_string();
        match self.failure {
            None => parse_style_concept(&concept_content(&[
                "p1 clinical workspace",
                "p2 abstract pattern",
                "p3 dashboard mockup",
            ])),
            Some(ErrorKind::Config) => Err(GenerationError::Config { message }),
            Some(ErrorKind::QuotaExceeded) => Err(GenerationError::QuotaExceeded { message }),
            Some(ErrorKind::RateLimited) => Err(GenerationError::RateLimited { message }),
            Some(ErrorKind::Transient) => Err(GenerationError::Transient { message }),
            Some(ErrorKind::Unknown) => Err(GenerationError::EmptyResponse),
        }
    }
}

/// Image generator double: prompts containing `[fail]` yield no image
#[derive(Default)]
pub struct StubImages {
    pub calls: std::sync::atomic::AtomicUsize,
}

#[async_trait]
impl ImageGenerator for StubImages {
    async fn generate_image(&self, prompt: &str) -> Option<String> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if prompt.contains(FAIL) {
            None
        } else {
            Some(image_url_for(prompt))
        }
    }
}

pub fn stub_orchestrator(concepts: StubConcepts) -> Arc<MoodboardOrchestrator> {
    Arc::new(MoodboardOrchestrator::new(
        Arc::new(concepts),
        Arc::new(StubImages::default()),
    ))
}

/// Send a request through the router and decode the JSON body
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
