// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAI-compatible client for style concepts and image generation

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::concept::{concept_request_message, parse_style_concept, STYLE_CONCEPT_INSTRUCTION};
use super::image::{styled_image_prompt, usable_url};
use super::prompt::Prompt;
use super::provider::{ConceptGenerator, ImageGenerator};
use super::types::{GenerationError, StyleConcept};
use crate::config::OpenAIConfig;

/// Message used by the connectivity check
pub const CONNECTION_CHECK_MESSAGE: &str = "Say \"Hello, VibeBoard!\" to test the connection.";

/// Error codes the provider uses for exhausted quota or billing limits
const QUOTA_ERROR_CODES: &[&str] = &["insufficient_quota", "billing_hard_limit_reached"];

/// Client for an OpenAI-compatible API
///
/// Constructed explicitly from `OpenAIConfig` and shared behind `Arc`.
pub struct OpenAIClient {
    client: Client,
    base_url: String,
    api_key: String,
    config: OpenAIConfig,
}

// --- Wire types ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub n: u32,
}

#[derive(Debug, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
    pub revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
}

// --- Implementations ---

impl OpenAIClient {
    /// Create a new client. Fails with a configuration error when no API key is set.
    pub fn new(config: &OpenAIConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| GenerationError::Config {
                message: "OpenAI API key is not configured".to_string(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::Config {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        info!(
            "OpenAI client configured: base_url={}, chat_model={}, image_model={}",
            base_url, config.chat_model, config.image_model
        );

        Ok(Self {
            client,
            base_url,
            api_key,
            config: config.clone(),
        })
    }

    pub fn chat_model(&self) -> &str {
        &self.config.chat_model
    }

    pub fn image_model(&self) -> &str {
        &self.config.image_model
    }

    /// Chat request carrying the style concept instruction
    pub fn style_concept_request(&self, prompt: &Prompt) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.chat_model.clone(),
            messages: vec![
                ChatMessage::system(STYLE_CONCEPT_INSTRUCTION),
                ChatMessage::user(concept_request_message(prompt)),
            ],
            temperature: Some(self.config.temperature),
            max_tokens: self.config.max_tokens,
        }
    }

    /// Image request for one styled prompt
    pub fn image_request(&self, prompt: &str) -> ImageGenerationRequest {
        ImageGenerationRequest {
            model: self.config.image_model.clone(),
            prompt: styled_image_prompt(prompt),
            size: self.config.image_size.clone(),
            quality: self.config.image_quality.clone(),
            n: 1,
        }
    }

    /// Run a chat completion and return the first choice's content
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<String, GenerationError> {
        let response: ChatCompletionResponse = self.post_json("chat/completions", request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }

    /// Generate one image and return its URL
    pub async fn create_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<String, GenerationError> {
        let response: ImageGenerationResponse =
            self.post_json("images/generations", request).await?;

        let first = response
            .data
            .into_iter()
            .next()
            .ok_or(GenerationError::EmptyResponse)?;

        if let Some(ref revised) = first.revised_prompt {
            debug!("Image prompt revised by provider: {}", revised);
        }

        usable_url(first.url).ok_or(GenerationError::EmptyResponse)
    }

    /// Minimal chat round-trip to verify credentials and connectivity
    pub async fn check_connection(&self) -> Result<String, GenerationError> {
        let request = ChatCompletionRequest {
            model: self.config.chat_model.clone(),
            messages: vec![ChatMessage::user(CONNECTION_CHECK_MESSAGE)],
            temperature: None,
            max_tokens: 10,
        };
        self.chat_completion(&request).await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, GenerationError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!("OpenAI POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &text));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| GenerationError::ApiError {
                status,
                message: format!("JSON parse error: {}", e),
            })
    }
}

/// Classify a non-success provider response by status and error code
pub fn classify_failure(status: u16, body: &str) -> GenerationError {
    let detail = serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .map(|b| b.error);

    let message = match detail {
        Some(ref d) if !d.message.is_empty() => d.message.clone(),
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => format!("HTTP {}", status),
    };

    let is_quota = detail.as_ref().map_or(false, |d| {
        [d.code.as_deref(), d.error_type.as_deref()]
            .into_iter()
            .flatten()
            .any(|c| QUOTA_ERROR_CODES.contains(&c))
    });

    if is_quota {
        return GenerationError::QuotaExceeded { message };
    }

    match status {
        401 | 403 => GenerationError::Config { message },
        429 => GenerationError::RateLimited { message },
        408 | 500..=599 => GenerationError::Transient { message },
        _ => GenerationError::ApiError { status, message },
    }
}

fn transport_error(e: reqwest::Error) -> GenerationError {
    if e.is_builder() {
        GenerationError::Config {
            message: format!("invalid request: {}", e),
        }
    } else if e.is_timeout() {
        GenerationError::Transient {
            message: format!("request timed out: {}", e),
        }
    } else {
        GenerationError::Transient {
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl ConceptGenerator for OpenAIClient {
    async fn generate_style_concept(
        &self,
        prompt: &Prompt,
    ) -> Result<StyleConcept, GenerationError> {
        debug!("Generating style concept for: {}", prompt.preview());
        let request = self.style_concept_request(prompt);
        let content = self.chat_completion(&request).await?;
        parse_style_concept(&content)
    }
}

#[async_trait]
impl ImageGenerator for OpenAIClient {
    async fn generate_image(&self, prompt: &str) -> Option<String> {
        let request = self.image_request(prompt);
        match self.create_image(&request).await {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(kind = ?e.kind(), "Image generation failed for '{}': {}", prompt, e);
                None
            }
        }
    }
}
