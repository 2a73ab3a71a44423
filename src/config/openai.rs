// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the OpenAI-compatible generation provider

use url::Url;

use crate::generation::image::{ALLOWED_QUALITIES, ALLOWED_SIZES};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Provider endpoint, credentials and fixed request parameters
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key; generation is disabled when absent
    pub api_key: Option<String>,
    /// Base URL including the version segment, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    /// Chat model used for the style concept
    pub chat_model: String,
    /// Sampling temperature for the style concept
    pub temperature: f32,
    /// Token budget for the style concept
    pub max_tokens: u32,
    /// Image model
    pub image_model: String,
    /// Image size, square by default
    pub image_size: String,
    /// Image quality setting
    pub image_quality: String,
    /// Transport timeout per HTTP request, in seconds
    pub timeout_secs: u64,
}

impl OpenAIConfig {
    /// Load from a variable lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_key: lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            base_url: lookup("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            chat_model: lookup("OPENAI_CHAT_MODEL").unwrap_or(defaults.chat_model),
            temperature: lookup("OPENAI_TEMPERATURE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.temperature),
            max_tokens: lookup("OPENAI_MAX_TOKENS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_tokens),
            image_model: lookup("OPENAI_IMAGE_MODEL").unwrap_or(defaults.image_model),
            image_size: lookup("OPENAI_IMAGE_SIZE").unwrap_or(defaults.image_size),
            image_quality: lookup("OPENAI_IMAGE_QUALITY").unwrap_or(defaults.image_quality),
            timeout_secs: lookup("OPENAI_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.base_url)
            .map_err(|e| format!("invalid OPENAI_BASE_URL '{}': {}", self.base_url, e))?;
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            ));
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if !ALLOWED_SIZES.contains(&self.image_size.as_str()) {
            return Err(format!(
                "invalid image size '{}'; allowed: {}",
                self.image_size,
                ALLOWED_SIZES.join(", ")
            ));
        }
        if !ALLOWED_QUALITIES.contains(&self.image_quality.as_str()) {
            return Err(format!(
                "invalid image quality '{}'; allowed: {}",
                self.image_quality,
                ALLOWED_QUALITIES.join(", ")
            ));
        }
        if self.timeout_secs == 0 {
            return Err("timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Whether an API key is available
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_model: "gpt-4".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            image_model: "dall-e-3".to_string(),
            image_size: "1024x1024".to_string(),
            image_quality: "standard".to_string(),
            timeout_secs: 120,
        }
    }
}
