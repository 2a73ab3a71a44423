// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for moodboard generation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Heading/body font pair suggested for a moodboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPairing {
    /// Font used for headings (a Google Fonts family name)
    pub heading: String,
    /// Font used for body copy
    pub body: String,
    /// Loose style category, e.g. "modern", "elegant", "playful"
    pub category: String,
}

/// Structured style concept returned by the chat-completion call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConcept {
    /// Two or three sentences describing the visual style and mood
    pub description: String,
    /// Hex color codes, in palette order
    pub colors: Vec<String>,
    /// Suggested font pairing
    pub font_pairing: FontPairing,
    /// Short prompts, one per image to generate
    pub image_prompts: Vec<String>,
}

/// Closed classification of provider failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or rejected credentials, bad endpoint configuration
    Config,
    /// Account quota or billing limit exhausted
    QuotaExceeded,
    /// Provider rate limit hit
    RateLimited,
    /// Network failure, timeout or provider-side 5xx
    Transient,
    /// Anything else, including malformed responses
    Unknown,
}

/// Errors that can occur while talking to the generation provider
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Provider rejected the configuration (e.g. invalid API key)
    #[error("Provider configuration error: {message}")]
    Config {
        /// Provider-supplied or local message
        message: String,
    },

    /// Account quota or billing limit exhausted
    #[error("Provider quota exceeded: {message}")]
    QuotaExceeded {
        /// Provider-supplied message
        message: String,
    },

    /// Rate limited by the provider
    #[error("Provider rate limit reached: {message}")]
    RateLimited {
        /// Provider-supplied message
        message: String,
    },

    /// Network failure, timeout or 5xx
    #[error("Transient provider failure: {message}")]
    Transient {
        /// Description of the failure
        message: String,
    },

    /// Unclassified error status from the provider
    #[error("Provider API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// The provider answered but returned no usable content
    #[error("No content in provider response")]
    EmptyResponse,

    /// The content was not a style concept of the expected shape
    #[error("Malformed style concept: {reason}")]
    MalformedConcept {
        /// What was wrong with the content
        reason: String,
    },
}

impl GenerationError {
    /// Structural classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Config { .. } => ErrorKind::Config,
            GenerationError::QuotaExceeded { .. } => ErrorKind::QuotaExceeded,
            GenerationError::RateLimited { .. } => ErrorKind::RateLimited,
            GenerationError::Transient { .. } => ErrorKind::Transient,
            GenerationError::ApiError { .. }
            | GenerationError::EmptyResponse
            | GenerationError::MalformedConcept { .. } => ErrorKind::Unknown,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        GenerationError::MalformedConcept {
            reason: reason.into(),
        }
    }
}
