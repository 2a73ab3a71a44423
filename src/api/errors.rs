// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::generation::{ErrorKind, MoodboardError, PromptError};
use crate::storage::StorageError;

/// Failure envelope: `{ "success": false, "error": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    ValidationError(String),
    MissingBoardData,
    GenerationNotConfigured,
    ProviderConfig,
    QuotaExceeded,
    RateLimited,
    GenerationFailed,
    PersistenceDisabled,
    SaveFailed,
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            ApiError::ValidationError(msg) => msg.clone(),
            ApiError::MissingBoardData => "Missing required board data".to_string(),
            ApiError::GenerationNotConfigured => "OpenAI API key is not configured".to_string(),
            ApiError::ProviderConfig => "OpenAI API configuration error".to_string(),
            ApiError::QuotaExceeded => {
                "OpenAI API quota exceeded. Please check your billing.".to_string()
            }
            ApiError::RateLimited => "Too many requests. Please try again in a moment.".to_string(),
            ApiError::GenerationFailed => "Failed to generate moodboard".to_string(),
            ApiError::PersistenceDisabled => {
                "Saving is currently disabled (Supabase not configured)".to_string()
            }
            ApiError::SaveFailed => "Failed to save board to database".to_string(),
            ApiError::InternalError(msg) => msg.clone(),
        };

        ErrorResponse {
            success: false,
            error: message,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::ValidationError(_) | ApiError::MissingBoardData => 400,
            ApiError::QuotaExceeded | ApiError::RateLimited => 429,
            ApiError::PersistenceDisabled => 503,
            ApiError::GenerationNotConfigured
            | ApiError::ProviderConfig
            | ApiError::GenerationFailed
            | ApiError::SaveFailed
            | ApiError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.to_response().error, self.status_code())
    }
}

impl std::error::Error for ApiError {}

impl From<PromptError> for ApiError {
    fn from(error: PromptError) -> Self {
        ApiError::ValidationError(error.to_string())
    }
}

impl From<MoodboardError> for ApiError {
    fn from(error: MoodboardError) -> Self {
        match error {
            MoodboardError::InvalidPrompt(e) => e.into(),
            MoodboardError::Generation(e) => match e.kind() {
                ErrorKind::Config => ApiError::ProviderConfig,
                ErrorKind::QuotaExceeded => ApiError::QuotaExceeded,
                ErrorKind::RateLimited => ApiError::RateLimited,
                ErrorKind::Transient | ErrorKind::Unknown => ApiError::GenerationFailed,
            },
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        warn!("Board store error: {}", error);
        ApiError::SaveFailed
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}
