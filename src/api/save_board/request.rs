// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Board save request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::board::MoodboardDraft;
use crate::generation::{FontPairing, Prompt, PromptError};

/// Request body for POST /api/save-board
///
/// Clients send back the board they received; `id` and timestamps are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBoardRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub ai_concept: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub font_pairing: Option<FontPairing>,
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
}

impl SaveBoardRequest {
    /// Validate the request and build the draft to persist
    pub fn validate(self) -> Result<MoodboardDraft, ApiError> {
        let (raw_prompt, colors, font_pairing, image_urls) =
            match (self.prompt, self.colors, self.font_pairing, self.image_urls) {
                (Some(p), Some(c), Some(f), Some(i)) => (p, c, f, i),
                _ => return Err(ApiError::MissingBoardData),
            };

        let prompt = Prompt::parse(&raw_prompt).map_err(|e| match e {
            PromptError::Empty | PromptError::Missing => ApiError::MissingBoardData,
            other => ApiError::from(other),
        })?;

        Ok(MoodboardDraft {
            prompt: prompt.into_inner(),
            ai_concept: self.ai_concept.unwrap_or_default(),
            colors,
            font_pairing,
            image_urls,
        })
    }
}
