// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Row shapes and errors for board persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::MoodboardDraft;
use crate::generation::FontPairing;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Authentication error: {0}")]
    AuthError(String),
    #[error("Store API error: {status} - {message}")]
    ApiError { status: u16, message: String },
    #[error("Store returned no row")]
    EmptyResponse,
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Insert payload for the `vibe_boards` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBoardRow {
    pub prompt: String,
    pub ai_concept: Option<String>,
    pub colors: Vec<String>,
    pub font_pairing: FontPairing,
    pub image_urls: Vec<String>,
    /// Boards are saved anonymously; serialized as an explicit `null`
    pub user_id: Option<String>,
}

impl From<&MoodboardDraft> for NewBoardRow {
    fn from(draft: &MoodboardDraft) -> Self {
        Self {
            prompt: draft.prompt.clone(),
            ai_concept: Some(draft.ai_concept.clone()).filter(|c| !c.is_empty()),
            colors: draft.colors.clone(),
            font_pairing: draft.font_pairing.clone(),
            image_urls: draft.image_urls.clone(),
            user_id: None,
        }
    }
}

/// A stored `vibe_boards` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardRow {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    pub prompt: String,
    pub colors: Vec<String>,
    pub font_pairing: FontPairing,
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub ai_concept: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Identity and timestamps of a persisted board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBoard {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&BoardRow> for SavedBoard {
    fn from(row: &BoardRow) -> Self {
        Self {
            id: row.id.clone(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
