// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Moodboard ("vibe board") artifacts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generation::{FontPairing, Prompt, StyleConcept};

/// Prefix of identifiers assigned to boards that have not been persisted
pub const TEMP_ID_PREFIX: &str = "temp-";

/// Orchestrator output: a board without identity or timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodboardDraft {
    pub prompt: String,
    pub ai_concept: String,
    pub colors: Vec<String>,
    pub font_pairing: FontPairing,
    /// Successful image URLs only, in image prompt order; may be shorter than the prompt list
    pub image_urls: Vec<String>,
}

impl MoodboardDraft {
    pub fn from_concept(prompt: &Prompt, concept: StyleConcept, image_urls: Vec<String>) -> Self {
        Self {
            prompt: prompt.as_str().to_string(),
            ai_concept: concept.description,
            colors: concept.colors,
            font_pairing: concept.font_pairing,
            image_urls,
        }
    }
}

/// A composed moodboard as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeBoard {
    pub id: String,
    pub prompt: String,
    pub ai_concept: String,
    pub colors: Vec<String>,
    pub font_pairing: FontPairing,
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VibeBoard {
    /// Wrap a draft with a temporary id and the current time
    pub fn from_draft(draft: MoodboardDraft) -> Self {
        Self::from_draft_at(draft, Utc::now())
    }

    pub fn from_draft_at(draft: MoodboardDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: temporary_id(now),
            prompt: draft.prompt,
            ai_concept: draft.ai_concept,
            colors: draft.colors,
            font_pairing: draft.font_pairing,
            image_urls: draft.image_urls,
            created_at: now,
            updated_at: now,
        }
    }

    /// True until the board has been given a store-generated id
    pub fn is_temporary(&self) -> bool {
        self.id.starts_with(TEMP_ID_PREFIX)
    }
}

/// `temp-<unix millis>`
pub fn temporary_id(now: DateTime<Utc>) -> String {
    format!("{}{}", TEMP_ID_PREFIX, now.timestamp_millis())
}
