// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Board store trait and an in-memory backend

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::types::{BoardRow, NewBoardRow, SavedBoard, StorageError};
use crate::board::MoodboardDraft;

/// Persists composed moodboards
///
/// A single best-effort insert; no retries, no update path.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Insert one board and return its store-generated identity
    async fn insert_board(&self, board: &MoodboardDraft) -> Result<SavedBoard, StorageError>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Process-local store, used for development and tests
#[derive(Debug, Default, Clone)]
pub struct MemoryBoardStore {
    rows: Arc<Mutex<Vec<BoardRow>>>,
    injected_error: Arc<Mutex<Option<StorageError>>>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next insert fail with `error`
    pub async fn inject_error(&self, error: StorageError) {
        *self.injected_error.lock().await = Some(error);
    }

    pub async fn rows(&self) -> Vec<BoardRow> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn insert_board(&self, board: &MoodboardDraft) -> Result<SavedBoard, StorageError> {
        if let Some(error) = self.injected_error.lock().await.take() {
            return Err(error);
        }

        let insert = NewBoardRow::from(board);
        let now = Utc::now();
        let row = BoardRow {
            id: Uuid::new_v4().to_string(),
            user_id: insert.user_id,
            project_id: None,
            prompt: insert.prompt,
            colors: insert.colors,
            font_pairing: insert.font_pairing,
            image_urls: insert.image_urls,
            ai_concept: insert.ai_concept,
            created_at: now,
            updated_at: now,
        };

        let saved = SavedBoard::from(&row);
        self.rows.lock().await.push(row);
        Ok(saved)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
