// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Supabase (PostgREST) board store

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::store::BoardStore;
use super::types::{BoardRow, NewBoardRow, SavedBoard, StorageError};
use crate::board::MoodboardDraft;
use crate::config::SupabaseConfig;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Inserts boards through the Supabase REST endpoint
pub struct SupabaseBoardStore {
    client: Client,
    table_url: String,
    anon_key: String,
}

impl SupabaseBoardStore {
    /// Create a store from configuration. Both URL and anon key are required.
    pub fn new(config: &SupabaseConfig) -> Result<Self, StorageError> {
        let (url, anon_key) = match (&config.url, &config.anon_key) {
            (Some(url), Some(key)) => (url, key.clone()),
            _ => {
                return Err(StorageError::ConfigError(
                    "Supabase URL and anon key are required".to_string(),
                ))
            }
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        let table_url = format!(
            "{}/rest/v1/{}",
            url.trim_end_matches('/'),
            config.table
        );
        info!("Supabase board store configured: {}", table_url);

        Ok(Self {
            client,
            table_url,
            anon_key,
        })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }
}

#[async_trait]
impl BoardStore for SupabaseBoardStore {
    async fn insert_board(&self, board: &MoodboardDraft) -> Result<SavedBoard, StorageError> {
        let row = NewBoardRow::from(board);
        debug!("Supabase insert POST {}", self.table_url);

        let response = self
            .client
            .post(&self.table_url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(|e| StorageError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == 401 || status == 403 {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::AuthError(message));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let rows: Vec<BoardRow> = response
            .json()
            .await
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let stored = rows.first().ok_or(StorageError::EmptyResponse)?;
        info!("Board saved: id={}", stored.id);
        Ok(SavedBoard::from(stored))
    }

    fn name(&self) -> &'static str {
        "supabase"
    }
}
