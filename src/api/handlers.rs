// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::http_server::AppState;
use crate::version;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// An OpenAI key is configured
    pub generation_enabled: bool,
    /// Supabase is configured; clients hide "save" when false
    pub persistence_enabled: bool,
}

impl HealthResponse {
    pub fn for_state(state: &AppState) -> Self {
        Self {
            status: "healthy".to_string(),
            version: version::VERSION_NUMBER.to_string(),
            generation_enabled: state.generation_enabled(),
            persistence_enabled: state.persistence_enabled(),
        }
    }
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::for_state(&state))
}
