// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Moodboard generation endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::request::GenerateMoodboardRequest;
use super::response::GenerateMoodboardResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::board::VibeBoard;
use crate::generation::PromptError;

/// POST /api/generate-moodboard - Generate a moodboard from a text prompt
///
/// Pipeline:
/// 1. Parse body (400 if it is not `{ prompt: string }`)
/// 2. Validate prompt (400 if blank or over 500 characters)
/// 3. Get orchestrator from AppState (500 if no API key is configured)
/// 4. Generate concept and images
/// 5. Wrap the draft with a temporary id and timestamps
pub async fn generate_moodboard_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateMoodboardRequest>, JsonRejection>,
) -> Result<Json<GenerateMoodboardResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    // 1. Parse body
    let Json(request) = payload.map_err(|e| {
        warn!("[{}] Moodboard request body rejected: {}", request_id, e);
        ApiError::from(PromptError::Missing)
    })?;

    // 2. Validate prompt
    let prompt = request.validate().map_err(|e| {
        warn!("[{}] Moodboard validation failed: {}", request_id, e);
        ApiError::from(e)
    })?;

    // 3. Orchestrator is absent when OPENAI_API_KEY is unset
    let orchestrator = state.orchestrator.as_ref().ok_or_else(|| {
        warn!("[{}] Generation requested but no API key configured", request_id);
        ApiError::GenerationNotConfigured
    })?;

    info!(
        "[{}] Processing moodboard generation request: {}",
        request_id,
        prompt.preview()
    );

    // 4. Generate
    let draft = orchestrator.generate(&prompt).await.map_err(|e| {
        error!("[{}] Error generating moodboard: {}", request_id, e);
        ApiError::from(e)
    })?;

    // 5. Compose response
    let board = VibeBoard::from_draft(draft);
    info!(
        "[{}] Moodboard generated successfully: id={}, colors={}, images={}, category={}",
        request_id,
        board.id,
        board.colors.len(),
        board.image_urls.len(),
        board.font_pairing.category
    );
    debug!("[{}] Board: {:?}", request_id, board);

    Ok(Json(GenerateMoodboardResponse::new(board)))
}
