// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Board save endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{error, info, warn};

use super::request::SaveBoardRequest;
use super::response::SaveBoardResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/save-board - Persist a generated board
///
/// Boards are saved anonymously. Returns 503 when no store is configured.
pub async fn save_board_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveBoardRequest>, JsonRejection>,
) -> Result<Json<SaveBoardResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Save request body rejected: {}", e);
        ApiError::MissingBoardData
    })?;

    let draft = request.validate()?;

    let store = state.board_store.as_ref().ok_or_else(|| {
        warn!("Save requested but no board store is configured");
        ApiError::PersistenceDisabled
    })?;

    let saved = store.insert_board(&draft).await.map_err(|e| {
        error!("Error saving board via {}: {}", store.name(), e);
        ApiError::from(e)
    })?;

    info!(
        "Board saved via {}: id={}, images={}",
        store.name(),
        saved.id,
        draft.image_urls.len()
    );

    Ok(Json(SaveBoardResponse::new(saved)))
}
