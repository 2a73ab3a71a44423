// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Board save response types

use serde::{Deserialize, Serialize};

use crate::storage::SavedBoard;

pub const SAVE_SUCCESS_MESSAGE: &str = "Board saved successfully";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveBoardResponse {
    pub success: bool,
    pub data: SavedBoard,
    pub message: String,
}

impl SaveBoardResponse {
    pub fn new(saved: SavedBoard) -> Self {
        Self {
            success: true,
            data: saved,
            message: SAVE_SUCCESS_MESSAGE.to_string(),
        }
    }
}
