// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Moodboard generation response types

use serde::{Deserialize, Serialize};

use crate::board::VibeBoard;

/// Success envelope: `{ "success": true, "data": VibeBoard }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMoodboardResponse {
    pub success: bool,
    pub data: VibeBoard,
}

impl GenerateMoodboardResponse {
    pub fn new(board: VibeBoard) -> Self {
        Self {
            success: true,
            data: board,
        }
    }
}
