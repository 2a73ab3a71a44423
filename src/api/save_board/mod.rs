// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Board persistence API endpoint module
//!
//! Provides POST /api/save-board.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::save_board_handler;
pub use request::SaveBoardRequest;
pub use response::SaveBoardResponse;
