// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod generate_moodboard;
pub mod handlers;
pub mod http_server;
pub mod save_board;

pub use errors::{ApiError, ErrorResponse};
pub use generate_moodboard::{
    generate_moodboard_handler, GenerateMoodboardRequest, GenerateMoodboardResponse,
};
pub use handlers::{health_handler, HealthResponse};
pub use http_server::{create_app, start_server, AppState};
pub use save_board::{save_board_handler, SaveBoardRequest, SaveBoardResponse};
