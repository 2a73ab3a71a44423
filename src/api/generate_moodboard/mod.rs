// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Moodboard generation API endpoint module
//!
//! Provides POST /api/generate-moodboard.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_moodboard_handler;
pub use request::GenerateMoodboardRequest;
pub use response::GenerateMoodboardResponse;
