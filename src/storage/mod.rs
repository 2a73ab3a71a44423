// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Board persistence
//!
//! One best-effort insert per save; the hosted backend is Supabase.

pub mod store;
pub mod supabase;
pub mod types;

pub use store::{BoardStore, MemoryBoardStore};
pub use supabase::SupabaseBoardStore;
pub use types::{BoardRow, NewBoardRow, SavedBoard, StorageError};
