// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - Shared logic for all frontends
//
// This crate provides:
// - KeyValueStore with in-memory and file-backed adapters
// - The static beach and mountain catalog
// - Progress, favorites, notes and profile stores
// - Catalog filtering and progress summaries
// - TravelLog, the service frontends are handed
//
// Frontend-specific code lives in separate crates.

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod kv;
pub mod notes;
pub mod profile;
pub mod progress;
pub mod query;
pub mod service;
pub mod types;

// Re-export commonly used items
pub use catalog::Destination;
pub use favorites::FavoritesStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use notes::NotesStore;
pub use profile::ProfileStore;
pub use progress::ProgressStore;
pub use query::{FavoriteItem, Filter, ProgressSummary};
pub use service::{DestinationRow, ProfileOverview, TravelLog};
pub use types::{
    AppConfig, AppError, Avatar, Category, ClearScope, DestinationKey, IndianState, Note, Region,
    UserProfile,
};
