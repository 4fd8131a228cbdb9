// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - Persistence service
//
// Bundles every store over one shared key-value adapter. Frontends receive
// a TravelLog explicitly instead of reaching for global storage.

use crate::catalog;
use crate::favorites::FavoritesStore;
use crate::kv::{keys, FileStore, KeyValueStore, MemoryStore};
use crate::notes::NotesStore;
use crate::profile::ProfileStore;
use crate::progress::ProgressStore;
use crate::query::{self, FavoriteItem, Filter, ProgressSummary};
use crate::types::{AppConfig, AppError, Category, ClearScope, DestinationKey, UserProfile};
use std::sync::Arc;

/// Everything the profile screen shows, loaded in one go
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOverview {
    pub profile: UserProfile,
    pub beaches: ProgressSummary,
    pub mountains: ProgressSummary,
    pub favorites: Vec<FavoriteItem>,
}

/// One catalog row as a list screen shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationRow {
    pub destination: &'static catalog::Destination,
    pub visited: bool,
    pub favorite: bool,
}

/// The persistence service handed to frontends
#[derive(Clone)]
pub struct TravelLog {
    store: Arc<dyn KeyValueStore>,
    progress: Arc<ProgressStore>,
    favorites: Arc<FavoritesStore>,
    notes: Arc<NotesStore>,
    profile: Arc<ProfileStore>,
    clear_scope: ClearScope,
}

impl TravelLog {
    pub fn new(store: Arc<dyn KeyValueStore>, clear_scope: ClearScope) -> Self {
        Self {
            progress: Arc::new(ProgressStore::new(store.clone())),
            favorites: Arc::new(FavoritesStore::new(store.clone())),
            notes: Arc::new(NotesStore::new(store.clone())),
            profile: Arc::new(ProfileStore::new(store.clone())),
            store,
            clear_scope,
        }
    }

    /// Service over an in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), ClearScope::default())
    }

    /// Service over the file store described by `config`
    pub async fn open(config: &AppConfig) -> Result<Self, AppError> {
        let store = FileStore::from_config(config).await?;
        Ok(Self::new(Arc::new(store), config.clear_scope))
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn notes(&self) -> &NotesStore {
        &self.notes
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    pub fn clear_scope(&self) -> ClearScope {
        self.clear_scope
    }

    /// Keys removed by [`TravelLog::clear_all`]. The profile is never included.
    pub fn clear_keys(&self) -> &'static [&'static str] {
        match self.clear_scope {
            ClearScope::ProgressOnly => &[keys::VISITED_BEACHES, keys::VISITED_MOUNTAINS],
            ClearScope::Everything => &[
                keys::VISITED_BEACHES,
                keys::VISITED_MOUNTAINS,
                keys::FAVORITES,
                keys::DESTINATION_NOTES,
            ],
        }
    }

    /// Remove stored progress in one batch. Failures are logged only.
    pub async fn clear_all(&self) {
        let keys = self.clear_keys();
        match self.store.multi_remove(keys).await {
            Ok(()) => tracing::info!("Cleared {} stored keys", keys.len()),
            Err(e) => tracing::error!("Error clearing data: {}", e),
        }
    }

    /// Filtered catalog rows annotated with visited and favorite state
    pub async fn list(
        &self,
        category: Category,
        filter: Filter,
        search_query: &str,
    ) -> Vec<DestinationRow> {
        let (visited, favorites) = tokio::join!(
            self.progress.get_visited(category),
            self.favorites.get_favorites()
        );

        query::filter_destinations(catalog::destinations(category), filter, search_query)
            .into_iter()
            .map(|destination| DestinationRow {
                destination,
                visited: visited.contains(destination.id),
                favorite: favorites.contains(&destination.key()),
            })
            .collect()
    }

    /// Toggle visited state for one destination; returns whether it is now visited
    pub async fn toggle_visited(&self, key: &DestinationKey) -> bool {
        self.progress
            .toggle(key.category, &key.id)
            .await
            .contains(&key.id)
    }

    /// Profile, progress and resolved favorites, loaded concurrently
    pub async fn profile_overview(&self) -> ProfileOverview {
        let (profile, beaches, mountains, favorites) = tokio::join!(
            self.profile.get_profile(),
            self.progress.get_visited(Category::Beach),
            self.progress.get_visited(Category::Mountain),
            self.favorites.get_favorites(),
        );

        ProfileOverview {
            profile,
            beaches: query::category_summary(Category::Beach, &beaches),
            mountains: query::category_summary(Category::Mountain, &mountains),
            favorites: query::resolve_favorites(&favorites),
        }
    }
}
