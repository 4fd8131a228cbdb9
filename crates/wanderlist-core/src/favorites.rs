// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - Favorites storage
//
// Favorites span both categories and are stored as one JSON array of
// composite "{type}_{id}" strings.

use crate::kv::{keys, read_json, write_json, KeyValueStore};
use crate::types::{AppError, DestinationKey};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Tracks which destinations the user has starred
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Stored favorites split into readable keys and raw entries that are not
    /// valid composite keys
    async fn load_entries(&self) -> Result<(BTreeSet<DestinationKey>, Vec<String>), AppError> {
        let raw: Vec<String> = read_json(self.store.as_ref(), keys::FAVORITES)
            .await?
            .unwrap_or_default();

        let mut favorites = BTreeSet::new();
        let mut unreadable = Vec::new();
        for entry in raw {
            match entry.parse::<DestinationKey>() {
                Ok(key) => {
                    favorites.insert(key);
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable favorite {:?}: {}", entry, e);
                    if !unreadable.contains(&entry) {
                        unreadable.push(entry);
                    }
                }
            }
        }

        Ok((favorites, unreadable))
    }

    /// Load favorites. Entries that are not valid composite keys are skipped.
    pub async fn try_get_favorites(&self) -> Result<BTreeSet<DestinationKey>, AppError> {
        Ok(self.load_entries().await?.0)
    }

    pub async fn try_set_favorites(
        &self,
        favorites: &BTreeSet<DestinationKey>,
    ) -> Result<(), AppError> {
        write_json(self.store.as_ref(), keys::FAVORITES, favorites).await
    }

    pub async fn get_favorites(&self) -> BTreeSet<DestinationKey> {
        self.try_get_favorites().await.unwrap_or_else(|e| {
            tracing::error!("Error loading favorites: {}", e);
            BTreeSet::new()
        })
    }

    pub async fn set_favorites(&self, favorites: &BTreeSet<DestinationKey>) {
        if let Err(e) = self.try_set_favorites(favorites).await {
            tracing::error!("Error saving favorites: {}", e);
        }
    }

    pub async fn is_favorite(&self, key: &DestinationKey) -> bool {
        self.get_favorites().await.contains(key)
    }

    /// Flip membership of `key`; the strict version reports storage errors.
    /// Unreadable stored entries are written back unchanged.
    pub async fn try_toggle_favorite(&self, key: &DestinationKey) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock().await;

        let (mut favorites, unreadable) = self.load_entries().await?;
        let now_favorite = if favorites.remove(key) {
            false
        } else {
            favorites.insert(key.clone());
            true
        };

        let entries: Vec<String> = favorites
            .iter()
            .map(DestinationKey::to_string)
            .chain(unreadable)
            .collect();
        write_json(self.store.as_ref(), keys::FAVORITES, &entries).await?;
        tracing::debug!("Favorite {} -> {}", key, now_favorite);
        Ok(now_favorite)
    }

    /// Flip membership of `key` and return whether it is now a favorite.
    /// Reports `false` on any storage error.
    pub async fn toggle_favorite(&self, key: &DestinationKey) -> bool {
        self.try_toggle_favorite(key).await.unwrap_or_else(|e| {
            tracing::error!("Error toggling favorite {}: {}", key, e);
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{FailingStore, MemoryStore};

    #[tokio::test]
    async fn test_toggle_alternates() {
        let favorites = FavoritesStore::new(Arc::new(MemoryStore::new()));
        let key = DestinationKey::beach("b10");

        assert!(!favorites.is_favorite(&key).await);
        assert!(favorites.toggle_favorite(&key).await);
        assert!(!favorites.toggle_favorite(&key).await);
        assert!(favorites.toggle_favorite(&key).await);
        assert!(favorites.is_favorite(&key).await);
    }

    #[tokio::test]
    async fn test_cross_category_keys_are_distinct() {
        let favorites = FavoritesStore::new(Arc::new(MemoryStore::new()));
        favorites.toggle_favorite(&DestinationKey::beach("x1")).await;

        assert!(favorites.is_favorite(&DestinationKey::beach("x1")).await);
        assert!(!favorites.is_favorite(&DestinationKey::mountain("x1")).await);
    }

    #[tokio::test]
    async fn test_wire_format_uses_composite_strings() {
        let kv = Arc::new(MemoryStore::new());
        let favorites = FavoritesStore::new(kv.clone());

        let set: BTreeSet<_> = [DestinationKey::beach("b1"), DestinationKey::mountain("m9")]
            .into_iter()
            .collect();
        favorites.set_favorites(&set).await;

        let raw = kv.get(keys::FAVORITES).await.unwrap().unwrap();
        assert_eq!(raw, r#"["beach_b1","mountain_m9"]"#);
        assert_eq!(favorites.get_favorites().await, set);
    }

    #[tokio::test]
    async fn test_skips_malformed_entries() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(
            keys::FAVORITES,
            r#"["beach_b3","garbage","lake_l1","mountain_m2"]"#.to_string(),
        )
        .await
        .unwrap();

        let favorites = FavoritesStore::new(kv);
        let loaded = favorites.get_favorites().await;
        assert_eq!(loaded.len(), 2);
        assert!(loaded.contains(&DestinationKey::beach("b3")));
        assert!(loaded.contains(&DestinationKey::mountain("m2")));
    }

    #[tokio::test]
    async fn test_toggle_keeps_unreadable_entries() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(keys::FAVORITES, r#"["garbage","beach_b3"]"#.to_string())
            .await
            .unwrap();

        let favorites = FavoritesStore::new(kv.clone());
        assert!(favorites.toggle_favorite(&DestinationKey::mountain("m2")).await);
        assert!(!favorites.toggle_favorite(&DestinationKey::beach("b3")).await);

        let raw = kv.get(keys::FAVORITES).await.unwrap().unwrap();
        assert_eq!(raw, r#"["mountain_m2","garbage"]"#);
        assert_eq!(
            favorites.get_favorites().await,
            BTreeSet::from([DestinationKey::mountain("m2")])
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_toggles_all_land() {
        let favorites = Arc::new(FavoritesStore::new(Arc::new(MemoryStore::new())));

        let handles: Vec<_> = (1..=20)
            .map(|n| {
                let favorites = favorites.clone();
                tokio::spawn(async move {
                    let key = if n % 2 == 0 {
                        DestinationKey::beach(format!("b{}", n))
                    } else {
                        DestinationKey::mountain(format!("m{}", n))
                    };
                    assert!(favorites.toggle_favorite(&key).await);
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(favorites.get_favorites().await.len(), 20);
    }

    #[tokio::test]
    async fn test_failure_reports_not_favorite() {
        let favorites = FavoritesStore::new(Arc::new(FailingStore));
        let key = DestinationKey::mountain("m1");

        assert!(!favorites.toggle_favorite(&key).await);
        assert!(favorites.try_toggle_favorite(&key).await.is_err());
        assert!(favorites.get_favorites().await.is_empty());
    }
}
