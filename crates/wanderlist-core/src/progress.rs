// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - Visited progress storage
//
// One visited set per category, stored as a JSON array of ids.

use crate::kv::{read_json, write_json, KeyValueStore};
use crate::types::{AppError, Category};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Tracks which catalog entries the user has visited
pub struct ProgressStore {
    store: Arc<dyn KeyValueStore>,
    // Serializes read-modify-write so rapid toggles never drop an update
    write_lock: Mutex<()>,
}

impl ProgressStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn try_get_visited(&self, category: Category) -> Result<BTreeSet<String>, AppError> {
        Ok(read_json(self.store.as_ref(), category.visited_key())
            .await?
            .unwrap_or_default())
    }

    pub async fn try_set_visited(
        &self,
        category: Category,
        visited: &BTreeSet<String>,
    ) -> Result<(), AppError> {
        write_json(self.store.as_ref(), category.visited_key(), visited).await
    }

    /// Visited ids for a category. Empty on any error.
    pub async fn get_visited(&self, category: Category) -> BTreeSet<String> {
        self.try_get_visited(category).await.unwrap_or_else(|e| {
            tracing::error!("Error loading visited {}: {}", category.display_plural(), e);
            BTreeSet::new()
        })
    }

    /// Overwrite the visited set for a category. Errors are logged.
    pub async fn set_visited(&self, category: Category, visited: &BTreeSet<String>) {
        if let Err(e) = self.try_set_visited(category, visited).await {
            tracing::error!("Error saving visited {}: {}", category.display_plural(), e);
        }
    }

    pub async fn is_visited(&self, category: Category, id: &str) -> bool {
        self.get_visited(category).await.contains(id)
    }

    /// Flip membership of `id` and return the updated set. If the stored set
    /// cannot be read, nothing is written and an empty set is returned.
    pub async fn toggle(&self, category: Category, id: &str) -> BTreeSet<String> {
        let _guard = self.write_lock.lock().await;

        let mut visited = match self.try_get_visited(category).await {
            Ok(visited) => visited,
            Err(e) => {
                tracing::error!(
                    "Error loading visited {}, not toggling {}: {}",
                    category.display_plural(),
                    id,
                    e
                );
                return BTreeSet::new();
            }
        };
        if !visited.remove(id) {
            visited.insert(id.to_string());
        }
        tracing::debug!("Toggled visited {} {}", category, id);

        self.set_visited(category, &visited).await;
        visited
    }
}
