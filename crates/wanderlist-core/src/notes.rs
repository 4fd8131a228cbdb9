// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - Destination notes
//
// All notes live in one JSON object keyed by "{type}_{id}" and are read and
// written as a whole. Saving empty content deletes the note.

use crate::kv::{keys, read_json, write_json, KeyValueStore};
use crate::types::{AppError, DestinationKey, Note};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

type NotesMap = BTreeMap<String, Note>;

/// At most one free-text note per destination
pub struct NotesStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl NotesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load_map(&self) -> Result<NotesMap, AppError> {
        Ok(read_json(self.store.as_ref(), keys::DESTINATION_NOTES)
            .await?
            .unwrap_or_default())
    }

    pub async fn try_get_note(&self, key: &DestinationKey) -> Result<Option<Note>, AppError> {
        Ok(self.load_map().await?.remove(&key.to_string()))
    }

    pub async fn get_note(&self, key: &DestinationKey) -> Option<Note> {
        self.try_get_note(key).await.unwrap_or_else(|e| {
            tracing::error!("Error loading note {}: {}", key, e);
            None
        })
    }

    /// Upsert or delete the note for `key`. Returns the stored note, or None
    /// when the trimmed content was empty and the note was removed.
    pub async fn try_save_note(
        &self,
        key: &DestinationKey,
        content: &str,
    ) -> Result<Option<Note>, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut notes = self.load_map().await?;
        let map_key = key.to_string();
        let content = content.trim();

        let saved = if content.is_empty() {
            if notes.remove(&map_key).is_some() {
                tracing::debug!("Deleted note {}", map_key);
            }
            None
        } else {
            let now = now_millis();
            let created_at = notes.get(&map_key).map_or(now, |n| n.created_at);
            let note = Note {
                id: map_key.clone(),
                destination_id: key.id.clone(),
                category: key.category,
                content: content.to_string(),
                created_at,
                updated_at: now,
            };
            notes.insert(map_key, note.clone());
            Some(note)
        };

        write_json(self.store.as_ref(), keys::DESTINATION_NOTES, &notes).await?;
        Ok(saved)
    }

    /// Save `content` for `key`; empty content deletes. Errors are logged.
    pub async fn save_note(&self, key: &DestinationKey, content: &str) -> Option<Note> {
        self.try_save_note(key, content).await.unwrap_or_else(|e| {
            tracing::error!("Error saving note {}: {}", key, e);
            None
        })
    }

    /// Same path as saving empty content
    pub async fn delete_note(&self, key: &DestinationKey) {
        self.save_note(key, "").await;
    }

    /// Every note with a readable key, ordered by key
    pub async fn all_notes(&self) -> BTreeMap<DestinationKey, Note> {
        let notes = self.load_map().await.unwrap_or_else(|e| {
            tracing::error!("Error loading notes: {}", e);
            NotesMap::new()
        });

        notes
            .into_iter()
            .filter_map(|(raw, note)| match raw.parse::<DestinationKey>() {
                Ok(key) => Some((key, note)),
                Err(e) => {
                    tracing::warn!("Skipping note with unreadable key {:?}: {}", raw, e);
                    None
                }
            })
            .collect()
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{FailingStore, MemoryStore};
    use crate::types::Category;
    use std::time::Duration;

    #[tokio::test]
    async fn test_absent_until_saved() {
        let notes = NotesStore::new(Arc::new(MemoryStore::new()));
        assert!(notes.get_note(&DestinationKey::beach("b1")).await.is_none());
    }

    #[tokio::test]
    async fn test_save_trims_and_fills_fields() {
        let notes = NotesStore::new(Arc::new(MemoryStore::new()));
        let key = DestinationKey::mountain("m13");

        let saved = notes.save_note(&key, "  Camp at Balu ka Ghera \n").await.unwrap();
        assert_eq!(saved.content, "Camp at Balu ka Ghera");
        assert_eq!(saved.id, "mountain_m13");
        assert_eq!(saved.destination_id, "m13");
        assert_eq!(saved.category, Category::Mountain);
        assert_eq!(saved.created_at, saved.updated_at);

        assert_eq!(notes.get_note(&key).await, Some(saved));
    }

    #[tokio::test]
    async fn test_created_at_preserved_across_edits() {
        let notes = NotesStore::new(Arc::new(MemoryStore::new()));
        let key = DestinationKey::beach("b26");

        let first = notes.save_note(&key, "Cliff walk").await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = notes.save_note(&key, "Cliff walk at sunset").await.unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(second.content, "Cliff walk at sunset");
    }

    #[tokio::test]
    async fn test_empty_content_deletes() {
        let notes = NotesStore::new(Arc::new(MemoryStore::new()));
        let key = DestinationKey::beach("b1");
        let other = DestinationKey::beach("b2");

        notes.save_note(&key, "Temple at dusk").await;
        notes.save_note(&other, "Keep").await;
        assert!(notes.save_note(&key, "   ").await.is_none());

        assert!(notes.get_note(&key).await.is_none());
        assert!(notes.get_note(&other).await.is_some());
    }

    #[tokio::test]
    async fn test_delete_note() {
        let notes = NotesStore::new(Arc::new(MemoryStore::new()));
        let key = DestinationKey::mountain("m1");

        notes.save_note(&key, "Winter trek").await;
        notes.delete_note(&key).await;
        assert!(notes.get_note(&key).await.is_none());
        assert!(notes.all_notes().await.is_empty());
    }

    #[tokio::test]
    async fn test_wire_format() {
        let kv = Arc::new(MemoryStore::new());
        let notes = NotesStore::new(kv.clone());
        notes.save_note(&DestinationKey::beach("b10"), "Shacks").await;

        let raw = kv.get(keys::DESTINATION_NOTES).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let note = &value["beach_b10"];
        assert_eq!(note["id"], "beach_b10");
        assert_eq!(note["destinationId"], "b10");
        assert_eq!(note["type"], "beach");
        assert_eq!(note["content"], "Shacks");
        assert!(note["updatedAt"].is_i64());
    }

    #[tokio::test]
    async fn test_all_notes_skips_unreadable_keys() {
        let kv = Arc::new(MemoryStore::new());
        let notes = NotesStore::new(kv.clone());
        notes.save_note(&DestinationKey::mountain("m5"), "Frozen lake").await;

        let mut raw: serde_json::Value =
            serde_json::from_str(&kv.get(keys::DESTINATION_NOTES).await.unwrap().unwrap())
                .unwrap();
        raw["broken"] = raw["mountain_m5"].clone();
        kv.set(keys::DESTINATION_NOTES, raw.to_string()).await.unwrap();

        let all = notes.all_notes().await;
        assert_eq!(all.len(), 1);
        assert!(all.contains_key(&DestinationKey::mountain("m5")));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_all_land() {
        let notes = Arc::new(NotesStore::new(Arc::new(MemoryStore::new())));

        let handles: Vec<_> = (1..=20)
            .map(|n| {
                let notes = notes.clone();
                tokio::spawn(async move {
                    let key = DestinationKey::mountain(format!("m{}", n));
                    notes.save_note(&key, &format!("Day {} on the trail", n)).await;
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let all = notes.all_notes().await;
        assert_eq!(all.len(), 20);
        assert_eq!(
            all[&DestinationKey::mountain("m7")].content,
            "Day 7 on the trail"
        );
    }

    #[tokio::test]
    async fn test_storage_failure_is_soft() {
        let notes = NotesStore::new(Arc::new(FailingStore));
        let key = DestinationKey::beach("b1");

        assert!(notes.save_note(&key, "text").await.is_none());
        assert!(notes.get_note(&key).await.is_none());
        assert!(notes.try_save_note(&key, "text").await.is_err());
    }
}
