// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - Key-value storage adapters
//
// Everything the app persists goes through the KeyValueStore trait as a
// JSON string under a fixed key. No cloud sync, just local storage.

use crate::types::{AppConfig, AppError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

/// Fixed storage keys
pub mod keys {
    pub const VISITED_BEACHES: &str = "visited_beaches";
    pub const VISITED_MOUNTAINS: &str = "visited_mountains";
    pub const USER_PROFILE: &str = "user_profile";
    pub const FAVORITES: &str = "favorites";
    pub const DESTINATION_NOTES: &str = "destination_notes";
}

/// Durable, asynchronous, string-keyed storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, or None if nothing is stored
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Overwrite the value under `key`
    async fn set(&self, key: &str, value: String) -> Result<(), AppError>;

    /// Remove every key in `keys`. All keys are attempted; the first error
    /// is returned. Missing keys are not an error.
    async fn multi_remove(&self, keys: &[&str]) -> Result<(), AppError>;
}

/// Read and decode a JSON value
pub(crate) async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, AppError> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON value
pub(crate) async fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, raw).await
}

/// In-process store, lost when dropped
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key inside a directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::FileIo(format!("Failed to create data dir: {}", e)))?;

        tracing::info!("Data directory: {:?}", dir);
        Ok(Self { dir })
    }

    /// Open the store configured in `config`, falling back to the platform
    /// config directory
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let dir = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => crate::config::default_config_dir()?,
        };
        Self::new(dir).await
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(AppError::InvalidKey(format!("Unusable storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::FileIo(format!("Failed to read {}: {}", key, e))),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        // Write then rename so a crash mid-write never leaves a torn file
        fs::write(&tmp, value)
            .await
            .map_err(|e| AppError::FileIo(format!("Failed to write {}: {}", key, e)))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| AppError::FileIo(format!("Failed to replace {}: {}", key, e)))?;

        Ok(())
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), AppError> {
        let mut first_error = None;

        for key in keys {
            let result = match self.path_for(key) {
                Ok(path) => match fs::remove_file(&path).await {
                    Ok(()) => Ok(()),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                    Err(e) => Err(AppError::FileIo(format!("Failed to remove {}: {}", key, e))),
                },
                Err(e) => Err(e),
            };

            if let Err(e) = result {
                tracing::warn!("Failed to remove key {}: {}", key, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Store whose every operation fails, for exercising fail-soft paths
#[cfg(test)]
pub(crate) struct FailingStore;

#[cfg(test)]
#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Err(AppError::FileIo(format!("get {} failed", key)))
    }

    async fn set(&self, key: &str, _value: String) -> Result<(), AppError> {
        Err(AppError::FileIo(format!("set {} failed", key)))
    }

    async fn multi_remove(&self, _keys: &[&str]) -> Result<(), AppError> {
        Err(AppError::FileIo("multi_remove failed".to_string()))
    }
}

/// In-memory store whose next `get` fails once armed; writes always succeed
#[cfg(test)]
#[derive(Default)]
pub(crate) struct FlakyReadStore {
    inner: MemoryStore,
    fail_next_get: std::sync::atomic::AtomicBool,
}

#[cfg(test)]
impl FlakyReadStore {
    pub(crate) fn fail_next_get(&self) {
        self.fail_next_get
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
#[async_trait]
impl KeyValueStore for FlakyReadStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        if self
            .fail_next_get
            .swap(false, std::sync::atomic::Ordering::SeqCst)
        {
            return Err(AppError::FileIo(format!("get {} failed", key)));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        self.inner.set(key, value).await
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), AppError> {
        self.inner.multi_remove(keys).await
    }
}
