// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - User profile storage

use crate::kv::{keys, read_json, write_json, KeyValueStore};
use crate::types::{AppError, UserProfile};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The singleton user profile
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn try_get_profile(&self) -> Result<UserProfile, AppError> {
        Ok(read_json(self.store.as_ref(), keys::USER_PROFILE)
            .await?
            .unwrap_or_default())
    }

    pub async fn try_save_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        write_json(self.store.as_ref(), keys::USER_PROFILE, profile).await
    }

    /// Current profile, or the default "Traveler" profile
    pub async fn get_profile(&self) -> UserProfile {
        self.try_get_profile().await.unwrap_or_else(|e| {
            tracing::error!("Error loading user profile: {}", e);
            UserProfile::default()
        })
    }

    pub async fn save_profile(&self, profile: &UserProfile) {
        if let Err(e) = self.try_save_profile(profile).await {
            tracing::error!("Error saving user profile: {}", e);
        }
    }

    /// Read the stored profile ahead of an edit. On a read error the error is
    /// logged and None returned, so the caller never writes a default over it.
    async fn load_for_update(&self) -> Option<UserProfile> {
        match self.try_get_profile().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::error!("Error loading user profile, not updating: {}", e);
                None
            }
        }
    }

    /// Rename the user. Blank names are ignored. If the stored profile cannot
    /// be read, nothing is written and the default profile is returned.
    pub async fn set_name(&self, name: &str) -> UserProfile {
        let _guard = self.write_lock.lock().await;

        let Some(mut profile) = self.load_for_update().await else {
            return UserProfile::default();
        };
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("Ignoring blank profile name");
            return profile;
        }

        profile.name = name.to_string();
        self.save_profile(&profile).await;
        profile
    }

    /// Pick an avatar. The index is stored as given. Read errors leave the
    /// stored profile untouched, as in [`ProfileStore::set_name`].
    pub async fn set_avatar(&self, avatar_index: u32) -> UserProfile {
        let _guard = self.write_lock.lock().await;

        let Some(mut profile) = self.load_for_update().await else {
            return UserProfile::default();
        };
        profile.avatar_index = avatar_index;
        self.save_profile(&profile).await;
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{FailingStore, FlakyReadStore, MemoryStore};

    #[tokio::test]
    async fn test_default_on_fresh_store() {
        let profiles = ProfileStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(
            profiles.get_profile().await,
            UserProfile {
                name: "Traveler".to_string(),
                avatar_index: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let profiles = ProfileStore::new(Arc::new(MemoryStore::new()));
        let profile = UserProfile {
            name: "Asha".to_string(),
            avatar_index: 2,
        };

        profiles.save_profile(&profile).await;
        assert_eq!(profiles.get_profile().await, profile);
    }

    #[tokio::test]
    async fn test_set_name_trims_and_ignores_blank() {
        let profiles = ProfileStore::new(Arc::new(MemoryStore::new()));

        assert_eq!(profiles.set_name("  Ravi ").await.name, "Ravi");
        assert_eq!(profiles.set_name("   ").await.name, "Ravi");
        assert_eq!(profiles.get_profile().await.name, "Ravi");
    }

    #[tokio::test]
    async fn test_set_avatar_keeps_name() {
        let profiles = ProfileStore::new(Arc::new(MemoryStore::new()));
        profiles.set_name("Meera").await;

        let updated = profiles.set_avatar(1).await;
        assert_eq!(updated.avatar_index, 1);
        assert_eq!(updated.name, "Meera");
    }

    #[tokio::test]
    async fn test_corrupt_profile_reads_default() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(keys::USER_PROFILE, r#"{"name":42}"#.to_string())
            .await
            .unwrap();

        let profiles = ProfileStore::new(kv);
        assert_eq!(profiles.get_profile().await, UserProfile::default());
    }

    #[tokio::test]
    async fn test_storage_failure_is_soft() {
        let profiles = ProfileStore::new(Arc::new(FailingStore));
        assert_eq!(profiles.set_avatar(2).await, UserProfile::default());
        assert_eq!(profiles.set_name("Asha").await, UserProfile::default());
        assert_eq!(profiles.get_profile().await, UserProfile::default());
    }

    #[tokio::test]
    async fn test_edits_keep_profile_when_read_fails() {
        let kv = Arc::new(FlakyReadStore::default());
        let profiles = ProfileStore::new(kv.clone());
        let stored = UserProfile {
            name: "Asha".to_string(),
            avatar_index: 2,
        };
        profiles.save_profile(&stored).await;

        kv.fail_next_get();
        assert_eq!(profiles.set_avatar(1).await, UserProfile::default());
        assert_eq!(profiles.get_profile().await, stored);

        kv.fail_next_get();
        assert_eq!(profiles.set_name("Ravi").await, UserProfile::default());
        assert_eq!(profiles.get_profile().await, stored);

        let updated = profiles.set_avatar(1).await;
        assert_eq!(updated.name, "Asha");
        assert_eq!(updated.avatar_index, 1);
    }
}
