use crate::{ProfileStore, Result as CoreErrorResult, SharedProfile, UserProfile};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-lifetime in-memory profile store.
///
/// Constructed once at startup and injected into the service; there is no
/// teardown for the in-memory variant. The outer lock guards the map, the
/// per-profile lock guards each profile's state.
#[derive(Clone, Default)]
pub struct MemoryProfileStore {
    profiles: Arc<RwLock<HashMap<String, SharedProfile>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of profiles ever seen (profiles are never deleted)
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_or_create(&self, identity: &str) -> SharedProfile {
        // Fast path: profile already exists
        {
            let profiles = self.profiles.read().await;
            if let Some(profile) = profiles.get(identity) {
                return Arc::clone(profile);
            }
        }

        // Slow path: re-check under the write lock, another task may have
        // created the profile between the two lock acquisitions
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .entry(identity.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(UserProfile::new())));
        Arc::clone(profile)
    }

    async fn snapshot(&self) -> Vec<SharedProfile> {
        self.profiles.read().await.values().map(Arc::clone).collect()
    }

    async fn commit(&self) -> CoreErrorResult<()> {
        // Only needed in persisting stores
        Ok(())
    }
}
