use crate::{Result as CoreErrorResult, UserProfile};

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Handle to one profile. The per-profile lock is the unit of atomicity:
/// concurrent appends to the same queue serialize on it, concurrent flag
/// writes are last-write-wins.
pub type SharedProfile = Arc<RwLock<UserProfile>>;

/// Maps identity -> profile, auto-creating on first access.
///
/// The store is best-effort and never rejects input; only `commit` can fail,
/// and only in durable implementations.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Return the profile for `identity`, creating a default one on first
    /// lookup. Profiles are never deleted.
    async fn get_or_create(&self, identity: &str) -> SharedProfile;

    /// Snapshot of all known profiles, order irrelevant. Used only for
    /// broadcast fan-out.
    async fn snapshot(&self) -> Vec<SharedProfile>;

    /// Flush pending changes. No-op for the in-memory store; extension point
    /// for a persistent backing store.
    async fn commit(&self) -> CoreErrorResult<()>;
}
