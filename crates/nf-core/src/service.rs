//! Subscription and message fan-out logic.
//!
//! The only component with decision logic: everything else is storage and
//! HTTP wiring.

use crate::{ProfileStore, RetentionPolicy};

use std::sync::Arc;

use log::{debug, error, info};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Orchestrates subscribe/unsubscribe/query operations against the profile
/// store and fans new messages out to subscribed profiles.
///
/// Identity is resolved by the caller's authentication layer; `None` means
/// the caller could not be resolved, and every operation treats that as
/// "no profile": queries return defaults, mutations are no-ops.
#[derive(Clone)]
pub struct NotificationService {
    store: Arc<dyn ProfileStore>,
    retention: RetentionPolicy,
}

impl NotificationService {
    pub fn new(store: Arc<dyn ProfileStore>, retention: RetentionPolicy) -> Self {
        Self { store, retention }
    }

    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    /// Mark the identity as subscribed. Idempotent.
    pub async fn subscribe(&self, identity: Option<&str>) {
        let Some(identity) = identity else {
            debug!("subscribe: unresolvable identity, ignoring");
            return;
        };

        let profile = self.store.get_or_create(identity).await;
        profile.write().await.subscribed = true;

        if let Err(e) = self.store.commit().await {
            error!("Failed to commit subscription for {}: {}", identity, e);
        }
    }

    /// Mark the identity as unsubscribed. Idempotent.
    pub async fn unsubscribe(&self, identity: Option<&str>) {
        let Some(identity) = identity else {
            debug!("unsubscribe: unresolvable identity, ignoring");
            return;
        };

        let profile = self.store.get_or_create(identity).await;
        profile.write().await.subscribed = false;

        if let Err(e) = self.store.commit().await {
            error!("Failed to commit unsubscription for {}: {}", identity, e);
        }
    }

    /// Current subscription flag; false for unresolvable identities.
    pub async fn is_subscribed(&self, identity: Option<&str>) -> bool {
        let Some(identity) = identity else {
            return false;
        };

        let profile = self.store.get_or_create(identity).await;
        let guard = profile.read().await;
        guard.subscribed
    }

    /// The identity's queued messages in insertion order; empty for
    /// unresolvable identities.
    ///
    /// Under `RetentionPolicy::DrainOnRead` the queue is cleared atomically
    /// with the read; under `RetainOnRead` it is left intact.
    pub async fn collected_messages(&self, identity: Option<&str>) -> Vec<String> {
        let Some(identity) = identity else {
            return Vec::new();
        };

        let profile = self.store.get_or_create(identity).await;
        match self.retention {
            RetentionPolicy::RetainOnRead => profile.read().await.pending_messages.clone(),
            RetentionPolicy::DrainOnRead => {
                let mut profile = profile.write().await;
                std::mem::take(&mut profile.pending_messages)
            }
        }
    }

    /// Fan `message` out to every profile whose subscribed flag is true at
    /// the instant it is visited.
    ///
    /// Runs on a spawned task; the triggering caller does not await
    /// completion and fan-out failures are not surfaced to it. A profile
    /// that unsubscribes mid-broadcast may or may not receive the message.
    /// The handle resolves to the number of profiles delivered to.
    pub fn send_notification(&self, message: String) -> JoinHandle<usize> {
        let store = Arc::clone(&self.store);
        let broadcast_id = Uuid::new_v4();

        tokio::spawn(async move {
            let profiles = store.snapshot().await;
            let mut delivered = 0usize;

            for profile in profiles {
                let mut profile = profile.write().await;
                if profile.subscribed {
                    profile.push_message(message.clone());
                    delivered += 1;
                }
            }

            info!(
                "Broadcast {} delivered to {} subscriber(s)",
                broadcast_id, delivered
            );
            delivered
        })
    }
}
