//! Application state shared between the Discord event handler and the scheduler.
//!
//! The trackers are created once the configured guild becomes available. Until
//! then the state is idle and every accessor returns `None`. Activation is
//! one-way for the lifetime of the process.

use dioxus_logger::tracing;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::service::{notification::NotificationManager, room::RoomManager};

/// The trackers owned by an active application state.
#[derive(Debug, Default)]
pub struct Managers {
    pub rooms: RoomManager,
    pub notifications: NotificationManager,
}

/// Shared handle to the trackers, cheap to clone.
///
/// Locks are only held for the duration of a synchronous manager call; callers get
/// the closure's return value (typically an owned snapshot) and never a guard.
#[derive(Clone, Default)]
pub struct AppState {
    managers: Arc<RwLock<Option<Managers>>>,
}

impl AppState {
    /// Creates an idle application state with no trackers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the state from idle to active with the provided trackers.
    ///
    /// A state that is already active keeps its trackers; the new ones are dropped.
    /// This happens when the gateway replays guild availability after a reconnect.
    ///
    /// # Arguments
    /// - `managers` - Freshly seeded trackers
    ///
    /// # Returns
    /// - `true` - State transitioned from idle to active
    /// - `false` - State was already active, nothing changed
    pub async fn activate(&self, managers: Managers) -> bool {
        let mut slot = self.managers.write().await;

        if slot.is_some() {
            tracing::warn!("Ignoring repeated tracker activation, keeping existing state");
            return false;
        }

        *slot = Some(managers);
        true
    }

    pub async fn is_active(&self) -> bool {
        self.managers.read().await.is_some()
    }

    /// Runs `f` against the room tracker, or returns `None` while idle.
    pub async fn with_rooms<R>(&self, f: impl FnOnce(&RoomManager) -> R) -> Option<R> {
        self.managers.read().await.as_ref().map(|m| f(&m.rooms))
    }

    /// Runs `f` against the room tracker mutably, or returns `None` while idle.
    pub async fn with_rooms_mut<R>(&self, f: impl FnOnce(&mut RoomManager) -> R) -> Option<R> {
        self.managers.write().await.as_mut().map(|m| f(&mut m.rooms))
    }

    /// Runs `f` against the subscriber registry, or returns `None` while idle.
    pub async fn with_notifications<R>(
        &self,
        f: impl FnOnce(&NotificationManager) -> R,
    ) -> Option<R> {
        self.managers
            .read()
            .await
            .as_ref()
            .map(|m| f(&m.notifications))
    }

    /// Runs `f` against the subscriber registry mutably, or returns `None` while idle.
    pub async fn with_notifications_mut<R>(
        &self,
        f: impl FnOnce(&mut NotificationManager) -> R,
    ) -> Option<R> {
        self.managers
            .write()
            .await
            .as_mut()
            .map(|m| f(&mut m.notifications))
    }
}
