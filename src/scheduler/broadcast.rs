//! Periodic available-room broadcast.
//!
//! Each tick takes a snapshot of the best available rooms and the current
//! subscribers, then sends the same message to every subscriber. Sends run
//! concurrently and fail independently: one deleted channel never blocks the
//! others, and nothing that happens in a tick affects the next one.

use dioxus_logger::tracing;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    capability::{BroadcastFormatter, TextChannelSender},
    model::notification::NotificationChannel,
    state::AppState,
};

/// Time between two broadcast ticks.
pub const BROADCAST_PERIOD: Duration = Duration::from_secs(5 * 60);

/// Maximum number of rooms listed in one broadcast.
pub const BROADCAST_ROOM_LIMIT: usize = 5;

/// What a single broadcast tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Trackers not initialised yet, nothing queried.
    Idle,
    /// No room is currently worth recommending.
    NoAvailableRooms,
    /// Rooms are available but nobody is subscribed.
    NoSubscribers,
    /// Message sent to every subscriber.
    Broadcast {
        /// Subscribers that received the message
        delivered: usize,
        /// Subscribers whose send failed
        failed: usize,
    },
}

/// Broadcasts available rooms to subscribed text channels.
#[derive(Clone)]
pub struct RoomBroadcaster {
    state: AppState,
    sender: Arc<dyn TextChannelSender>,
    formatter: Arc<dyn BroadcastFormatter>,
}

impl RoomBroadcaster {
    /// Creates a new RoomBroadcaster.
    ///
    /// # Arguments
    /// - `state` - Shared trackers, may still be idle
    /// - `sender` - Capability delivering messages to text channels
    /// - `formatter` - Renders the broadcast body
    pub fn new(
        state: AppState,
        sender: Arc<dyn TextChannelSender>,
        formatter: Arc<dyn BroadcastFormatter>,
    ) -> Self {
        Self {
            state,
            sender,
            formatter,
        }
    }

    /// Runs one broadcast tick.
    ///
    /// Does nothing while the state is idle, when no room is available, or when no
    /// channel is subscribed. Otherwise formats one message and sends it to every
    /// subscriber. Delivery failures are logged and counted, never returned.
    ///
    /// # Returns
    /// - `TickOutcome` - Which branch the tick took and how many sends succeeded
    pub async fn tick(&self) -> TickOutcome {
        let Some(rooms) = self
            .state
            .with_rooms(|rooms| rooms.list_available_rooms(BROADCAST_ROOM_LIMIT))
            .await
        else {
            return TickOutcome::Idle;
        };

        if rooms.is_empty() {
            return TickOutcome::NoAvailableRooms;
        }

        let subscribers = self
            .state
            .with_notifications(|notifications| notifications.list())
            .await
            .unwrap_or_default();

        if subscribers.is_empty() {
            return TickOutcome::NoSubscribers;
        }

        let content = self.formatter.format_available_rooms(&rooms);

        let results = join_all(
            subscribers
                .iter()
                .map(|channel| self.deliver(channel, &content)),
        )
        .await;

        let delivered = results.iter().filter(|delivered| **delivered).count();
        let failed = results.len() - delivered;

        tracing::info!(
            "Broadcast {} available rooms to {} channels ({} failed)",
            rooms.len(),
            delivered,
            failed
        );

        TickOutcome::Broadcast { delivered, failed }
    }

    /// Sends the broadcast to one subscriber, logging any failure.
    async fn deliver(&self, channel: &NotificationChannel, content: &str) -> bool {
        match self.sender.send(&channel.id, content).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    "Failed to send room broadcast to channel {} ({}): {}",
                    channel.name,
                    channel.id,
                    e
                );
                false
            }
        }
    }
}
