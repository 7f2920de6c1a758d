//! Broadcast subscriber registry.
//!
//! `NotificationManager` keeps the text channels that receive the periodic room
//! availability broadcast, in the order they subscribed.

use dioxus_logger::tracing;

use crate::{
    capability::TextChannelResolver,
    error::tracker::NotificationError,
    model::notification::NotificationChannel,
};

#[derive(Debug, Default)]
pub struct NotificationManager {
    channels: Vec<NotificationChannel>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with subscribers.
    ///
    /// Entries go through `add`, so duplicates collapse into one subscriber and
    /// channels with an empty id are dropped with a warning.
    pub fn with_channels(channels: impl IntoIterator<Item = NotificationChannel>) -> Self {
        let mut manager = Self::new();
        for channel in channels {
            if let Err(e) = manager.add(channel) {
                tracing::warn!("Skipping notification channel: {}", e);
            }
        }
        manager
    }

    /// Creates a registry from configured channel ids, resolving each to its name.
    ///
    /// Ids that do not resolve to a text channel, or whose lookup fails, are skipped
    /// and logged; the remaining channels are still subscribed.
    ///
    /// # Arguments
    /// - `resolver` - Capability looking up text channels by id
    /// - `channel_ids` - Configured text channel ids
    ///
    /// # Returns
    /// - `NotificationManager` - Registry with every resolvable channel subscribed
    pub async fn from_channel_ids<R>(resolver: &R, channel_ids: &[u64]) -> Self
    where
        R: TextChannelResolver + ?Sized,
    {
        let mut channels = Vec::with_capacity(channel_ids.len());

        for channel_id in channel_ids {
            let channel_id = channel_id.to_string();
            match resolver.resolve(&channel_id).await {
                Ok(Some(channel)) => channels.push(channel),
                Ok(None) => {
                    tracing::warn!(
                        "Configured notification channel {} is not a text channel in this guild",
                        channel_id
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to resolve configured notification channel {}: {}",
                        channel_id,
                        e
                    );
                }
            }
        }

        let manager = Self::with_channels(channels);
        tracing::info!("Broadcasting to {} notification channels", manager.len());
        manager
    }

    /// Subscribes a channel, or refreshes its stored name if already subscribed.
    ///
    /// Re-adding keeps the channel's original position in the list.
    ///
    /// # Arguments
    /// - `channel` - Channel to subscribe
    ///
    /// # Returns
    /// - `Ok(())` - Channel subscribed or name refreshed
    /// - `Err(NotificationError::EmptyId)` - Caller passed an empty id
    pub fn add(&mut self, channel: NotificationChannel) -> Result<(), NotificationError> {
        if channel.id.is_empty() {
            return Err(NotificationError::EmptyId);
        }

        match self.channels.iter_mut().find(|existing| existing.id == channel.id) {
            Some(existing) => {
                existing.name = channel.name;
            }
            None => {
                tracing::info!(
                    "Added notification channel {} ({})",
                    channel.id,
                    channel.name
                );
                self.channels.push(channel);
            }
        }

        Ok(())
    }

    /// Unsubscribes a channel.
    ///
    /// # Returns
    /// - `true` - The channel was subscribed and has been removed
    /// - `false` - The channel was not subscribed, nothing changed
    pub fn remove_by_channel_id(&mut self, id: &str) -> bool {
        let before = self.channels.len();
        self.channels.retain(|channel| channel.id != id);
        let removed = self.channels.len() != before;

        if removed {
            tracing::info!("Removed notification channel {}", id);
        }

        removed
    }

    /// Returns a snapshot of the subscribers in subscription order.
    pub fn list(&self) -> Vec<NotificationChannel> {
        self.channels.clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.channels.iter().any(|channel| channel.id == id)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
