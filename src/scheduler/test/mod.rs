use std::sync::Arc;

use crate::{
    model::notification::NotificationChannel,
    scheduler::broadcast::{RoomBroadcaster, TickOutcome},
    service::{notification::NotificationManager, room::RoomManager},
    state::{AppState, Managers},
    test_support::{room, IdListFormatter, RecordingSender},
};


/// Builds an active state and a broadcaster sending through `sender`.
async fn active_broadcaster(
    rooms: RoomManager,
    notifications: NotificationManager,
    sender: Arc<RecordingSender>,
) -> (AppState, RoomBroadcaster) {
    let state = AppState::new();
    state
        .activate(Managers {
            rooms,
            notifications,
        })
        .await;
    let broadcaster = RoomBroadcaster::new(state.clone(), sender, Arc::new(IdListFormatter));
    (state, broadcaster)
}

fn subscribers(ids: &[&str]) -> NotificationManager {
    NotificationManager::with_channels(ids.iter().map(|id| NotificationChannel::new(*id, *id)))
}
