use crate::{
    error::tracker::RoomError,
    model::room::RoomDetails,
    service::room::RoomManager,
    test_support::{room, StaticVoiceChannelEnumerator},
};

mod list_tracked_rooms;
mod new;
mod update_room_details;

fn ids(rooms: &[crate::model::room::Room]) -> Vec<&str> {
    rooms.iter().map(|room| room.id.as_str()).collect()
}
