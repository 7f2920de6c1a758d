//! Broadcast message body.

use crate::{capability::BroadcastFormatter, model::room::Room};

/// Renders available rooms as a short markdown list of channel mentions.
pub struct PlainBroadcastFormatter;

impl BroadcastFormatter for PlainBroadcastFormatter {
    fn format_available_rooms(&self, rooms: &[Room]) -> String {
        let mut content = String::from("**Available Game Channels**\n");

        for room in rooms {
            let occupancy = if room.user_limit == 0 {
                format!("{} playing", room.user_count)
            } else {
                format!("{}/{}", room.user_count, room.user_limit)
            };
            content.push_str(&format!("- <#{}> ({})\n", room.id, occupancy));
        }

        content
    }
}
