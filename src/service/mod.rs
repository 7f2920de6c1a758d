//! In-memory trackers backing the bot.
//!
//! - **RoomManager** (`room`) - Voice room occupancy and the "available room" policy
//! - **NotificationManager** (`notification`) - Text channels subscribed to broadcasts
//!
//! Both managers are plain owned values with synchronous methods; sharing them
//! between event handlers and the scheduler is the job of `state::AppState`.

pub mod notification;
pub mod room;
