//! Domain models for the room tracker.
//!
//! These are plain snapshots. Managers hand out clones of them and never expose
//! their internal collections.

pub mod notification;
pub mod room;
