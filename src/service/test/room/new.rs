use super::*;

/// Tests seeding a manager with distinct rooms.
///
/// Expected: every room tracked
#[test]
fn tracks_every_seeded_room() {
    let manager = RoomManager::new(vec![room("A", 1, 5, 0), room("B", 0, 0, 1)]);

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.get("A"), Some(room("A", 1, 5, 0)));
    assert_eq!(manager.get("B"), Some(room("B", 0, 0, 1)));
}

/// Tests that a duplicate id in the seed does not create a second room.
///
/// Verifies that the first occurrence wins.
///
/// Expected: one room with the first snapshot's values
#[test]
fn keeps_first_of_duplicate_ids() {
    let manager = RoomManager::new(vec![room("A", 1, 5, 0), room("A", 4, 5, 3)]);

    assert_eq!(manager.len(), 1);
    assert_eq!(manager.get("A"), Some(room("A", 1, 5, 0)));
}

/// Tests that rooms without an id are never tracked.
///
/// Expected: only the room with an id is tracked
#[test]
fn skips_rooms_with_empty_id() {
    let manager = RoomManager::new(vec![room("", 2, 5, 0), room("B", 2, 5, 1)]);

    assert_eq!(manager.len(), 1);
    assert!(manager.get("").is_none());
}

/// Tests an empty seed.
///
/// Expected: empty manager
#[test]
fn empty_seed_tracks_nothing() {
    let manager = RoomManager::new(Vec::new());

    assert!(manager.is_empty());
    assert!(manager.list_tracked_rooms().is_empty());
}
