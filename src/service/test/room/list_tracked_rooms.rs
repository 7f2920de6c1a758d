use super::*;

/// Tests that tracked rooms are listed by position.
///
/// Expected: rooms ordered by ascending position regardless of seed order
#[test]
fn orders_by_position() {
    let manager = RoomManager::new(vec![
        room("C", 0, 0, 2),
        room("A", 5, 5, 0),
        room("B", 1, 5, 1),
    ]);

    assert_eq!(ids(&manager.list_tracked_rooms()), vec!["A", "B", "C"]);
}

/// Tests that full and empty rooms are still listed.
///
/// Expected: all rooms including empty and full ones
#[test]
fn includes_unavailable_rooms() {
    let manager = RoomManager::new(vec![room("empty", 0, 5, 0), room("full", 5, 5, 1)]);

    assert_eq!(manager.list_tracked_rooms().len(), 2);
}

/// Tests that the listing is a snapshot, not a live view.
///
/// Verifies that mutating the returned rooms leaves the tracked state untouched.
///
/// Expected: tracked count unchanged after editing the snapshot
#[test]
fn returns_snapshot() {
    let manager = RoomManager::new(vec![room("A", 1, 5, 0)]);

    let mut snapshot = manager.list_tracked_rooms();
    snapshot[0].user_count = 4;

    assert_eq!(manager.get("A").unwrap().user_count, 1);
}
