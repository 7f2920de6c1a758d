use super::*;

/// Tests refreshing a renamed channel.
///
/// Verifies that name, cap and position change while the count is kept.
///
/// Expected: Ok with new details and same user count
#[test]
fn refreshes_details_and_keeps_count() {
    let mut manager = RoomManager::new(vec![room("A", 3, 5, 0)]);

    manager
        .update_room_details(
            "A",
            RoomDetails {
                name: "Ranked".to_string(),
                user_limit: 3,
                position: 7,
            },
        )
        .unwrap();

    let updated = manager.get("A").unwrap();
    assert_eq!(updated.name, "Ranked");
    assert_eq!(updated.user_limit, 3);
    assert_eq!(updated.position, 7);
    assert_eq!(updated.user_count, 3);
    // Lowering the cap to the current count makes the room full
    assert!(manager.list_available_rooms(5).is_empty());
}

/// Tests that details for an untracked channel do not create a room.
///
/// Expected: Ok with tracked set unchanged
#[test]
fn untracked_room_is_ignored() {
    let mut manager = RoomManager::new(vec![room("A", 3, 5, 0)]);

    let result = manager.update_room_details(
        "B",
        RoomDetails {
            name: "New".to_string(),
            user_limit: 0,
            position: 1,
        },
    );

    assert!(result.is_ok());
    assert_eq!(manager.len(), 1);
}

/// Tests that an empty id is reported.
///
/// Expected: Err(RoomError::EmptyId)
#[test]
fn rejects_empty_id() {
    let mut manager = RoomManager::new(vec![room("A", 3, 5, 0)]);

    let result = manager.update_room_details(
        "",
        RoomDetails {
            name: "New".to_string(),
            user_limit: 0,
            position: 1,
        },
    );

    assert_eq!(result, Err(RoomError::EmptyId));
}
