use super::*;

/// Tests subscribing a new channel.
///
/// Expected: Ok with the channel listed
#[test]
fn adds_new_channel() {
    let mut manager = NotificationManager::new();

    manager.add(NotificationChannel::new("X", "alerts")).unwrap();

    assert_eq!(manager.list(), vec![NotificationChannel::new("X", "alerts")]);
}

/// Tests that re-adding a channel refreshes its name without duplicating it.
///
/// Expected: exactly one entry for X carrying the latest name
#[test]
fn re_adding_updates_name_without_duplicate() {
    let mut manager = NotificationManager::new();

    manager.add(NotificationChannel::new("X", "alerts")).unwrap();
    manager.add(NotificationChannel::new("X", "renamed")).unwrap();

    assert_eq!(manager.list(), vec![NotificationChannel::new("X", "renamed")]);
}

/// Tests that re-adding keeps the channel's original slot.
///
/// Expected: order X, Y preserved after re-adding X
#[test]
fn re_adding_keeps_insertion_order() {
    let mut manager = NotificationManager::new();

    manager.add(NotificationChannel::new("X", "first")).unwrap();
    manager.add(NotificationChannel::new("Y", "second")).unwrap();
    manager.add(NotificationChannel::new("X", "first again")).unwrap();

    let ids: Vec<String> = manager.list().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["X", "Y"]);
}

/// Tests that an empty id is reported as a contract violation.
///
/// Expected: Err(NotificationError::EmptyId) and nothing subscribed
#[test]
fn rejects_empty_id() {
    let mut manager = NotificationManager::new();

    let result = manager.add(NotificationChannel::new("", "nameless"));

    assert_eq!(result, Err(NotificationError::EmptyId));
    assert!(manager.is_empty());
}

/// Tests seeding through `with_channels`.
///
/// Verifies that duplicates collapse and invalid entries are dropped.
///
/// Expected: two subscribers, X carrying its latest name
#[test]
fn with_channels_applies_add_semantics() {
    let manager = NotificationManager::with_channels(vec![
        NotificationChannel::new("X", "alerts"),
        NotificationChannel::new("", "broken"),
        NotificationChannel::new("Y", "lfg"),
        NotificationChannel::new("X", "renamed"),
    ]);

    assert_eq!(
        manager.list(),
        vec![
            NotificationChannel::new("X", "renamed"),
            NotificationChannel::new("Y", "lfg"),
        ]
    );
}
