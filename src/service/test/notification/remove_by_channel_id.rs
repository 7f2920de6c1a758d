use super::*;

/// Tests unsubscribing a channel.
///
/// Expected: true and the channel no longer listed
#[test]
fn removes_subscribed_channel() {
    let mut manager = NotificationManager::with_channels(vec![
        NotificationChannel::new("X", "alerts"),
        NotificationChannel::new("Y", "lfg"),
    ]);

    assert!(manager.remove_by_channel_id("X"));

    assert!(!manager.contains("X"));
    assert_eq!(manager.list(), vec![NotificationChannel::new("Y", "lfg")]);
}

/// Tests removing a channel that was never subscribed.
///
/// Expected: false and the list unchanged
#[test]
fn absent_channel_is_a_no_op() {
    let mut manager = NotificationManager::with_channels(vec![NotificationChannel::new("X", "alerts")]);
    let before = manager.list();

    assert!(!manager.remove_by_channel_id("missing"));

    assert_eq!(manager.list(), before);
}

/// Tests that a removed channel can subscribe again.
///
/// Expected: channel listed once with its new name
#[test]
fn channel_can_resubscribe_after_removal() {
    let mut manager = NotificationManager::with_channels(vec![NotificationChannel::new("X", "alerts")]);

    manager.remove_by_channel_id("X");
    manager.add(NotificationChannel::new("X", "back")).unwrap();

    assert_eq!(manager.list(), vec![NotificationChannel::new("X", "back")]);
}
