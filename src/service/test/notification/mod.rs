use crate::{
    error::tracker::NotificationError,
    model::notification::NotificationChannel,
    service::notification::NotificationManager,
    test_support::StaticResolver,
};

mod add;
mod remove_by_channel_id;
