//! Scheduled jobs.
//!
//! The only job is the room availability broadcast, which fires on a fixed
//! period for the lifetime of the process.

pub mod broadcast;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;

use broadcast::{RoomBroadcaster, BROADCAST_PERIOD};

/// Starts the room broadcast scheduler
///
/// Registers a repeated job that runs one broadcast tick every `BROADCAST_PERIOD`.
/// The job runs whether or not the trackers are initialised; ticks before
/// activation are no-ops.
///
/// # Arguments
/// - `broadcaster`: Tick implementation sharing the application state
///
/// # Returns
/// - `Ok(JobScheduler)`: Running scheduler, keep it alive for the process lifetime
/// - `Err(AppError::SchedulerErr)`: The job could not be created or started
pub async fn start_scheduler(broadcaster: RoomBroadcaster) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let broadcaster = Arc::new(broadcaster);

    let job = Job::new_repeated_async(BROADCAST_PERIOD, move |_uuid, _lock| {
        let broadcaster = broadcaster.clone();

        Box::pin(async move {
            let outcome = broadcaster.tick().await;
            tracing::debug!("Room broadcast tick finished: {:?}", outcome);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Room broadcast scheduler started, period {}s",
        BROADCAST_PERIOD.as_secs()
    );

    Ok(scheduler)
}
