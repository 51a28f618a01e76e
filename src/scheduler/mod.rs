//! Recurring jobs: the map status poll and the daily will-list rollover.

pub mod status_poll;
pub mod will_list;

use tokio_cron_scheduler::JobScheduler;

use crate::{error::AppError, state::AppState};

/// Starts the scheduler with every recurring job.
///
/// Jobs reach Discord through [`AppState::gateway`], so the scheduler outlives reconnects.
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler.add(status_poll::job(state.clone())?).await?;
    scheduler.add(will_list::job(state)?).await?;
    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(())
}
