use chrono::Utc;
use tokio_cron_scheduler::Job;

use crate::{data::will_list::WillListRepository, error::AppError, state::AppState};

/// Midnight UTC.
pub const ROLLOVER_SCHEDULE: &str = "0 0 0 * * *";

pub fn job(state: AppState) -> Result<Job, AppError> {
    let job = Job::new_async(ROLLOVER_SCHEDULE, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            if let Err(e) = roll_over(&state).await {
                tracing::error!("Error rolling over will list: {}", e);
            }
        })
    })?;

    Ok(job)
}

/// Empties yesterday's will list.
async fn roll_over(state: &AppState) -> Result<(), AppError> {
    let mut bot = state.bot.write().await;
    if bot.will_list.roll_over(Utc::now().date_naive()) {
        WillListRepository::new(&state.store).save(bot.will_list.entries())?;
        tracing::info!("Cleared will list for the new day");
    }

    Ok(())
}
