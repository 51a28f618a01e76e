use std::time::Instant;

use crate::{bot::command::CommandContext, error::AppError};

/// Measures the round trip of one Discord API call and reports it by editing the reply.
pub async fn ping(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let started = Instant::now();
    let mut message = cx.reply.send("Вычисляю...").await?;
    let latency = started.elapsed().as_millis();

    cx.reply
        .edit(&mut message, &format!("Понг. `{latency}мс`"))
        .await
}
