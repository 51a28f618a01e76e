use chrono::Utc;

use crate::{
    config::Config,
    data::DataStore,
    error::AppError,
    state::BotState,
};

/// Builds the HTTP client used for map requests.
///
/// Redirects are not followed; the map endpoint answers directly or not at all.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Creates the data directory if needed and loads every persisted file.
///
/// # Arguments
/// - `config` - Application configuration containing the data directory
///
/// # Returns
/// - `Ok((DataStore, BotState))` - Store handle and the loaded state
/// - `Err(AppError)` - The directory could not be created or a file is malformed
pub fn load_state(config: &Config) -> Result<(DataStore, BotState), AppError> {
    let store = DataStore::new(config.data_dir.clone());
    store.ensure_dir()?;

    let state = BotState::load(&store, config, Utc::now().date_naive())?;
    tracing::info!(
        "Loaded state from {}: record {}, {} avatars, {} character records",
        store.dir().display(),
        state.online_record.value(),
        state.avatars.names().len(),
        state.user_info.records.len()
    );

    Ok((store, state))
}
