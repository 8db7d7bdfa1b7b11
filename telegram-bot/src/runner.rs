//! Application entry: validate config, init logging, build components, run the dispatcher.

use anyhow::Result;
use bot_core::init_tracing;
use tracing::{info, instrument};

use crate::components::initialize_bot_components;
use crate::config::BotConfig;
use crate::telegram::run_dispatcher;

/// Main entry. Returns when the dispatcher stops (Ctrl-C) or on a startup error.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        session_store_type = %config.session_store_type(),
        database_url = %config.database_url(),
        "Initializing bot"
    );

    let components = initialize_bot_components(&config).await?;

    info!("Bot started successfully");

    run_dispatcher(components.teloxide_bot, components.router).await
}
