//! Update dispatcher: every teloxide update goes through [`Router::handle_raw`].
//!
//! teloxide's dispatcher queues updates per chat, so updates from one chat are handled in arrival
//! order while different chats proceed concurrently.

use anyhow::Result;
use dispatcher::Router;
use teloxide::prelude::*;
use teloxide::types::UpdateKind;
use tracing::{info, instrument, warn};

use super::adapters::TelegramUpdateWrapper;

/// Handles one update. Callback queries are acknowledged after routing so the client stops its spinner.
async fn handle_update(bot: Bot, update: Update, router: Router) -> ResponseResult<()> {
    let raw = TelegramUpdateWrapper(&update).to_raw();
    info!(
        update_id = update.id.0,
        has_message = raw.message.is_some(),
        has_callback = raw.callback.is_some(),
        "Received update"
    );

    router.handle_raw(&raw).await;

    if let UpdateKind::CallbackQuery(q) = &update.kind {
        if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
            warn!(error = %e, "Failed to answer callback query");
        }
    }

    Ok(())
}

/// Runs long polling until Ctrl-C.
#[instrument(skip(bot, router))]
pub async fn run_dispatcher(bot: Bot, router: Router) -> Result<()> {
    let handler = dptree::entry().endpoint(handle_update);

    info!("step: dispatcher starting");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("Dispatcher stopped");

    Ok(())
}
