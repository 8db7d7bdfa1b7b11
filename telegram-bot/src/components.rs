//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use dispatcher::Router;
use llm_client::{mask_token, CompletionClient, LlmConfig, OpenAICompletionClient};
use std::sync::Arc;
use storage::{InMemorySessionStore, SessionStore, SqliteSessionStore};
use teloxide::Bot;
use tracing::{error, info, instrument};

use crate::config::{BotConfig, SessionStoreType};
use crate::telegram::TelegramBotAdapter;

/// Everything run_bot needs: the teloxide client for polling and the router that handles updates.
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub router: Router,
}

/// teloxide Bot for the configured token, pointed at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Session store selected by SESSION_STORE_TYPE.
#[instrument(skip(config))]
pub async fn build_session_store(config: &BotConfig) -> Result<Arc<dyn SessionStore>> {
    let store: Arc<dyn SessionStore> = match config.session_store_type() {
        SessionStoreType::Sqlite => {
            info!(database_url = %config.database_url(), "Using SQLite session store");
            Arc::new(
                SqliteSessionStore::new(config.database_url())
                    .await
                    .map_err(|e| {
                        error!(
                            error = %e,
                            database_url = %config.database_url(),
                            "Failed to initialize session storage"
                        );
                        anyhow::anyhow!("Failed to initialize session storage: {}", e)
                    })?,
            )
        }
        SessionStoreType::Memory => {
            info!("Using in-memory session store");
            Arc::new(InMemorySessionStore::new())
        }
    };
    Ok(store)
}

/// Builds BotComponents with the given session store.
#[instrument(skip(config, store))]
pub fn build_bot_components(
    config: &BotConfig,
    store: Arc<dyn SessionStore>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config);

    info!(
        base_url = %config.llm().base_url(),
        model = %config.llm().model(),
        timeout_secs = config.llm().timeout_secs(),
        api_key = %mask_token(config.llm().api_key()),
        "Completion client"
    );
    let completion: Arc<dyn CompletionClient> =
        Arc::new(OpenAICompletionClient::from_config(config.llm())?);
    let bot_adapter: Arc<dyn bot_core::Bot> =
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let router = Router::new(bot_adapter, store, completion, config.llm().model());

    Ok(BotComponents {
        teloxide_bot,
        router,
    })
}

/// Initializes BotComponents from config (creates the session store then builds components).
#[instrument(skip(config))]
pub async fn initialize_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let store = build_session_store(config).await?;
    build_bot_components(config, store)
}
