//! chatai-bot binary: relays Telegram chats to an OpenAI-compatible completion endpoint.

use anyhow::Result;
use clap::Parser;
use telegram_bot::{run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
    }
}
