//! Wraps teloxide::Bot and implements [`bot_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use bot_core::{Bot as CoreBot, BotError, ButtonKind, ChatIdentity, MenuButton, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Inline keyboard with one button per row, in the given order.
pub fn build_keyboard(buttons: &[MenuButton]) -> Result<InlineKeyboardMarkup> {
    let rows = buttons
        .iter()
        .map(|b| {
            let button = match &b.kind {
                ButtonKind::Callback(data) => InlineKeyboardButton::callback(&b.label, data),
                ButtonKind::Link(url) => {
                    let url = reqwest::Url::parse(url)
                        .map_err(|e| BotError::InvalidButton(format!("{}: {}", b.label, e)))?;
                    InlineKeyboardButton::url(&b.label, url)
                }
            };
            Ok(vec![button])
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(InlineKeyboardMarkup::new(rows))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: ChatIdentity, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.0), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_menu(&self, chat: ChatIdentity, header: &str, buttons: &[MenuButton]) -> Result<()> {
        let keyboard = build_keyboard(buttons)?;
        self.bot
            .send_message(ChatId(chat.0), header.to_string())
            .reply_markup(keyboard)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
