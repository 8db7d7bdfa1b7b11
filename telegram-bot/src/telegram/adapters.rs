//! teloxide → core conversions. Only messages and callback queries carry anything the router uses;
//! every other update kind becomes an empty [`RawUpdate`] and is classified as malformed.

use bot_core::{RawCallback, RawMessage, RawUpdate, Sender};
use teloxide::types::{Message, Update, UpdateKind};

/// Telegram user to core sender.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl TelegramUserWrapper<'_> {
    pub fn to_sender(&self) -> Sender {
        Sender {
            id: bot_core::ChatIdentity(self.0.id.0 as i64),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
            username: self.0.username.clone(),
        }
    }
}

/// Telegram update to core raw update.
pub struct TelegramUpdateWrapper<'a>(pub &'a Update);

impl TelegramUpdateWrapper<'_> {
    pub fn to_raw(&self) -> RawUpdate {
        match &self.0.kind {
            UpdateKind::Message(msg) => RawUpdate {
                message: Some(message_to_raw(msg)),
                callback: None,
            },
            UpdateKind::CallbackQuery(q) => RawUpdate {
                message: None,
                callback: Some(RawCallback {
                    from: TelegramUserWrapper(&q.from).to_sender(),
                    data: q.data.clone(),
                }),
            },
            _ => RawUpdate::default(),
        }
    }
}

fn message_to_raw(msg: &Message) -> RawMessage {
    RawMessage {
        from: msg.from.as_ref().map(|u| TelegramUserWrapper(u).to_sender()),
        text: msg.text().map(str::to_string),
        has_media: has_media(msg),
    }
}

/// Any attachment the bot cannot read.
fn has_media(msg: &Message) -> bool {
    msg.photo().is_some()
        || msg.video().is_some()
        || msg.document().is_some()
        || msg.audio().is_some()
        || msg.voice().is_some()
        || msg.sticker().is_some()
        || msg.animation().is_some()
        || msg.video_note().is_some()
}
