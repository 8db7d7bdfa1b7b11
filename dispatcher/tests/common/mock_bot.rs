//! Recording implementation of [`bot_core::Bot`].
//!
//! Keeps every send in order so tests can assert on the exact outbound texts and menus.

use std::sync::Mutex;

use async_trait::async_trait;
use bot_core::{Bot, BotError, ChatIdentity, MenuButton, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        chat: ChatIdentity,
        text: String,
    },
    Menu {
        chat: ChatIdentity,
        header: String,
        buttons: Vec<MenuButton>,
    },
}

/// Bot that records sends; when `fail` is set every send is recorded and then reported as failed.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts only, in send order.
    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                Sent::Menu { .. } => None,
            })
            .collect()
    }

    fn record(&self, sent: Sent) -> Result<()> {
        self.sent.lock().unwrap().push(sent);
        if self.fail {
            Err(BotError::Bot("Forbidden: bot was blocked by the user".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: ChatIdentity, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat,
            text: text.to_string(),
        })
    }

    async fn send_menu(&self, chat: ChatIdentity, header: &str, buttons: &[MenuButton]) -> Result<()> {
        self.record(Sent::Menu {
            chat,
            header: header.to_string(),
            buttons: buttons.to_vec(),
        })
    }
}
