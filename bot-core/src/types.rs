//! Core types: chat identity, user profile, chat session, inbound raw update and its classified form, menu buttons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric chat/user identifier assigned by the platform. Primary key for session lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChatIdentity(pub i64);

impl fmt::Display for ChatIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sender fields read from an inbound message or callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub id: ChatIdentity,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl Sender {
    /// Sender with only an id; names unknown.
    pub fn with_id(id: i64) -> Self {
        Self {
            id: ChatIdentity(id),
            first_name: None,
            last_name: None,
            username: None,
        }
    }
}

/// User record created on first contact. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub chat_id: ChatIdentity,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Builds a profile from the sender of the first update, stamped with the current time.
    pub fn from_sender(sender: &Sender) -> Self {
        Self {
            chat_id: sender.id,
            first_name: sender.first_name.clone(),
            last_name: sender.last_name.clone(),
            username: sender.username.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Persisted lifecycle phase of a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatState {
    /// First contact; lasts for the welcome turn only and is never persisted by the router.
    New,
    /// Normal handling.
    Active,
    /// Reserved lifecycle phase. No transition leads here yet; updates are ignored.
    Dormant,
}

impl ChatState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatState::New => "NEW",
            ChatState::Active => "ACTIVE",
            ChatState::Dormant => "DORMANT",
        }
    }
}

impl fmt::Display for ChatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(ChatState::New),
            "ACTIVE" => Ok(ChatState::Active),
            "DORMANT" => Ok(ChatState::Dormant),
            other => Err(format!("unknown chat state: {}", other)),
        }
    }
}

/// Per-chat session: identity and current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub chat_id: ChatIdentity,
    pub state: ChatState,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(chat_id: ChatIdentity, state: ChatState) -> Self {
        Self {
            chat_id,
            state,
            created_at: Utc::now(),
        }
    }
}

/// Message part of a raw update: only the fields the classifier reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessage {
    /// None for messages without a user sender (e.g. channel posts).
    pub from: Option<Sender>,
    pub text: Option<String>,
    /// Photo, video, document or any other attachment.
    pub has_media: bool,
}

/// Button-press part of a raw update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCallback {
    pub from: Sender,
    pub data: Option<String>,
}

/// One inbound event as delivered by the transport, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawUpdate {
    pub message: Option<RawMessage>,
    pub callback: Option<RawCallback>,
}

impl RawUpdate {
    /// Update carrying a text message from `sender`.
    pub fn text(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            message: Some(RawMessage {
                from: Some(sender),
                text: Some(text.into()),
                has_media: false,
            }),
            callback: None,
        }
    }

    /// Update carrying a media-only message from `sender`.
    pub fn media(sender: Sender) -> Self {
        Self {
            message: Some(RawMessage {
                from: Some(sender),
                text: None,
                has_media: true,
            }),
            callback: None,
        }
    }

    /// Update carrying a button press from `sender`.
    pub fn callback(sender: Sender, data: impl Into<String>) -> Self {
        Self {
            message: None,
            callback: Some(RawCallback {
                from: sender,
                data: Some(data.into()),
            }),
        }
    }
}

/// Classified update. Kinds are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// Text starting with the command prefix; `token` is the text after the prefix, case preserved.
    Command { sender: Sender, token: String },
    FreeText { sender: Sender, text: String },
    Media { sender: Sender },
    CallbackAction { sender: Sender, token: String },
    /// Neither a usable message nor a callback.
    Malformed,
}

impl Update {
    /// Sender of the update; None only for [`Update::Malformed`].
    pub fn sender(&self) -> Option<&Sender> {
        match self {
            Update::Command { sender, .. }
            | Update::FreeText { sender, .. }
            | Update::Media { sender }
            | Update::CallbackAction { sender, .. } => Some(sender),
            Update::Malformed => None,
        }
    }

    /// Short kind name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Update::Command { .. } => "command",
            Update::FreeText { .. } => "free_text",
            Update::Media { .. } => "media",
            Update::CallbackAction { .. } => "callback",
            Update::Malformed => "malformed",
        }
    }
}

/// Payload of a menu button. Exactly one of callback token or URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonKind {
    Callback(String),
    Link(String),
}

/// Inline menu button: label shown to the user and its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButton {
    pub label: String,
    pub kind: ButtonKind,
}

impl MenuButton {
    pub fn callback(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ButtonKind::Callback(token.into()),
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ButtonKind::Link(url.into()),
        }
    }
}
