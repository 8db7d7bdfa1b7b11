//! Update classifier: maps one [`RawUpdate`] to exactly one [`Update`] kind. Pure; no side effects.

use crate::types::{RawUpdate, Update};

/// Leading character that marks a command.
pub const COMMAND_PREFIX: char = '/';

/// Classifies a raw update. Rules, first match wins:
///
/// 1. text starting with [`COMMAND_PREFIX`] → `Command` (token = text after the prefix)
/// 2. other text → `FreeText`
/// 3. media without text → `Media`
/// 4. button press → `CallbackAction`
/// 5. anything else → `Malformed`
///
/// A message without a user sender cannot be attributed to a chat and is `Malformed`.
pub fn classify(raw: &RawUpdate) -> Update {
    if let Some(message) = &raw.message {
        let Some(sender) = message.from.clone() else {
            return Update::Malformed;
        };
        if let Some(text) = &message.text {
            return match text.strip_prefix(COMMAND_PREFIX) {
                Some(token) => Update::Command {
                    sender,
                    token: token.to_string(),
                },
                None => Update::FreeText {
                    sender,
                    text: text.clone(),
                },
            };
        }
        if message.has_media {
            return Update::Media { sender };
        }
    }

    if let Some(callback) = &raw.callback {
        return Update::CallbackAction {
            sender: callback.from.clone(),
            token: callback.data.clone().unwrap_or_default(),
        };
    }

    Update::Malformed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawCallback, RawMessage, Sender};

    fn sender() -> Sender {
        Sender::with_id(7)
    }

    #[test]
    fn test_prefixed_text_is_command_with_case_preserved() {
        let update = classify(&RawUpdate::text(sender(), "/HeLp"));
        assert_eq!(
            update,
            Update::Command {
                sender: sender(),
                token: "HeLp".to_string()
            }
        );
    }

    #[test]
    fn test_bare_prefix_is_command_with_empty_token() {
        let update = classify(&RawUpdate::text(sender(), "/"));
        assert!(matches!(update, Update::Command { ref token, .. } if token.is_empty()));
    }

    #[test]
    fn test_plain_text_is_free_text() {
        for text in ["hello", " /start", "", "what is 1/2?"] {
            let update = classify(&RawUpdate::text(sender(), text));
            assert_eq!(
                update,
                Update::FreeText {
                    sender: sender(),
                    text: text.to_string()
                }
            );
        }
    }

    #[test]
    fn test_media_without_text_is_media() {
        assert_eq!(
            classify(&RawUpdate::media(sender())),
            Update::Media { sender: sender() }
        );
    }

    #[test]
    fn test_text_wins_over_media_flag() {
        let raw = RawUpdate {
            message: Some(RawMessage {
                from: Some(sender()),
                text: Some("caption-like".to_string()),
                has_media: true,
            }),
            callback: None,
        };
        assert!(matches!(classify(&raw), Update::FreeText { .. }));
    }

    #[test]
    fn test_callback_carries_sender_and_token() {
        assert_eq!(
            classify(&RawUpdate::callback(sender(), "safety")),
            Update::CallbackAction {
                sender: sender(),
                token: "safety".to_string()
            }
        );
    }

    #[test]
    fn test_callback_without_data_has_empty_token() {
        let raw = RawUpdate {
            message: None,
            callback: Some(RawCallback {
                from: sender(),
                data: None,
            }),
        };
        assert!(matches!(classify(&raw), Update::CallbackAction { ref token, .. } if token.is_empty()));
    }

    #[test]
    fn test_empty_update_is_malformed() {
        assert_eq!(classify(&RawUpdate::default()), Update::Malformed);
    }

    #[test]
    fn test_message_without_text_or_media_is_malformed() {
        let raw = RawUpdate {
            message: Some(RawMessage {
                from: Some(sender()),
                text: None,
                has_media: false,
            }),
            callback: None,
        };
        assert_eq!(classify(&raw), Update::Malformed);
    }

    #[test]
    fn test_message_without_sender_is_malformed() {
        let raw = RawUpdate {
            message: Some(RawMessage {
                from: None,
                text: Some("/start".to_string()),
                has_media: false,
            }),
            callback: None,
        };
        assert_eq!(classify(&raw), Update::Malformed);
    }
}
