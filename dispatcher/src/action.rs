//! Routing table for chats in the `ACTIVE` state: one classified update in, one [`Action`] out.

use bot_core::{Command, MenuEntry, Reply, Update};

/// What the router does for an update from an active chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ask the completion endpoint and relay its first reply.
    Complete(String),
    /// "Starting over" notice followed by the welcome text.
    Restart,
    /// A single fixed reply.
    Reply(Reply),
    /// Context menu with the support, safety and help buttons.
    Menu,
    /// "No such command" followed by help.
    UnknownCommand,
    /// "Cannot process media" followed by help.
    UnsupportedMedia,
    /// Nothing to send.
    Ignore,
}

fn menu_reply(entry: MenuEntry) -> Reply {
    match entry {
        MenuEntry::Support => Reply::Support,
        MenuEntry::Safety => Reply::Safety,
        MenuEntry::Help => Reply::Help,
    }
}

/// Picks the action for an update. Update kinds are disjoint, so the first matching arm is the only one.
pub fn route(update: &Update) -> Action {
    match update {
        Update::FreeText { text, .. } => Action::Complete(text.clone()),
        Update::Command { token, .. } => match Command::parse(token) {
            Some(Command::Start) => Action::Restart,
            Some(Command::Help) => Action::Reply(Reply::Help),
            Some(Command::Menu) => Action::Menu,
            Some(Command::Safety) => Action::Reply(Reply::Safety),
            Some(Command::Support) => Action::Reply(Reply::Support),
            None => Action::UnknownCommand,
        },
        Update::CallbackAction { token, .. } => match MenuEntry::from_callback(token) {
            Some(entry) => Action::Reply(menu_reply(entry)),
            None => Action::Ignore,
        },
        Update::Media { .. } => Action::UnsupportedMedia,
        Update::Malformed => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bot_core::Sender;

    fn command(token: &str) -> Update {
        Update::Command {
            sender: Sender::with_id(1),
            token: token.to_string(),
        }
    }

    fn callback(token: &str) -> Update {
        Update::CallbackAction {
            sender: Sender::with_id(1),
            token: token.to_string(),
        }
    }

    #[test]
    fn test_free_text_goes_to_completion() {
        let update = Update::FreeText {
            sender: Sender::with_id(1),
            text: "tell me a joke".to_string(),
        };
        assert_eq!(route(&update), Action::Complete("tell me a joke".to_string()));
    }

    #[test]
    fn test_commands_route_case_insensitively() {
        assert_eq!(route(&command("start")), Action::Restart);
        assert_eq!(route(&command("HELP")), Action::Reply(Reply::Help));
        assert_eq!(route(&command("Menu")), Action::Menu);
        assert_eq!(route(&command("safety")), Action::Reply(Reply::Safety));
        assert_eq!(route(&command("SUPPORT")), Action::Reply(Reply::Support));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(route(&command("weather")), Action::UnknownCommand);
        assert_eq!(route(&command("")), Action::UnknownCommand);
    }

    #[test]
    fn test_callbacks_match_their_commands() {
        for token in ["help", "safety", "support"] {
            assert_eq!(route(&callback(token)), route(&command(token)));
        }
    }

    #[test]
    fn test_unknown_callback_is_ignored() {
        assert_eq!(route(&callback("menu")), Action::Ignore);
        assert_eq!(route(&callback("")), Action::Ignore);
    }

    #[test]
    fn test_media_and_malformed() {
        let media = Update::Media {
            sender: Sender::with_id(1),
        };
        assert_eq!(route(&media), Action::UnsupportedMedia);
        assert_eq!(route(&Update::Malformed), Action::Ignore);
    }
}
