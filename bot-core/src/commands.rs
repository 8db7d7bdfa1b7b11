//! Fixed command and menu tables with token lookups.

use crate::types::MenuButton;

/// Commands understood by the router. Tokens are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Help,
    Menu,
    Safety,
    Support,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Start,
        Command::Help,
        Command::Menu,
        Command::Safety,
        Command::Support,
    ];

    /// Token without the prefix, e.g. `help` for `/help`.
    pub fn token(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Menu => "menu",
            Command::Safety => "safety",
            Command::Support => "support",
        }
    }

    /// Looks up a command by token, ignoring ASCII case. No trimming and no `@botname` stripping.
    pub fn parse(token: &str) -> Option<Command> {
        Self::ALL
            .into_iter()
            .find(|c| c.token().eq_ignore_ascii_case(token))
    }
}

/// Entries of the context menu. Each one is a callback button whose token routes
/// to the same reply as the command of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Support,
    Safety,
    Help,
}

impl MenuEntry {
    /// Order in which the `/menu` command shows the entries.
    pub const CONTEXT_MENU: [MenuEntry; 3] = [MenuEntry::Support, MenuEntry::Safety, MenuEntry::Help];

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Support => "Support",
            MenuEntry::Safety => "Safety",
            MenuEntry::Help => "Help",
        }
    }

    pub fn callback_token(&self) -> &'static str {
        match self {
            MenuEntry::Support => "support",
            MenuEntry::Safety => "safety",
            MenuEntry::Help => "help",
        }
    }

    /// Exact-match lookup of a callback token.
    pub fn from_callback(token: &str) -> Option<MenuEntry> {
        Self::CONTEXT_MENU
            .into_iter()
            .find(|e| e.callback_token() == token)
    }

    pub fn button(&self) -> MenuButton {
        MenuButton::callback(self.label(), self.callback_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonKind;

    #[test]
    fn test_command_parse_ignores_case() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("HELP"), Some(Command::Help));
        assert_eq!(Command::parse("StArT"), Some(Command::Start));
    }

    #[test]
    fn test_command_parse_rejects_unknown_and_decorated_tokens() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("helpme"), None);
        assert_eq!(Command::parse(" help"), None);
        assert_eq!(Command::parse("help@chatai_bot"), None);
    }

    #[test]
    fn test_every_command_token_parses_back() {
        for command in Command::ALL {
            assert_eq!(Command::parse(command.token()), Some(command));
        }
    }

    #[test]
    fn test_menu_entry_from_callback_is_exact() {
        assert_eq!(MenuEntry::from_callback("support"), Some(MenuEntry::Support));
        assert_eq!(MenuEntry::from_callback("Support"), None);
        assert_eq!(MenuEntry::from_callback("menu"), None);
    }

    #[test]
    fn test_menu_entry_button_is_callback() {
        let button = MenuEntry::Safety.button();
        assert_eq!(button.label, "Safety");
        assert_eq!(button.kind, ButtonKind::Callback("safety".to_string()));
    }
}
