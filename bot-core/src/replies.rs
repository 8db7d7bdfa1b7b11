//! Fixed texts sent by the bot.

/// Every text the router can send, besides relayed completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reply {
    Welcome,
    StartingOver,
    Help,
    ContextMenu,
    Safety,
    Support,
    UnknownCommand,
    CannotProcessMedia,
    /// Prefix of the completion failure message; followed by the error description.
    SomethingWentWrong,
    /// Suffix of the completion failure message.
    CallSupport,
    NoResponse,
}

impl Reply {
    pub fn text(&self) -> &'static str {
        match self {
            Reply::Welcome => {
                "Welcome to the AI chat bot! Send me any message and I will ask the language model \
                 for an answer. Type /help to see what else I can do."
            }
            Reply::StartingOver => "Well, let's start over one more time.",
            Reply::Help => {
                "Just write a message and I will answer it with the help of an AI model.\n\n\
                 Commands:\n\
                 /start - start over\n\
                 /menu - show the menu\n\
                 /help - show this help\n\
                 /safety - safety information\n\
                 /support - how to get support"
            }
            Reply::ContextMenu => "What would you like to do?",
            Reply::Safety => {
                "Please do not share passwords, payment details or other personal data in this chat. \
                 Answers are generated by an AI model and may be inaccurate."
            }
            Reply::Support => {
                "If something does not work, write to the bot administrator and describe the problem."
            }
            Reply::UnknownCommand => "There is no such command.",
            Reply::CannotProcessMedia => "Sorry, I cannot process photos or other media.",
            Reply::SomethingWentWrong => "Oh, something went wrong: ",
            Reply::CallSupport => ". If this keeps happening, please contact support.",
            Reply::NoResponse => "The AI model returned no response. Please try again.",
        }
    }

    /// Failure message for a completion error: apology, error description, support hint.
    pub fn completion_failed(error: &str) -> String {
        format!(
            "{}{}{}",
            Reply::SomethingWentWrong.text(),
            error,
            Reply::CallSupport.text()
        )
    }
}
