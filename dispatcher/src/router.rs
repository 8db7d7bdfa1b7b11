//! Router: session resolution, chat state machine and action execution.
//!
//! `NEW` chats get the welcome text and nothing else, `ACTIVE` chats are routed through
//! [`route`], `DORMANT` chats are ignored. Store, completion and delivery failures are logged
//! (and, for completions, reported to the user); none of them escapes [`Router::handle`].

use std::sync::Arc;

use bot_core::{
    classify, Bot, ChatIdentity, ChatSession, ChatState, MenuEntry, RawUpdate, Reply, Sender,
    Update, UserProfile,
};
use llm_client::{CompletionClient, CompletionRequest};
use storage::{SessionStore, StorageError};
use tracing::{debug, error, info, instrument, warn};

use crate::action::{route, Action};

/// Dispatches updates using the injected outbound bot, session store and completion client.
#[derive(Clone)]
pub struct Router {
    bot: Arc<dyn Bot>,
    store: Arc<dyn SessionStore>,
    completion: Arc<dyn CompletionClient>,
    model: String,
}

impl Router {
    /// `model` is sent with every completion request.
    pub fn new(
        bot: Arc<dyn Bot>,
        store: Arc<dyn SessionStore>,
        completion: Arc<dyn CompletionClient>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            bot,
            store,
            completion,
            model: model.into(),
        }
    }

    /// Processes a batch in order, one update at a time.
    #[instrument(skip(self, updates), fields(batch_len = updates.len()))]
    pub async fn process_batch(&self, updates: &[RawUpdate]) {
        for raw in updates {
            self.handle_raw(raw).await;
        }
    }

    /// Classifies and handles one raw update.
    pub async fn handle_raw(&self, raw: &RawUpdate) {
        let update = classify(raw);
        self.handle(&update).await;
    }

    /// Handles one classified update.
    #[instrument(skip(self, update), fields(kind = update.kind()))]
    pub async fn handle(&self, update: &Update) {
        let Some(sender) = update.sender() else {
            warn!("Malformed update dropped");
            return;
        };
        let chat_id = sender.id;

        let state = match self.resolve_state(sender).await {
            Ok(state) => state,
            Err(e) => {
                error!(chat_id = chat_id.0, error = %e, "step: session lookup failed, update dropped");
                return;
            }
        };

        info!(chat_id = chat_id.0, state = %state, "step: routing update");

        match state {
            ChatState::New => self.send_text(chat_id, Reply::Welcome.text()).await,
            ChatState::Active => self.dispatch(chat_id, update).await,
            ChatState::Dormant => {
                debug!(chat_id = chat_id.0, "Dormant chat, update ignored");
            }
        }
    }

    /// Returns the state to route with, creating profile and session on first contact.
    /// A brand-new chat reports `NEW` although its session is stored as `ACTIVE`.
    async fn resolve_state(&self, sender: &Sender) -> Result<ChatState, StorageError> {
        let chat_id = sender.id;
        let session = self.store.find_session(chat_id).await?;
        let user = self.store.find_user(chat_id).await?;

        match (user, session) {
            (Some(_), Some(session)) => Ok(session.state),
            (None, None) => {
                let profile = UserProfile::from_sender(sender);
                let session = ChatSession::new(chat_id, ChatState::Active);
                if self.store.register(&profile, &session).await? {
                    info!(chat_id = chat_id.0, "step: new chat registered");
                    return Ok(ChatState::New);
                }
                // Another update from the same chat registered it first.
                let state = self
                    .store
                    .find_session(chat_id)
                    .await?
                    .map(|s| s.state)
                    .unwrap_or(ChatState::Active);
                Ok(state)
            }
            (user, session) => {
                warn!(
                    chat_id = chat_id.0,
                    has_user = user.is_some(),
                    has_session = session.is_some(),
                    "Incomplete chat records, recreating the missing one"
                );
                let profile = user.unwrap_or_else(|| UserProfile::from_sender(sender));
                let state = session.as_ref().map(|s| s.state).unwrap_or(ChatState::Active);
                let session = session.unwrap_or_else(|| ChatSession::new(chat_id, state));
                self.store.register(&profile, &session).await?;
                Ok(state)
            }
        }
    }

    async fn dispatch(&self, chat_id: ChatIdentity, update: &Update) {
        let action = route(update);
        debug!(chat_id = chat_id.0, action = ?action, "step: action selected");

        match action {
            Action::Complete(prompt) => self.relay_completion(chat_id, &prompt).await,
            Action::Restart => {
                self.send_text(chat_id, Reply::StartingOver.text()).await;
                self.send_text(chat_id, Reply::Welcome.text()).await;
            }
            Action::Reply(reply) => self.send_text(chat_id, reply.text()).await,
            Action::Menu => {
                let buttons = MenuEntry::CONTEXT_MENU
                    .iter()
                    .map(MenuEntry::button)
                    .collect::<Vec<_>>();
                if let Err(e) = self
                    .bot
                    .send_menu(chat_id, Reply::ContextMenu.text(), &buttons)
                    .await
                {
                    error!(chat_id = chat_id.0, error = %e, "Menu was not sent");
                }
            }
            Action::UnknownCommand => {
                self.send_text(chat_id, Reply::UnknownCommand.text()).await;
                self.send_text(chat_id, Reply::Help.text()).await;
            }
            Action::UnsupportedMedia => {
                self.send_text(chat_id, Reply::CannotProcessMedia.text()).await;
                self.send_text(chat_id, Reply::Help.text()).await;
            }
            Action::Ignore => {
                debug!(chat_id = chat_id.0, "Nothing to do for update");
            }
        }
    }

    /// One completion attempt. Failure and empty results become user-visible texts.
    async fn relay_completion(&self, chat_id: ChatIdentity, prompt: &str) {
        let request = CompletionRequest::new(self.model.as_str(), prompt);
        info!(chat_id = chat_id.0, model = %self.model, "step: completion request");

        match self.completion.complete(&request).await {
            Ok(response) => match response.first_reply().filter(|text| !text.is_empty()) {
                Some(text) => {
                    info!(chat_id = chat_id.0, reply_len = text.len(), "step: completion relayed");
                    self.send_text(chat_id, text).await;
                }
                None => {
                    warn!(
                        chat_id = chat_id.0,
                        choice_count = response.choices.len(),
                        "Completion returned no usable choice"
                    );
                    self.send_text(chat_id, Reply::NoResponse.text()).await;
                }
            },
            Err(e) => {
                error!(chat_id = chat_id.0, error = %e, "Completion call failed");
                self.send_text(chat_id, &Reply::completion_failed(&e.to_string()))
                    .await;
            }
        }
    }

    /// Sends text; a delivery failure is logged and otherwise ignored.
    async fn send_text(&self, chat_id: ChatIdentity, text: &str) {
        if let Err(e) = self.bot.send_message(chat_id, text).await {
            error!(chat_id = chat_id.0, error = %e, "Message was not sent");
        }
    }
}
