//! Session store abstraction consumed by the router.

use async_trait::async_trait;
use bot_core::{ChatIdentity, ChatSession, UserProfile};

use crate::error::StorageError;

/// Key-value store of user profiles and chat sessions, both keyed by [`ChatIdentity`].
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_user(&self, chat_id: ChatIdentity) -> Result<Option<UserProfile>, StorageError>;

    async fn find_session(&self, chat_id: ChatIdentity) -> Result<Option<ChatSession>, StorageError>;

    /// Inserts a profile. Fails with [`StorageError::AlreadyExists`] if one exists for the chat.
    async fn create_user(&self, profile: &UserProfile) -> Result<(), StorageError>;

    /// Inserts a session. Fails with [`StorageError::AlreadyExists`] if one exists for the chat.
    async fn create_session(&self, session: &ChatSession) -> Result<(), StorageError>;

    /// Creates profile and session together, each only if absent, atomically per chat.
    /// Returns true when this call created the session, false when another writer got there first.
    async fn register(
        &self,
        profile: &UserProfile,
        session: &ChatSession,
    ) -> Result<bool, StorageError>;
}
