//! In-memory session store. Nothing survives a restart; used for tests and `SESSION_STORE_TYPE=memory`.

use std::collections::HashMap;

use async_trait::async_trait;
use bot_core::{ChatIdentity, ChatSession, UserProfile};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::session_store::SessionStore;

#[derive(Default)]
struct Tables {
    users: HashMap<ChatIdentity, UserProfile>,
    sessions: HashMap<ChatIdentity, ChatSession>,
}

/// Both maps sit behind one lock so `register` is atomic.
#[derive(Default)]
pub struct InMemorySessionStore {
    tables: RwLock<Tables>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored user profiles.
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// Number of stored chat sessions.
    pub async fn session_count(&self) -> usize {
        self.tables.read().await.sessions.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn find_user(&self, chat_id: ChatIdentity) -> Result<Option<UserProfile>, StorageError> {
        Ok(self.tables.read().await.users.get(&chat_id).cloned())
    }

    async fn find_session(&self, chat_id: ChatIdentity) -> Result<Option<ChatSession>, StorageError> {
        Ok(self.tables.read().await.sessions.get(&chat_id).cloned())
    }

    async fn create_user(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        if tables.users.contains_key(&profile.chat_id) {
            return Err(StorageError::AlreadyExists(format!("user {}", profile.chat_id)));
        }
        tables.users.insert(profile.chat_id, profile.clone());
        Ok(())
    }

    async fn create_session(&self, session: &ChatSession) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        if tables.sessions.contains_key(&session.chat_id) {
            return Err(StorageError::AlreadyExists(format!("session {}", session.chat_id)));
        }
        tables.sessions.insert(session.chat_id, session.clone());
        Ok(())
    }

    async fn register(
        &self,
        profile: &UserProfile,
        session: &ChatSession,
    ) -> Result<bool, StorageError> {
        let mut tables = self.tables.write().await;
        tables
            .users
            .entry(profile.chat_id)
            .or_insert_with(|| profile.clone());
        if tables.sessions.contains_key(&session.chat_id) {
            return Ok(false);
        }
        tables.sessions.insert(session.chat_id, session.clone());
        Ok(true)
    }
}
