//! SQLite session store: `users` and `chat_sessions` tables keyed by chat id.
//!
//! Uses SqlitePoolManager; `register` runs both inserts in one transaction.

use async_trait::async_trait;
use bot_core::{ChatIdentity, ChatSession, ChatState, UserProfile};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::StorageError;
use crate::session_store::SessionStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    chat_id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    username: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for UserProfile {
    fn from(row: UserRow) -> Self {
        UserProfile {
            chat_id: ChatIdentity(row.chat_id),
            first_name: row.first_name,
            last_name: row.last_name,
            username: row.username,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    chat_id: i64,
    state: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<SessionRow> for ChatSession {
    type Error = StorageError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let state: ChatState = row
            .state
            .parse()
            .map_err(|e: String| StorageError::Corrupt(format!("chat {}: {}", row.chat_id, e)))?;
        Ok(ChatSession {
            chat_id: ChatIdentity(row.chat_id),
            state,
            created_at: row.created_at,
        })
    }
}

const INSERT_USER: &str = r#"
    INSERT INTO users (chat_id, first_name, last_name, username, created_at)
    VALUES (?, ?, ?, ?, ?)
"#;

const INSERT_USER_IF_ABSENT: &str = r#"
    INSERT OR IGNORE INTO users (chat_id, first_name, last_name, username, created_at)
    VALUES (?, ?, ?, ?, ?)
"#;

const INSERT_SESSION: &str = r#"
    INSERT INTO chat_sessions (chat_id, state, created_at)
    VALUES (?, ?, ?)
"#;

const INSERT_SESSION_IF_ABSENT: &str = r#"
    INSERT OR IGNORE INTO chat_sessions (chat_id, state, created_at)
    VALUES (?, ?, ?)
"#;

#[derive(Clone)]
pub struct SqliteSessionStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteSessionStore {
    /// Opens (or creates) the database and ensures the tables exist.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating session tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                chat_id INTEGER PRIMARY KEY,
                first_name TEXT,
                last_name TEXT,
                username TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS chat_sessions (
                chat_id INTEGER PRIMARY KEY,
                state TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        info!("Session tables ready");
        Ok(())
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn find_user(&self, chat_id: ChatIdentity) -> Result<Option<UserProfile>, StorageError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE chat_id = ?")
            .bind(chat_id.0)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        Ok(row.map(UserProfile::from))
    }

    async fn find_session(&self, chat_id: ChatIdentity) -> Result<Option<ChatSession>, StorageError> {
        let row = sqlx::query_as::<_, SessionRow>("SELECT * FROM chat_sessions WHERE chat_id = ?")
            .bind(chat_id.0)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        row.map(ChatSession::try_from).transpose()
    }

    async fn create_user(&self, profile: &UserProfile) -> Result<(), StorageError> {
        sqlx::query(INSERT_USER)
            .bind(profile.chat_id.0)
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.username)
            .bind(profile.created_at)
            .execute(self.pool_manager.pool())
            .await?;
        debug!(chat_id = profile.chat_id.0, "Saved user profile");
        Ok(())
    }

    async fn create_session(&self, session: &ChatSession) -> Result<(), StorageError> {
        sqlx::query(INSERT_SESSION)
            .bind(session.chat_id.0)
            .bind(session.state.as_str())
            .bind(session.created_at)
            .execute(self.pool_manager.pool())
            .await?;
        debug!(chat_id = session.chat_id.0, state = %session.state, "Saved chat session");
        Ok(())
    }

    async fn register(
        &self,
        profile: &UserProfile,
        session: &ChatSession,
    ) -> Result<bool, StorageError> {
        let mut tx = self.pool_manager.pool().begin().await?;

        sqlx::query(INSERT_USER_IF_ABSENT)
            .bind(profile.chat_id.0)
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.username)
            .bind(profile.created_at)
            .execute(&mut *tx)
            .await?;

        let inserted = sqlx::query(INSERT_SESSION_IF_ABSENT)
            .bind(session.chat_id.0)
            .bind(session.state.as_str())
            .bind(session.created_at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let created = inserted.rows_affected() == 1;
        info!(chat_id = session.chat_id.0, created = created, "Registered chat");
        Ok(created)
    }
}
