//! Session store abstraction
//!
//! The dispatcher only talks to [`SessionStore`], so the in-memory table can
//! be swapped for another backend without touching menu logic.

use crate::menu::MenuState;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A live session as seen by inspection endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub state: MenuState,
    pub updated_at: DateTime<Utc>,
}

/// Storage for per-session menu state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stored state, or `None` if the session is unknown
    async fn load(&self, session_id: &str) -> StoreResult<Option<MenuState>>;

    /// Insert or overwrite the state of a session
    async fn set(&self, session_id: &str, state: MenuState) -> StoreResult<()>;

    /// Remove a session. Removing an unknown session is not an error.
    async fn delete(&self, session_id: &str) -> StoreResult<()>;

    /// Snapshot of all live sessions, most recently updated first
    async fn list(&self) -> StoreResult<Vec<SessionRecord>>;

    /// Stored state, defaulting to the root menu for unknown sessions
    async fn get(&self, session_id: &str) -> StoreResult<MenuState> {
        Ok(self.load(session_id).await?.unwrap_or_default())
    }
}

// ============================================================================
// Arc implementation for trait objects
// ============================================================================

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn load(&self, session_id: &str) -> StoreResult<Option<MenuState>> {
        (**self).load(session_id).await
    }

    async fn set(&self, session_id: &str, state: MenuState) -> StoreResult<()> {
        (**self).set(session_id, state).await
    }

    async fn delete(&self, session_id: &str) -> StoreResult<()> {
        (**self).delete(session_id).await
    }

    async fn list(&self) -> StoreResult<Vec<SessionRecord>> {
        (**self).list().await
    }
}

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Entry {
    state: MenuState,
    updated_at: DateTime<Utc>,
}

/// Process-lifetime session table. Entries are never evicted; abandoned
/// sessions stay until the process exits.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Entry>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, session_id: &str) -> StoreResult<Option<MenuState>> {
        Ok(self
            .sessions
            .read()
            .await
            .get(session_id)
            .map(|entry| entry.state))
    }

    async fn set(&self, session_id: &str, state: MenuState) -> StoreResult<()> {
        let entry = Entry {
            state,
            updated_at: Utc::now(),
        };
        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> StoreResult<()> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<SessionRecord>> {
        let mut records: Vec<SessionRecord> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, entry)| SessionRecord {
                session_id: id.clone(),
                state: entry.state,
                updated_at: entry.updated_at,
            })
            .collect();
        records.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.session_id.cmp(&b.session_id))
        });
        Ok(records)
    }
}
