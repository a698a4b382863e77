//! In-memory store implementations.
//!
//! Reference implementations of the store contracts, used throughout the
//! test suites. They model what a real backend must provide, including the
//! storage-level unique constraints on username and email.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::entities::{Session, User};
use crate::stores::{SessionStore, UserStore};
use crate::types::{StoreError, StoreResult};

/// In-memory [`UserStore`] keyed by user id.
#[derive(Default, Clone)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find(&self, id: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn save(&self, user: &User) -> StoreResult<()> {
        let mut users = self.users.write().await;
        let conflict = users.values().any(|existing| {
            existing.id != user.id
                && (existing.username == user.username || existing.email == user.email)
        });
        if conflict {
            return Err(StoreError::msg("unique constraint violated"));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }
}

/// In-memory [`SessionStore`] keyed by session key.
#[derive(Default, Clone)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn find(&self, key: &str) -> StoreResult<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(key).cloned())
    }

    async fn save(&self, session: &Session) -> StoreResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.key.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, session: &Session) -> StoreResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&session.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, username: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            hashed_password: "$2b$04$notarealhash".to_string(),
        }
    }

    #[tokio::test]
    async fn save_and_find_back() {
        let store = MemoryUserStore::new();
        store.save(&user("usr1", "alice", "alice@x.com")).await.unwrap();

        assert!(store.find("usr1").await.unwrap().is_some());
        assert_eq!(
            store.find_by_username("alice").await.unwrap().unwrap().id,
            "usr1"
        );
        assert_eq!(
            store.find_by_email("alice@x.com").await.unwrap().unwrap().id,
            "usr1"
        );
        assert!(store.find("usr2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lookups_are_case_sensitive() {
        let store = MemoryUserStore::new();
        store.save(&user("usr1", "alice", "alice@x.com")).await.unwrap();

        assert!(store.find_by_username("Alice").await.unwrap().is_none());
        assert!(store.find_by_email("ALICE@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_enforces_unique_username_and_email() {
        let store = MemoryUserStore::new();
        store.save(&user("usr1", "alice", "alice@x.com")).await.unwrap();

        assert!(store.save(&user("usr2", "alice", "other@x.com")).await.is_err());
        assert!(store.save(&user("usr2", "other", "alice@x.com")).await.is_err());

        // Re-saving the same user is an update, not a conflict.
        store.save(&user("usr1", "alice", "alice@new.com")).await.unwrap();
    }

    #[tokio::test]
    async fn session_round_trip() {
        let store = MemorySessionStore::new();
        let session = Session::new("sess-key");

        store.save(&session).await.unwrap();
        assert_eq!(store.find("sess-key").await.unwrap(), Some(session.clone()));

        store.delete(&session).await.unwrap();
        assert!(store.find("sess-key").await.unwrap().is_none());
    }
}
