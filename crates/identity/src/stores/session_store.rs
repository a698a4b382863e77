//! Persistence contract for sessions.

use async_trait::async_trait;

use crate::entities::Session;
use crate::types::StoreResult;

/// Abstraction over session persistence, keyed by an external string.
///
/// Deliberately independent of the user store: nothing in the user
/// operations touches sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up a session by key.
    async fn find(&self, key: &str) -> StoreResult<Option<Session>>;

    /// Insert or replace a session record.
    async fn save(&self, session: &Session) -> StoreResult<()>;

    /// Remove a session record.
    async fn delete(&self, session: &Session) -> StoreResult<()>;
}
