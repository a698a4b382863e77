//! Persistence contract for user accounts.

use async_trait::async_trait;

use crate::entities::User;
use crate::types::StoreResult;

/// Abstraction over user persistence.
///
/// Implementations live outside this crate, in whatever backend the
/// application uses. Absent rows are `Ok(None)`, never an error; callers
/// rely on that distinction. Uniqueness of username and email is ultimately
/// this layer's job, since the service's pre-checks are advisory and do not
/// survive a concurrent insert.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by id.
    async fn find(&self, id: &str) -> StoreResult<Option<User>>;

    /// Look up a user by exact email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Look up a user by exact username.
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Insert or replace a user record.
    async fn save(&self, user: &User) -> StoreResult<()>;
}
