//! # Gatehouse Identity
//!
//! Identity core for Gatehouse: account creation, authentication, and
//! credential updates, together with the persistence contracts those
//! operations speak through.
//!
//! ## Architecture
//!
//! - **Entities**: domain models ([`User`], [`Session`])
//! - **Services**: the operation layer ([`IdentityService`])
//! - **Stores**: persistence contracts ([`UserStore`], [`SessionStore`])
//!   plus an in-memory reference implementation
//! - **Types**: the error taxonomy
//! - **Utils**: password hashing and id generation
//!
//! HTTP handlers, database drivers, and session lifecycle live outside this
//! crate; they reach the core through [`IdentityService`] and implement the
//! store traits against their own backend.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use gatehouse_identity::{IdentityService, MemoryUserStore, UserStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryUserStore::new());
//! let mut identity = IdentityService::new();
//! identity.install_user_store(store.clone());
//!
//! // Creation validates, hashes, and assigns an id; saving is explicit.
//! let user = identity.create_user("alice", "alice@example.com", "password1").await?;
//! store.save(&user).await?;
//!
//! let authenticated = identity.find_user("alice", "password1").await?;
//! assert_eq!(authenticated.id, user.id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entities;
pub mod services;
pub mod stores;
pub mod types;
pub mod utils;

pub use config::IdentityConfig;
pub use entities::{Session, User};
pub use services::{IdentityService, MIN_PASSWORD_LENGTH};
pub use stores::{MemorySessionStore, MemoryUserStore, SessionStore, UserStore};
pub use types::{
    CreateUserError, IdentityError, IdentityResult, StoreError, StoreResult, UpdateUserError,
    ValidationError,
};
pub use utils::password::{hash_password, verify_password, DEFAULT_HASH_COST};
