//! User operations and store installation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::IdentityConfig;
use crate::entities::User;
use crate::stores::{SessionStore, UserStore};
use crate::types::{CreateUserError, IdentityError, UpdateUserError, ValidationError};
use crate::utils::id::{generate_id, USER_ID_PREFIX};
use crate::utils::password::{hash_password, verify_password};

/// Minimum accepted password length, in bytes.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The identity core: account creation, authentication, and credential
/// updates, plus the slot the surrounding application installs its session
/// store into.
///
/// Stores are injected rather than global. A freshly constructed service has
/// none installed, and operations on it fail with a "not configured" error
/// instead of crashing. The service does no locking of its own; preventing a
/// race between a uniqueness pre-check and a concurrent insert is the
/// store's job, via a unique constraint at the storage layer.
pub struct IdentityService {
    user_store: Option<Arc<dyn UserStore>>,
    session_store: Option<Arc<dyn SessionStore>>,
    config: IdentityConfig,
}

impl IdentityService {
    /// Create a service with default configuration and no stores installed.
    pub fn new() -> Self {
        Self::with_config(IdentityConfig::default())
    }

    /// Create a service with the given configuration and no stores installed.
    pub fn with_config(config: IdentityConfig) -> Self {
        Self {
            user_store: None,
            session_store: None,
            config,
        }
    }

    /// Install the user store backing all user operations.
    ///
    /// Installing again replaces the previous store.
    pub fn install_user_store(&mut self, store: Arc<dyn UserStore>) {
        if self.user_store.replace(store).is_some() {
            warn!("user store replaced");
        }
    }

    /// Install the session store handed out by [`Self::session_store`].
    ///
    /// Installing again replaces the previous store.
    pub fn install_session_store(&mut self, store: Arc<dyn SessionStore>) {
        if self.session_store.replace(store).is_some() {
            warn!("session store replaced");
        }
    }

    /// The installed session store.
    ///
    /// User operations never touch it; it lives here only so the
    /// application has one place to install and retrieve its stores.
    pub fn session_store(&self) -> Result<Arc<dyn SessionStore>, IdentityError> {
        self.session_store
            .clone()
            .ok_or(IdentityError::SessionStoreNotConfigured)
    }

    fn user_store(&self) -> Result<&dyn UserStore, IdentityError> {
        self.user_store
            .as_deref()
            .ok_or(IdentityError::UserStoreNotConfigured)
    }

    /// Create a new user: validate the fields, check uniqueness against the
    /// store, hash the password, and assign an id.
    ///
    /// The returned user is **not** persisted; the caller saves it through
    /// its store once it is ready. Field validation runs before the store is
    /// touched, so an unconfigured or failing store cannot mask a validation
    /// error.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, CreateUserError> {
        let mut user = User {
            id: String::new(),
            username: username.to_owned(),
            email: email.to_owned(),
            hashed_password: String::new(),
        };

        if username.is_empty() {
            return Err(CreateUserError::new(user, ValidationError::NoUsername));
        }
        if email.is_empty() {
            return Err(CreateUserError::new(user, ValidationError::NoEmail));
        }
        if password.is_empty() {
            return Err(CreateUserError::new(user, ValidationError::NoPassword));
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(CreateUserError::new(user, ValidationError::PasswordTooShort));
        }

        let store = match self.user_store() {
            Ok(store) => store,
            Err(reason) => return Err(CreateUserError::new(user, reason)),
        };

        match store.find_by_username(username).await {
            Ok(None) => {}
            Ok(Some(_)) => {
                return Err(CreateUserError::new(user, ValidationError::UsernameExists));
            }
            Err(reason) => return Err(CreateUserError::new(user, reason)),
        }
        match store.find_by_email(email).await {
            Ok(None) => {}
            Ok(Some(_)) => {
                return Err(CreateUserError::new(user, ValidationError::EmailExists));
            }
            Err(reason) => return Err(CreateUserError::new(user, reason)),
        }

        let hashed = match hash_password(password, self.config.hash_cost) {
            Ok(hashed) => hashed,
            Err(reason) => return Err(CreateUserError::new(user, reason)),
        };
        user.hashed_password = hashed;
        user.id = generate_id(USER_ID_PREFIX);

        info!(user_id = %user.id, username = %user.username, "created user");
        Ok(user)
    }

    /// Authenticate a user by username and password.
    ///
    /// An unknown username and a wrong password both come back as
    /// [`ValidationError::CredentialsIncorrect`], so callers cannot probe
    /// which usernames exist. A store failure is returned as-is instead;
    /// that asymmetry is part of the contract. Read-only.
    pub async fn find_user(&self, username: &str, password: &str) -> Result<User, IdentityError> {
        let store = self.user_store()?;

        let Some(existing) = store.find_by_username(username).await? else {
            return Err(ValidationError::CredentialsIncorrect.into());
        };
        if !verify_password(&existing.hashed_password, password) {
            return Err(ValidationError::CredentialsIncorrect.into());
        }

        debug!(user_id = %existing.id, "authenticated user");
        Ok(existing)
    }

    /// Update a user's email and, optionally, password.
    ///
    /// Effects are committed onto the passed `user`. The return value, on
    /// the `Ok` side and inside [`UpdateUserError`] alike, is a detached
    /// snapshot of the update as requested, independent of how far it got.
    ///
    /// The email commit lands before any password work and is not rolled
    /// back when a later check fails, so an email change can survive a
    /// rejected password change. An empty `current_password` means no
    /// password change was requested and is a success, not an error.
    pub async fn update_user(
        &self,
        user: &mut User,
        new_email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<User, UpdateUserError> {
        let mut requested = user.clone();
        requested.email = new_email.to_owned();

        let store = match self.user_store() {
            Ok(store) => store,
            Err(reason) => return Err(UpdateUserError::new(requested, reason)),
        };

        match store.find_by_email(new_email).await {
            // The user keeping their own address is not a conflict.
            Ok(Some(existing)) if existing.id != user.id => {
                return Err(UpdateUserError::new(requested, ValidationError::EmailExists));
            }
            Ok(_) => {}
            Err(reason) => return Err(UpdateUserError::new(requested, reason)),
        }

        user.email = new_email.to_owned();

        if current_password.is_empty() {
            info!(user_id = %user.id, "updated user email");
            return Ok(requested);
        }

        if !verify_password(&user.hashed_password, current_password) {
            return Err(UpdateUserError::new(
                requested,
                ValidationError::PasswordIncorrect,
            ));
        }
        if new_password.is_empty() {
            return Err(UpdateUserError::new(requested, ValidationError::NoPassword));
        }
        if new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(UpdateUserError::new(
                requested,
                ValidationError::PasswordTooShort,
            ));
        }

        let hashed = match hash_password(new_password, self.config.hash_cost) {
            Ok(hashed) => hashed,
            Err(reason) => return Err(UpdateUserError::new(requested, reason)),
        };
        user.hashed_password = hashed;

        info!(user_id = %user.id, "updated user email and password");
        Ok(requested)
    }
}

impl Default for IdentityService {
    fn default() -> Self {
        Self::new()
    }
}
