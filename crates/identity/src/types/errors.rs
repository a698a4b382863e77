//! Error types for the identity core.

use thiserror::Error;

use crate::entities::User;

/// The fixed vocabulary of domain validation failures.
///
/// These are terminal: operations return them immediately and never retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("username is required")]
    NoUsername,

    #[error("email is required")]
    NoEmail,

    #[error("password is required")]
    NoPassword,

    #[error("password must be at least 6 characters")]
    PasswordTooShort,

    #[error("username already exists")]
    UsernameExists,

    #[error("email already exists")]
    EmailExists,

    #[error("credentials incorrect")]
    CredentialsIncorrect,

    #[error("password incorrect")]
    PasswordIncorrect,
}

/// Opaque failure raised by a store implementation.
///
/// The core passes these through unchanged: no retries, no reinterpretation.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StoreError(#[from] anyhow::Error);

impl StoreError {
    /// Wrap any error raised by a backing store.
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }

    /// Build a store error from a plain message.
    pub fn msg(msg: impl std::fmt::Display) -> Self {
        Self(anyhow::anyhow!("{}", msg))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Top-level error for identity operations.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An operation ran before `install_user_store` was called.
    #[error("user store is not configured")]
    UserStoreNotConfigured,

    /// The session store was requested before `install_session_store`.
    #[error("session store is not configured")]
    SessionStoreNotConfigured,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Result alias for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Failure from `IdentityService::create_user`.
///
/// `partial` echoes the user fields that were accepted before the failing
/// step, so callers can hand them straight back to a signup form.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct CreateUserError {
    pub partial: User,
    #[source]
    pub reason: IdentityError,
}

impl CreateUserError {
    pub(crate) fn new(partial: User, reason: impl Into<IdentityError>) -> Self {
        Self {
            partial,
            reason: reason.into(),
        }
    }
}

/// Failure from `IdentityService::update_user`.
///
/// `requested` is the snapshot of the update as asked for, regardless of how
/// far the operation got before failing.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct UpdateUserError {
    pub requested: User,
    #[source]
    pub reason: IdentityError,
}

impl UpdateUserError {
    pub(crate) fn new(requested: User, reason: impl Into<IdentityError>) -> Self {
        Self {
            requested,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_messages() {
        assert_eq!(
            ValidationError::NoUsername.to_string(),
            "username is required"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "password must be at least 6 characters"
        );
        assert_eq!(
            ValidationError::CredentialsIncorrect.to_string(),
            "credentials incorrect"
        );
        assert_eq!(ValidationError::EmailExists.to_string(), "email already exists");
    }

    #[test]
    fn store_errors_pass_through_unchanged() {
        let err = IdentityError::from(StoreError::msg("connection refused"));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn unconfigured_stores_are_distinct_errors() {
        assert_eq!(
            IdentityError::UserStoreNotConfigured.to_string(),
            "user store is not configured"
        );
        assert_eq!(
            IdentityError::SessionStoreNotConfigured.to_string(),
            "session store is not configured"
        );
    }
}
