//! Session entity declaration.

use serde::{Deserialize, Serialize};

/// Opaque session record persisted through `SessionStore`.
///
/// The core defines only the persistence contract. What a session carries
/// beyond its lookup key, and when it expires, belong to the surrounding
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// External key the store files the session under.
    pub key: String,
}

impl Session {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
