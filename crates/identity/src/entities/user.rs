//! User entity and its derived views.

use serde::{Deserialize, Serialize};

/// A user account.
///
/// Constructed through `IdentityService::create_user`; `id` stays empty
/// until creation succeeds and is never reassigned afterwards. Persisting
/// the account is the caller's responsibility; creation does not save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier, `usr`-prefixed.
    pub id: String,
    /// Unique across all users (case-sensitive).
    pub username: String,
    /// Unique across all users (case-sensitive).
    pub email: String,
    /// bcrypt output; never the plaintext password.
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
}

impl User {
    /// Avatar image reference.
    ///
    /// The external avatar host addresses images by an md5 fingerprint of
    /// the email, so the same email always maps to the same URL.
    pub fn avatar_url(&self) -> String {
        format!(
            "www.gravatar.com/avatar/{:x}",
            md5::compute(self.email.as_bytes())
        )
    }

    /// Route under which the user's images are served.
    pub fn images_route(&self) -> String {
        format!("/user/{}", self.id)
    }
}
