//! Tunable configuration for the identity core.

use serde::{Deserialize, Serialize};

use crate::utils::password::DEFAULT_HASH_COST;

/// Configuration for [`IdentityService`](crate::IdentityService).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// bcrypt cost factor applied when hashing new passwords.
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            hash_cost: DEFAULT_HASH_COST,
        }
    }
}

fn default_hash_cost() -> u32 {
    DEFAULT_HASH_COST
}
