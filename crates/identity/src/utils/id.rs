//! Prefixed unique identifiers.

use cuid2::CuidConstructor;
use once_cell::sync::Lazy;

/// Prefix carried by user ids.
pub const USER_ID_PREFIX: &str = "usr";

/// Number of generated characters after the prefix.
pub const USER_ID_LENGTH: usize = 16;

static CUID: Lazy<CuidConstructor> =
    Lazy::new(|| CuidConstructor::new().with_length(USER_ID_LENGTH as _));

/// Generate a collision-resistant identifier: `prefix` plus
/// [`USER_ID_LENGTH`] generated characters.
pub fn generate_id(prefix: &str) -> String {
    format!("{}{}", prefix, CUID.create_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_the_prefix_and_length() {
        let id = generate_id(USER_ID_PREFIX);
        assert!(id.starts_with("usr"));
        assert_eq!(id.len(), USER_ID_PREFIX.len() + USER_ID_LENGTH);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(generate_id(USER_ID_PREFIX), generate_id(USER_ID_PREFIX));
    }
}
