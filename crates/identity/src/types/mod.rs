//! Shared types and the error taxonomy.

pub mod errors;

pub use errors::{
    CreateUserError, IdentityError, IdentityResult, StoreError, StoreResult, UpdateUserError,
    ValidationError,
};
