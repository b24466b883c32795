//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{NewUser, User};
use crate::error::AuthResult;

/// User repository trait
///
/// `create` must report a uniqueness violation as
/// [`AuthError::UsernameTaken`](crate::error::AuthError::UsernameTaken) or
/// [`AuthError::EmailTaken`](crate::error::AuthError::EmailTaken) depending
/// on which constraint fired; callers never see driver-level errors.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user and return the store-assigned identifier
    async fn create(&self, user: &NewUser) -> AuthResult<UserId>;

    /// Find a user by exact username
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;
}
