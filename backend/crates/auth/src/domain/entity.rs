//! User Entity
//!
//! Identity record. The username and email are each globally unique;
//! uniqueness is enforced by the database, not in process.

use kernel::id::UserId;
use platform::password::HashedPassword;

/// Persisted user
///
/// The password field holds the PHC hash string exactly as stored.
/// It is kept as an opaque string here so that an unparseable stored
/// hash surfaces as "password does not match" during signin rather
/// than as a load error.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier (immutable)
    pub id: UserId,
    /// Unique username
    pub username: String,
    /// Unique email
    pub email: String,
    /// Password hash in PHC string format (never the raw password)
    pub password_hash: String,
}

/// A user about to be inserted
///
/// Carries a validated [`HashedPassword`]; the raw password never
/// reaches the store layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: HashedPassword,
}
