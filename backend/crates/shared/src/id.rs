//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. Record identifiers are
//! database-assigned serial integers; the wrapper prevents mixing a
//! user ID with an article ID at compile time.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
///
/// let id = UserId::from(7);
/// assert_eq!(id.value(), 7);
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: i32,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a database-assigned identifier
    pub fn from(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer
    pub fn value(&self) -> i32 {
        self.value
    }
}

// Manual impls: derive would require `T: Clone` etc. even though
// the marker is never stored.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Marker types for [`Id`]
pub mod markers {
    /// Marker for user IDs
    #[derive(Debug, Clone, Copy)]
    pub struct User;

    /// Marker for article IDs
    #[derive(Debug, Clone, Copy)]
    pub struct Article;
}

/// Typed user identifier
pub type UserId = Id<markers::User>;

/// Typed article identifier
pub type ArticleId = Id<markers::Article>;
