//! Article Entities and Projections

use chrono::{DateTime, Utc};
use kernel::id::{ArticleId, UserId};

/// An article about to be inserted
///
/// The identifier and creation timestamp are assigned by the store.
/// The owning user must reference an existing user; the database's
/// foreign key enforces this.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// Read-only summary projection used for listings
///
/// Not a stored entity: it is derived by joining articles with the
/// owning user's username.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePreview {
    pub username: String,
    pub title: String,
    pub id: ArticleId,
    pub created_at: DateTime<Utc>,
}

/// Full single-article projection, joined with the owner's username
#[derive(Debug, Clone)]
pub struct ArticleDetail {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
