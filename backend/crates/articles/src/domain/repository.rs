//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::ArticleId;

use crate::domain::entity::{ArticleDetail, ArticlePreview, NewArticle};
use crate::error::ArticleResult;

/// Article repository trait
#[trait_variant::make(ArticleRepository: Send)]
pub trait LocalArticleRepository {
    /// Insert a new article and return the store-assigned identifier.
    /// The creation timestamp is assigned by the store at insert time.
    async fn create(&self, article: &NewArticle) -> ArticleResult<ArticleId>;

    /// Fetch previews ordered by creation timestamp descending,
    /// joined with the owning user's username
    async fn latest_previews(&self, limit: i64, offset: i64)
    -> ArticleResult<Vec<ArticlePreview>>;

    /// Fetch a single article joined with the owning username
    async fn find_detail(&self, id: ArticleId) -> ArticleResult<Option<ArticleDetail>>;
}
