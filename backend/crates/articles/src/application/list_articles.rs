//! List Articles Use Case
//!
//! Public, paginated listing of article previews.

use std::sync::Arc;

use crate::domain::entity::ArticlePreview;
use crate::domain::repository::ArticleRepository;
use crate::error::ArticleResult;

/// Fixed page size for listings
pub const PAGE_SIZE: i64 = 10;

/// List articles use case
pub struct ListArticlesUseCase<R>
where
    R: ArticleRepository,
{
    repo: Arc<R>,
}

impl<R> ListArticlesUseCase<R>
where
    R: ArticleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch one page of previews, most recent first.
    ///
    /// Pages are 1-indexed; a missing or out-of-range page number falls
    /// back to the first page.
    pub async fn execute(&self, page: Option<u32>) -> ArticleResult<Vec<ArticlePreview>> {
        let offset = page_offset(page);
        self.repo.latest_previews(PAGE_SIZE, offset).await
    }
}

/// offset = (page - 1) * PAGE_SIZE, with page clamped to >= 1
fn page_offset(page: Option<u32>) -> i64 {
    let page = i64::from(page.unwrap_or(1).max(1));
    (page - 1) * PAGE_SIZE
}
