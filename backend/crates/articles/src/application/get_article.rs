//! Get Article Use Case
//!
//! Public single-article fetch by identifier.

use std::sync::Arc;

use kernel::id::ArticleId;

use crate::domain::entity::ArticleDetail;
use crate::domain::repository::ArticleRepository;
use crate::error::{ArticleError, ArticleResult};

/// Get article use case
pub struct GetArticleUseCase<R>
where
    R: ArticleRepository,
{
    repo: Arc<R>,
}

impl<R> GetArticleUseCase<R>
where
    R: ArticleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: ArticleId) -> ArticleResult<ArticleDetail> {
        self.repo
            .find_detail(id)
            .await?
            .ok_or(ArticleError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryArticleRepository;
    use crate::domain::entity::NewArticle;
    use kernel::id::UserId;

    #[tokio::test]
    async fn test_found_returns_all_fields() {
        let repo = Arc::new(MemoryArticleRepository::new());
        let id = repo
            .create(&NewArticle {
                user_id: UserId::from(3),
                title: "A title".to_string(),
                body: "A body".to_string(),
            })
            .await
            .unwrap();

        let use_case = GetArticleUseCase::new(repo);
        let detail = use_case.execute(id).await.unwrap();

        assert_eq!(detail.id, id);
        assert_eq!(detail.title, "A title");
        assert_eq!(detail.body, "A body");
        assert_eq!(detail.username, "user3");
    }

    #[tokio::test]
    async fn test_missing_article_is_not_found() {
        let repo = Arc::new(MemoryArticleRepository::new());
        let use_case = GetArticleUseCase::new(repo);

        let err = use_case.execute(ArticleId::from(999)).await.unwrap_err();
        assert!(matches!(err, ArticleError::NotFound));
        assert_eq!(err.to_string(), "Unable to find article.");
    }
}
