//! Create Article Use Case
//!
//! Inserts an article owned by the authenticated user.

use std::sync::Arc;

use kernel::id::{ArticleId, UserId};

use crate::domain::entity::NewArticle;
use crate::domain::repository::ArticleRepository;
use crate::error::{ArticleError, ArticleResult};

/// Create article input
///
/// `user_id` comes from the bearer-token gate, never from the body.
pub struct CreateArticleInput {
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

impl CreateArticleInput {
    /// Ordered presence checks, first failure wins
    fn validate(&self) -> ArticleResult<()> {
        if self.title.is_empty() {
            return Err(ArticleError::TitleRequired);
        }
        if self.body.is_empty() {
            return Err(ArticleError::BodyRequired);
        }
        Ok(())
    }
}

/// Create article output
#[derive(Debug)]
pub struct CreateArticleOutput {
    pub article_id: ArticleId,
    pub title: String,
    pub body: String,
}

/// Create article use case
pub struct CreateArticleUseCase<R>
where
    R: ArticleRepository,
{
    repo: Arc<R>,
}

impl<R> CreateArticleUseCase<R>
where
    R: ArticleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateArticleInput) -> ArticleResult<CreateArticleOutput> {
        input.validate()?;

        let article = NewArticle {
            user_id: input.user_id,
            title: input.title,
            body: input.body,
        };

        let article_id = self.repo.create(&article).await?;

        tracing::info!(
            article_id = %article_id,
            user_id = %article.user_id,
            "Article created"
        );

        Ok(CreateArticleOutput {
            article_id,
            title: article.title,
            body: article.body,
        })
    }
}
