//! PostgreSQL Article Repository

use chrono::{DateTime, Utc};
use kernel::id::ArticleId;
use sqlx::PgPool;

use crate::domain::entity::{ArticleDetail, ArticlePreview, NewArticle};
use crate::domain::repository::ArticleRepository;
use crate::error::ArticleResult;

/// PostgreSQL-backed article repository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ArticleRepository for PgArticleRepository {
    async fn create(&self, article: &NewArticle) -> ArticleResult<ArticleId> {
        // created_at is assigned by the store (column default)
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO articles (user_id, title, body)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(article.user_id.value())
        .bind(&article.title)
        .bind(&article.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(ArticleId::from(id))
    }

    async fn latest_previews(
        &self,
        limit: i64,
        offset: i64,
    ) -> ArticleResult<Vec<ArticlePreview>> {
        let rows = sqlx::query_as::<_, PreviewRow>(
            r#"
            SELECT users.username, articles.title, articles.id, articles.created_at
            FROM articles
            JOIN users ON users.id = articles.user_id
            ORDER BY articles.created_at DESC
            LIMIT $1
            OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PreviewRow::into_preview).collect())
    }

    async fn find_detail(&self, id: ArticleId) -> ArticleResult<Option<ArticleDetail>> {
        let row = sqlx::query_as::<_, DetailRow>(
            r#"
            SELECT articles.id, articles.title, articles.body, users.username, articles.created_at
            FROM articles
            JOIN users ON users.id = articles.user_id
            WHERE articles.id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DetailRow::into_detail))
    }
}

#[derive(sqlx::FromRow)]
struct PreviewRow {
    username: String,
    title: String,
    id: i32,
    created_at: DateTime<Utc>,
}

impl PreviewRow {
    fn into_preview(self) -> ArticlePreview {
        ArticlePreview {
            username: self.username,
            title: self.title,
            id: ArticleId::from(self.id),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DetailRow {
    id: i32,
    title: String,
    body: String,
    username: String,
    created_at: DateTime<Utc>,
}

impl DetailRow {
    fn into_detail(self) -> ArticleDetail {
        ArticleDetail {
            id: ArticleId::from(self.id),
            title: self.title,
            body: self.body,
            username: self.username,
            created_at: self.created_at,
        }
    }
}
