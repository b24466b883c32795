//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::ArticleId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::{ArticleDetail, ArticlePreview};

// ============================================================================
// Listing
// ============================================================================

/// Query string for GET /api/articles
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// 1-indexed page number; defaults to 1
    pub page: Option<u32>,
}

/// One entry of the listing response
#[derive(Debug, Clone, Serialize)]
pub struct ArticlePreviewDto {
    pub username: String,
    pub title: String,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
}

impl From<ArticlePreview> for ArticlePreviewDto {
    fn from(preview: ArticlePreview) -> Self {
        Self {
            username: preview.username,
            title: preview.title,
            article_id: preview.id,
            created_at: preview.created_at,
        }
    }
}

/// GET /api/articles response
#[derive(Debug, Clone, Serialize)]
pub struct ArticleListResponse {
    pub article_previews: Vec<ArticlePreviewDto>,
}

// ============================================================================
// Single article
// ============================================================================

/// GET /api/articles/{id} response
#[derive(Debug, Clone, Serialize)]
pub struct GetArticleResponse {
    pub article_id: ArticleId,
    pub title: String,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<ArticleDetail> for GetArticleResponse {
    fn from(detail: ArticleDetail) -> Self {
        Self {
            article_id: detail.id,
            title: detail.title,
            body: detail.body,
            username: detail.username,
            created_at: detail.created_at,
        }
    }
}

// ============================================================================
// Creation
// ============================================================================

/// POST /api/articles request
///
/// Fields default to empty so missing keys reach the ordered presence
/// checks rather than failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// POST /api/articles response (201)
#[derive(Debug, Clone, Serialize)]
pub struct CreateArticleResponse {
    pub article_id: ArticleId,
    pub title: String,
    pub body: String,
}
