//! HTTP Handlers

use std::sync::Arc;

use auth::presentation::extract::Auth;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRef, Path, Query, State};
use axum::http::StatusCode;
use kernel::id::ArticleId;
use platform::token::TokenService;

use crate::application::{
    CreateArticleInput, CreateArticleUseCase, GetArticleUseCase, ListArticlesUseCase,
};
use crate::domain::repository::ArticleRepository;
use crate::error::{ArticleError, ArticleResult};
use crate::presentation::dto::{
    ArticleListResponse, CreateArticleRequest, CreateArticleResponse, GetArticleResponse,
    ListQuery,
};

/// Shared state for article handlers
#[derive(Clone)]
pub struct ArticlesAppState<R>
where
    R: ArticleRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

// The bearer-token gate pulls the token service out of whatever state
// the router carries.
impl<R> FromRef<ArticlesAppState<R>> for Arc<TokenService>
where
    R: ArticleRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &ArticlesAppState<R>) -> Self {
        state.tokens.clone()
    }
}

// ============================================================================
// List Articles
// ============================================================================

/// GET /api/articles?page=N
pub async fn list_articles<R>(
    State(state): State<ArticlesAppState<R>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ArticleResult<Json<ArticleListResponse>>
where
    R: ArticleRepository + Clone + Send + Sync + 'static,
{
    // A non-numeric page is rejected with the shared error body shape
    let Query(query) = query.map_err(|e| ArticleError::MalformedBody(e.body_text()))?;

    let use_case = ListArticlesUseCase::new(state.repo.clone());
    let previews = use_case.execute(query.page).await?;

    Ok(Json(ArticleListResponse {
        article_previews: previews.into_iter().map(Into::into).collect(),
    }))
}

// ============================================================================
// Get Article
// ============================================================================

/// GET /api/articles/{id}
pub async fn get_article<R>(
    State(state): State<ArticlesAppState<R>>,
    Path(id): Path<i32>,
) -> ArticleResult<Json<GetArticleResponse>>
where
    R: ArticleRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetArticleUseCase::new(state.repo.clone());
    let detail = use_case.execute(ArticleId::from(id)).await?;

    Ok(Json(GetArticleResponse::from(detail)))
}

// ============================================================================
// Create Article
// ============================================================================

/// POST /api/articles
///
/// Requires a bearer token; the article is owned by the token's user.
pub async fn create_article<R>(
    State(state): State<ArticlesAppState<R>>,
    Auth(user): Auth,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> ArticleResult<(StatusCode, Json<CreateArticleResponse>)>
where
    R: ArticleRepository + Clone + Send + Sync + 'static,
{
    // Malformed body is rejected before any field check
    let Json(req) = payload.map_err(|e| ArticleError::MalformedBody(e.body_text()))?;

    let use_case = CreateArticleUseCase::new(state.repo.clone());

    let output = use_case
        .execute(CreateArticleInput {
            user_id: user.id,
            title: req.title,
            body: req.body,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateArticleResponse {
            article_id: output.article_id,
            title: output.title,
            body: output.body,
        }),
    ))
}
