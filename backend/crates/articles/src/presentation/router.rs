//! Articles Router

use std::sync::Arc;

use axum::{Router, routing::get};
use platform::token::TokenService;

use crate::domain::repository::ArticleRepository;
use crate::infra::postgres::PgArticleRepository;
use crate::presentation::handlers::{self, ArticlesAppState};

/// Create the Articles router with PostgreSQL repository
pub fn articles_router(repo: PgArticleRepository, tokens: Arc<TokenService>) -> Router {
    articles_router_generic(repo, tokens)
}

/// Create a generic Articles router for any repository implementation
pub fn articles_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: ArticleRepository + Clone + Send + Sync + 'static,
{
    let state = ArticlesAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_articles::<R>).post(handlers::create_article::<R>),
        )
        .route("/{id}", get(handlers::get_article::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryArticleRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn router_with(tokens: Arc<TokenService>) -> Router {
        articles_router_generic(MemoryArticleRepository::new(), tokens)
    }

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(b"test-secret", "composition"))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_is_public() {
        let router = router_with(token_service());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["article_previews"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_article_is_404() {
        let router = router_with(token_service());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Unable to find article.");
    }

    #[tokio::test]
    async fn test_create_without_token_is_401() {
        let router = router_with(token_service());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"title":"T","body":"B"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Authorization header is required.");
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let tokens = token_service();
        let token = tokens.issue(7, "alice").unwrap();
        let router = router_with(tokens);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"title":"First post","body":"Hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["title"], "First post");
        assert_eq!(created["body"], "Hello");
        let id = created["article_id"].as_i64().unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .uri(format!("/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched["title"], "First post");
        assert_eq!(fetched["username"], "user7");
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_is_400_before_field_checks() {
        let tokens = token_service();
        let token = tokens.issue(1, "alice").unwrap();
        let router = router_with(tokens);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        // The parse error is reported in the shared body shape, not as a
        // missing-field message
        let json = body_json(response).await;
        let message = json["message"].as_str().unwrap();
        assert!(!message.is_empty());
        assert_ne!(message, "Title is required.");
    }

    #[tokio::test]
    async fn test_non_numeric_page_is_400_message_shape() {
        let router = router_with(token_service());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/?page=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["message"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_create_with_missing_title_is_400() {
        let tokens = token_service();
        let token = tokens.issue(1, "alice").unwrap();
        let router = router_with(tokens);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"body":"only a body"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Title is required.");
    }
}
