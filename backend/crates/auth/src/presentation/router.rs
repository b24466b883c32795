//! Auth Router

use std::sync::Arc;

use axum::{Router, routing::post};
use platform::token::TokenService;

use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, tokens: Arc<TokenService>) -> Router {
    auth_router_generic(repo, tokens)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryUserRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn router() -> Router {
        let tokens = Arc::new(TokenService::new(
            b"test-secret-at-least-32-bytes-long!",
            "composition",
        ));
        auth_router_generic(MemoryUserRepository::new(), tokens)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_signup_returns_token() {
        let router = router();

        let response = router
            .oneshot(post_json(
                "/signup",
                r#"{"username":"alice","email":"alice@example.com","password":"hunter2!","password_confirm":"hunter2!"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["token"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_signup_missing_field_message() {
        let router = router();

        let response = router
            .oneshot(post_json("/signup", r#"{"username":"alice"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Email is required.");
    }

    #[tokio::test]
    async fn test_malformed_body_is_400_before_field_checks() {
        let router = router();

        let response = router
            .oneshot(post_json("/signup", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        // The parse error is reported in the shared body shape; the field
        // presence checks never run
        let json = body_json(response).await;
        let message = json["message"].as_str().unwrap();
        assert!(!message.is_empty());
        assert_ne!(message, "Username is required.");
    }

    #[tokio::test]
    async fn test_signin_unknown_user_message() {
        let router = router();

        let response = router
            .oneshot(post_json(
                "/signin",
                r#"{"username":"nobody","password":"hunter2!"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Username is invalid.");
    }
}
