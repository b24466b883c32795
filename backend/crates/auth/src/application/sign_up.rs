//! Sign Up Use Case
//!
//! Creates a new user account and issues an identity token.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password;
use platform::token::TokenService;

use crate::domain::entity::NewUser;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl SignUpInput {
    /// Ordered presence and cross-field checks.
    ///
    /// Evaluated in a fixed order, stopping at the first violation;
    /// only one message is ever reported per request.
    fn validate(&self) -> AuthResult<()> {
        if self.username.is_empty() {
            return Err(AuthError::UsernameRequired);
        }
        if self.email.is_empty() {
            return Err(AuthError::EmailRequired);
        }
        if self.password.is_empty() {
            return Err(AuthError::PasswordRequired);
        }
        if self.password_confirm.is_empty() {
            return Err(AuthError::PasswordConfirmRequired);
        }
        if self.password != self.password_confirm {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate before any store write
        input.validate()?;

        // Hash the password; a hashing failure is fatal to the request
        let password_hash = password::hash_password(&input.password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let new_user = NewUser {
            username: input.username.clone(),
            email: input.email.clone(),
            password_hash,
        };

        // Uniqueness violations come back already classified by field
        let user_id = self.repo.create(&new_user).await?;

        let token = self
            .tokens
            .issue(user_id.value(), &input.username)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            user_id = %user_id,
            username = %input.username,
            "User signed up"
        );

        Ok(SignUpOutput { user_id, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryUserRepository;

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new(
            b"test-secret-at-least-32-bytes-long!",
            "composition",
        ))
    }

    fn input(username: &str, email: &str, password: &str, confirm: &str) -> SignUpInput {
        SignUpInput {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password_confirm: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_returns_token_for_new_user() {
        let repo = Arc::new(MemoryUserRepository::new());
        let tokens = tokens();
        let use_case = SignUpUseCase::new(repo.clone(), tokens.clone());

        let output = use_case
            .execute(input("alice", "alice@example.com", "hunter2!", "hunter2!"))
            .await
            .unwrap();

        let claims = tokens.verify(&output.token).unwrap();
        assert_eq!(claims.id, output.user_id.value());
        assert_eq!(claims.username, "alice");

        // The stored row carries a hash, never the raw password
        let stored = repo.get(output.user_id).unwrap();
        assert_ne!(stored.password_hash, "hunter2!");
    }

    #[tokio::test]
    async fn test_validation_order_first_failure_wins() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = SignUpUseCase::new(repo.clone(), tokens());

        // Everything missing: username is reported first
        let err = use_case.execute(input("", "", "", "")).await.unwrap_err();
        assert!(matches!(err, AuthError::UsernameRequired));

        let err = use_case
            .execute(input("alice", "", "", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailRequired));

        let err = use_case
            .execute(input("alice", "alice@example.com", "", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordRequired));

        let err = use_case
            .execute(input("alice", "alice@example.com", "hunter2!", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordConfirmRequired));
    }

    #[tokio::test]
    async fn test_password_mismatch_writes_nothing() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = SignUpUseCase::new(repo.clone(), tokens());

        let err = use_case
            .execute(input("alice", "alice@example.com", "hunter2!", "different"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::PasswordMismatch));
        assert_eq!(err.to_string(), "Passwords do not match.");
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_username_and_email() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = SignUpUseCase::new(repo.clone(), tokens());

        use_case
            .execute(input("alice", "alice@example.com", "hunter2!", "hunter2!"))
            .await
            .unwrap();

        let err = use_case
            .execute(input("alice", "other@example.com", "hunter2!", "hunter2!"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UsernameTaken));

        let err = use_case
            .execute(input("bob", "alice@example.com", "hunter2!", "hunter2!"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));

        // The existing row is untouched
        assert_eq!(repo.len(), 1);
    }
}
