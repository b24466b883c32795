//! Sign In Use Case
//!
//! Authenticates a user and issues a fresh identity token.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password;
use platform::token::TokenService;

use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

impl SignInInput {
    fn validate(&self) -> AuthResult<()> {
        if self.username.is_empty() {
            return Err(AuthError::UsernameRequired);
        }
        if self.password.is_empty() {
            return Err(AuthError::PasswordRequired);
        }
        Ok(())
    }
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        input.validate()?;

        let user = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::InvalidUsername)?;

        // An unparseable stored hash counts as "does not match"
        if !password::verify_password(&user.password_hash, &input.password) {
            return Err(AuthError::InvalidPassword);
        }

        let token = self
            .tokens
            .issue(user.id.value(), &user.username)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.id, username = %user.username, "User signed in");

        Ok(SignInOutput {
            user_id: user.id,
            token,
        })
    }
}
