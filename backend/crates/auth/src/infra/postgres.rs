//! PostgreSQL User Repository
//!
//! Single-statement parameterized queries; uniqueness is delegated to the
//! database's unique constraints and translated here into field-specific
//! errors so the application layer never touches driver error types.

use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// SQLSTATE class 23 code for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// Named constraints from the users migration
const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<UserId> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.password_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(classify_insert_error)?;

        Ok(UserId::from(id))
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }
}

/// Classify an insert failure into a structured conflict
///
/// Anything that is not a recognized unique violation propagates as an
/// opaque database error.
fn classify_insert_error(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            match db_err.constraint() {
                Some(USERNAME_CONSTRAINT) => return AuthError::UsernameTaken,
                Some(EMAIL_CONSTRAINT) => return AuthError::EmailTaken,
                _ => {}
            }
        }
    }
    AuthError::Database(err)
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    username: String,
    email: String,
    password: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::from(self.id),
            username: self.username,
            email: self.email,
            password_hash: self.password,
        }
    }
}
