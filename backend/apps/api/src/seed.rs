//! Dev Fixture Seeding
//!
//! Loads `database/seed/users.json` and inserts the users and their
//! articles through the regular repositories, so seeded rows get real
//! password hashes. Users that already exist are skipped, which makes
//! repeated dev startups idempotent.

use std::sync::Arc;

use articles::PgArticleRepository;
use articles::domain::entity::NewArticle;
use articles::domain::repository::ArticleRepository;
use auth::domain::entity::NewUser;
use auth::domain::repository::UserRepository;
use auth::error::AuthError;
use auth::infra::postgres::PgUserRepository;
use platform::password::hash_password;
use serde::Deserialize;
use sqlx::PgPool;

const SEED_FILE: &str = "database/seed/users.json";

#[derive(Debug, Deserialize)]
struct SeedArticle {
    title: String,
    body: String,
}

#[derive(Debug, Deserialize)]
struct SeedUser {
    username: String,
    email: String,
    password: String,
    #[serde(default)]
    articles: Vec<SeedArticle>,
}

/// Populate the database with the dev fixtures
pub async fn populate(pool: PgPool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(SEED_FILE)?;
    let users: Vec<SeedUser> = serde_json::from_str(&raw)?;

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let article_repo = Arc::new(PgArticleRepository::new(pool));

    let mut seeded = 0usize;

    for user in users {
        let password_hash = hash_password(&user.password)
            .map_err(|e| anyhow::anyhow!("Hashing seed password failed: {e}"))?;

        let new_user = NewUser {
            username: user.username.clone(),
            email: user.email,
            password_hash,
        };

        let user_id = match user_repo.create(&new_user).await {
            Ok(id) => id,
            Err(AuthError::UsernameTaken | AuthError::EmailTaken) => {
                tracing::debug!(username = %user.username, "Seed user already exists, skipping");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        for article in user.articles {
            article_repo
                .create(&NewArticle {
                    user_id,
                    title: article.title,
                    body: article.body,
                })
                .await?;
        }

        seeded += 1;
    }

    tracing::info!(users_seeded = seeded, "Dev seeding completed");

    Ok(())
}
