//! Environment Configuration
//!
//! All environment variables are read once at startup into an immutable
//! `AppConfig`; nothing else in the process touches the environment.

use std::env;

/// Process configuration, resolved from the environment at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub environment: String,
    pub frontend_origins: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // DATABASE_URL wins; otherwise the URL is assembled from the
        // DB_USER / DB_NAME pair for a local trust-auth Postgres.
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let user = env::var("DB_USER")
                    .map_err(|_| anyhow::anyhow!("DB_USER or DATABASE_URL must be set"))?;
                let dbname = env::var("DB_NAME")
                    .map_err(|_| anyhow::anyhow!("DB_NAME or DATABASE_URL must be set"))?;
                format!("postgres://{user}@localhost/{dbname}?sslmode=disable")
            }
        };

        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| anyhow::anyhow!("JWT_SECRET must be set"))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {raw:?}"))?,
            Err(_) => 8080,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_default();

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            environment,
            frontend_origins,
        })
    }

    /// Dev mode enables fixture seeding at startup
    pub fn is_dev(&self) -> bool {
        self.environment == "dev"
    }
}
