//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, extractors
//!
//! ## Features
//! - User signup with username + email + password (token issued on success)
//! - User signin with username + password
//! - Stateless bearer-token authentication for protected endpoints
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Identity asserted by signed JWTs; no server-side session state
//! - Username/email uniqueness enforced by the database and classified
//!   into field-specific errors by the store layer

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::extract::{Auth, AuthenticatedUser};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
