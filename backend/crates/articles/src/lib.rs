//! Articles Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, projections, repository traits
//! - `application/` - Use cases (list, get, create)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Paginated listing of article previews (public)
//! - Single-article fetch joined with the owner's username (public)
//! - Article creation scoped to the authenticated bearer-token user

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ArticleError, ArticleResult};
pub use infra::postgres::PgArticleRepository;
pub use presentation::router::articles_router;
