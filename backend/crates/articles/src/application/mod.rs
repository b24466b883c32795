//! Articles Application Layer - Use Cases

pub mod create_article;
pub mod get_article;
pub mod list_articles;

pub use create_article::{CreateArticleInput, CreateArticleOutput, CreateArticleUseCase};
pub use get_article::GetArticleUseCase;
pub use list_articles::{ListArticlesUseCase, PAGE_SIZE};
