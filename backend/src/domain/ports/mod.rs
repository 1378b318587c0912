//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod article_repository;
mod comment_repository;
mod news_persistence_error;
mod seed_repository;
mod topic_repository;
mod user_repository;

pub use article_repository::ArticleRepository;
#[cfg(test)]
pub use article_repository::MockArticleRepository;
pub use comment_repository::CommentRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use news_persistence_error::NewsPersistenceError;
#[cfg(test)]
pub use seed_repository::MockSeedRepository;
pub use seed_repository::{SeedPayload, SeedRepository, SeedRepositoryError, SeedSummary};
#[cfg(test)]
pub use topic_repository::MockTopicRepository;
pub use topic_repository::TopicRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
