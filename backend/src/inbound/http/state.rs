//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain service and remain testable without I/O.

use std::sync::Arc;

use crate::domain::NewsService;
use crate::domain::ports::{ArticleRepository, CommentRepository, TopicRepository, UserRepository};

/// Parameter object bundling the repository ports behind the news service.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub articles: Arc<dyn ArticleRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub users: Arc<dyn UserRepository>,
    pub topics: Arc<dyn TopicRepository>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub news: Arc<NewsService>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Build the news service over the given ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use news_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use news_backend::test_support::InMemoryNewsStore;
    ///
    /// let store = Arc::new(InMemoryNewsStore::seeded());
    /// let state = HttpState::new(HttpStatePorts {
    ///     articles: store.clone(),
    ///     comments: store.clone(),
    ///     users: store.clone(),
    ///     topics: store,
    /// });
    /// let _news = state.news.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            articles,
            comments,
            users,
            topics,
        } = ports;
        Self {
            news: Arc::new(NewsService::new(articles, comments, users, topics)),
        }
    }
}
