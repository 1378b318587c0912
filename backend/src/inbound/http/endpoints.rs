//! Static endpoint catalogue served at `GET /api`.
//!
//! The catalogue is a JSON object keyed by `"METHOD path"`, e.g.
//! `"GET /api/topics"`, each entry carrying a description and the accepted
//! query parameters.

use actix_web::web;
use serde_json::{Map, Value};

/// One entry of the endpoint catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub queries: &'static [&'static str],
}

impl Endpoint {
    const fn new(
        method: &'static str,
        path: &'static str,
        description: &'static str,
        queries: &'static [&'static str],
    ) -> Self {
        Self {
            method,
            path,
            description,
            queries,
        }
    }

    /// Catalogue key, e.g. `GET /api/articles/{article_id}`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    fn describe(&self) -> Value {
        let mut entry = Map::new();
        entry.insert("description".to_owned(), Value::from(self.description));
        if !self.queries.is_empty() {
            entry.insert("queries".to_owned(), Value::from(self.queries.to_vec()));
        }
        Value::Object(entry)
    }
}

/// Every routed API endpoint. Paths use the router's `{param}` syntax.
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "GET",
        "/api",
        "serves this description of every available endpoint",
        &[],
    ),
    Endpoint::new("GET", "/api/topics", "serves an array of all topics", &[]),
    Endpoint::new(
        "GET",
        "/api/users/{username}",
        "serves the user with the given username",
        &[],
    ),
    Endpoint::new(
        "GET",
        "/api/articles",
        "serves an array of all articles with their comment counts",
        &["author", "topic", "sort_by", "order"],
    ),
    Endpoint::new(
        "GET",
        "/api/articles/{article_id}",
        "serves the article with the given id and its comment count",
        &[],
    ),
    Endpoint::new(
        "PATCH",
        "/api/articles/{article_id}",
        "adds inc_votes to the article's votes and serves the updated article",
        &[],
    ),
    Endpoint::new(
        "GET",
        "/api/articles/{article_id}/comments",
        "serves a page of the article's comments",
        &["sort_by", "order", "limit", "p"],
    ),
    Endpoint::new(
        "POST",
        "/api/articles/{article_id}/comments",
        "adds a comment from an existing user and serves it",
        &[],
    ),
    Endpoint::new(
        "PATCH",
        "/api/comments/{comment_id}",
        "adds inc_votes to the comment's votes and serves the updated comment",
        &[],
    ),
    Endpoint::new(
        "DELETE",
        "/api/comments/{comment_id}",
        "deletes the comment and serves no content",
        &[],
    ),
];

fn catalogue() -> Map<String, Value> {
    ENDPOINTS
        .iter()
        .map(|endpoint| (endpoint.key(), endpoint.describe()))
        .collect()
}

/// Describe every available endpoint.
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Endpoint catalogue keyed by method and path", body = Object),
        (status = 405, description = "Method not allowed")
    ),
    tags = ["api"],
    operation_id = "getApi"
)]
pub async fn get_api() -> web::Json<Map<String, Value>> {
    web::Json(catalogue())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn keys_are_unique() {
        let keys: HashSet<String> = ENDPOINTS.iter().map(Endpoint::key).collect();
        assert_eq!(keys.len(), ENDPOINTS.len());
    }

    #[rstest]
    fn entries_omit_empty_query_lists() {
        let catalogue = catalogue();
        let topics = catalogue.get("GET /api/topics").expect("topics entry");
        assert!(topics.get("queries").is_none());
        let articles = catalogue.get("GET /api/articles").expect("articles entry");
        assert_eq!(
            articles.get("queries"),
            Some(&serde_json::json!(["author", "topic", "sort_by", "order"]))
        );
        assert!(articles.get("method").is_none());
    }
}
