//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain types live here so
//! each repository only deals with rows.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Article, ArticleId, Comment, CommentId, Topic};

use super::schema::{articles, comments, topics, users};

/// Row struct for reading from the topics table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = topics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TopicRow {
    pub slug: String,
    pub description: String,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Self {
            slug: row.slug,
            description: row.description,
        }
    }
}

/// Insertable topic.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = topics)]
pub(crate) struct NewTopicRow<'a> {
    pub slug: &'a str,
    pub description: &'a str,
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// Insertable user.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub name: &'a str,
    pub avatar_url: &'a str,
}

/// Row struct for reading from the articles table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArticleRow {
    pub article_id: i32,
    pub title: String,
    pub body: String,
    pub votes: i32,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            article_id: ArticleId::new(row.article_id),
            title: row.title,
            body: row.body,
            votes: row.votes,
            topic: row.topic,
            author: row.author,
            created_at: row.created_at,
        }
    }
}

/// Insertable seed article; `article_id` comes from the serial sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = articles)]
pub(crate) struct NewArticleRow<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub votes: i32,
    pub topic: &'a str,
    pub author: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Row struct for reading from the comments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub comment_id: i32,
    pub author: String,
    pub article_id: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub body: String,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            comment_id: CommentId::new(row.comment_id),
            author: row.author,
            article_id: ArticleId::new(row.article_id),
            votes: row.votes,
            created_at: row.created_at,
            body: row.body,
        }
    }
}

/// Insertable comment posted through the API; votes and timestamp default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub author: &'a str,
    pub article_id: i32,
    pub body: &'a str,
}

/// Insertable seed comment carrying its own votes and timestamp.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct SeedCommentRow<'a> {
    pub author: &'a str,
    pub article_id: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub body: &'a str,
}
