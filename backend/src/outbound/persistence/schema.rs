//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. When the
//! migrations change, regenerate them with `diesel print-schema` or edit by
//! hand.

diesel::table! {
    /// Subject areas articles are filed under.
    topics (slug) {
        /// Primary key.
        slug -> Varchar,
        /// Free text description.
        description -> Text,
    }
}

diesel::table! {
    /// Registered users.
    users (username) {
        /// Primary key.
        username -> Varchar,
        /// Display name.
        name -> Varchar,
        /// Avatar image URL.
        avatar_url -> Varchar,
    }
}

diesel::table! {
    /// Published articles. `comment_count` is never stored.
    articles (article_id) {
        /// Serial primary key.
        article_id -> Int4,
        title -> Varchar,
        body -> Text,
        /// Net vote tally, defaults to zero.
        votes -> Int4,
        /// References `topics.slug`.
        topic -> Varchar,
        /// References `users.username`.
        author -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Comments left on articles.
    comments (comment_id) {
        /// Serial primary key.
        comment_id -> Int4,
        /// References `users.username`.
        author -> Text,
        /// References `articles.article_id`.
        article_id -> Int4,
        votes -> Int4,
        created_at -> Timestamptz,
        body -> Text,
    }
}

diesel::joinable!(articles -> topics (topic));
diesel::joinable!(articles -> users (author));
diesel::joinable!(comments -> articles (article_id));
diesel::joinable!(comments -> users (author));

diesel::allow_tables_to_appear_in_same_query!(articles, comments, topics, users);
