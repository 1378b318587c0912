//! PostgreSQL-backed dataset seeding adapter.
//!
//! Implements the `SeedRepository` port. The whole replacement runs in one
//! transaction:
//!
//! 1. Truncate every news table and restart the serial sequences.
//! 2. Insert topics, then users, then articles.
//! 3. Index the inserted articles by title and resolve each comment's
//!    `belongs_to` against it.
//! 4. Insert the comments.
//!
//! Any failure rolls the database back to its previous contents.

use async_trait::async_trait;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use seed_data::{ArticleRef, CommentSeed, NormaliseError, format_comments, make_ref_obj};
use tracing::debug;

use crate::domain::ports::{SeedPayload, SeedRepository, SeedRepositoryError, SeedSummary};

use super::models::{NewArticleRow, NewTopicRow, NewUserRow, SeedCommentRow};
use super::pool::{DbPool, PoolError};
use super::schema::{articles, comments, topics, users};

const TRUNCATE_NEWS_TABLES: &str =
    "TRUNCATE TABLE comments, articles, users, topics RESTART IDENTITY CASCADE";

/// Diesel-backed implementation of the seeding repository.
#[derive(Clone)]
pub struct DieselSeedRepository {
    pool: DbPool,
}

impl DieselSeedRepository {
    /// Create a new seeding repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use news_backend::outbound::persistence::{DbPool, DieselSeedRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/nc_news")).await?;
    /// let repository = DieselSeedRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Failures inside the seeding transaction.
#[derive(Debug, thiserror::Error)]
enum SeedTransactionError {
    #[error(transparent)]
    Diesel(#[from] diesel::result::Error),
    #[error(transparent)]
    Normalise(#[from] NormaliseError),
}

fn map_pool_error(error: PoolError) -> SeedRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            SeedRepositoryError::connection(message)
        }
    }
}

fn map_transaction_error(error: SeedTransactionError) -> SeedRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        SeedTransactionError::Normalise(err) => SeedRepositoryError::normalise(err.to_string()),
        SeedTransactionError::Diesel(err) => {
            match &err {
                DieselError::DatabaseError(kind, info) => {
                    debug!(?kind, message = info.message(), "diesel operation failed");
                }
                _ => debug!(
                    error_type = %std::any::type_name_of_val(&err),
                    "diesel operation failed"
                ),
            }
            match err {
                DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                    SeedRepositoryError::connection(info.message())
                }
                DieselError::DatabaseError(_, info) => SeedRepositoryError::query(info.message()),
                other => SeedRepositoryError::query(other.to_string()),
            }
        }
    }
}

fn seed_comment_row(seed: &CommentSeed) -> SeedCommentRow<'_> {
    SeedCommentRow {
        author: seed.author.as_str(),
        article_id: seed.article_id,
        votes: seed.votes,
        created_at: seed.created_at,
        body: seed.body.as_str(),
    }
}

#[async_trait]
impl SeedRepository for DieselSeedRepository {
    async fn replace_all(&self, payload: SeedPayload) -> Result<SeedSummary, SeedRepositoryError> {
        let topic_rows: Vec<NewTopicRow<'_>> = payload
            .topics
            .iter()
            .map(|topic| NewTopicRow {
                slug: topic.slug.as_str(),
                description: topic.description.as_str(),
            })
            .collect();
        let user_rows: Vec<NewUserRow<'_>> = payload
            .users
            .iter()
            .map(|user| NewUserRow {
                username: user.username.as_str(),
                name: user.name.as_str(),
                avatar_url: user.avatar_url.as_str(),
            })
            .collect();
        let article_rows: Vec<NewArticleRow<'_>> = payload
            .articles
            .iter()
            .map(|article| NewArticleRow {
                title: article.fields.title.as_str(),
                body: article.fields.body.as_str(),
                votes: article.fields.votes,
                topic: article.fields.topic.as_str(),
                author: article.fields.author.as_str(),
                created_at: article.created_at,
            })
            .collect();
        let raw_comments = payload.comments.as_slice();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                diesel::sql_query(TRUNCATE_NEWS_TABLES).execute(conn).await?;

                if !topic_rows.is_empty() {
                    diesel::insert_into(topics::table)
                        .values(&topic_rows)
                        .execute(conn)
                        .await?;
                }
                if !user_rows.is_empty() {
                    diesel::insert_into(users::table)
                        .values(&user_rows)
                        .execute(conn)
                        .await?;
                }

                let inserted: Vec<(i32, String)> = if article_rows.is_empty() {
                    Vec::new()
                } else {
                    diesel::insert_into(articles::table)
                        .values(&article_rows)
                        .returning((articles::article_id, articles::title))
                        .get_results(conn)
                        .await?
                };
                let refs: Vec<ArticleRef> = inserted
                    .into_iter()
                    .map(|(article_id, title)| ArticleRef::new(article_id, title))
                    .collect();

                let comment_seeds = format_comments(raw_comments, &make_ref_obj(&refs))?;
                let comment_rows: Vec<SeedCommentRow<'_>> =
                    comment_seeds.iter().map(seed_comment_row).collect();
                if !comment_rows.is_empty() {
                    diesel::insert_into(comments::table)
                        .values(&comment_rows)
                        .execute(conn)
                        .await?;
                }

                Ok::<_, SeedTransactionError>(SeedSummary {
                    topics: topic_rows.len(),
                    users: user_rows.len(),
                    articles: refs.len(),
                    comments: comment_rows.len(),
                })
            }
            .scope_boxed()
        })
        .await
        .map_err(map_transaction_error)
    }
}
