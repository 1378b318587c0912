//! PostgreSQL-backed `ArticleRepository` implementation using Diesel ORM.
//!
//! Comment counts are computed with a left join on `comments` grouped by the
//! article primary key, so articles without comments report zero.

use async_trait::async_trait;
use diesel::dsl::{count, exists};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ArticleRepository, NewsPersistenceError};
use crate::domain::{
    Article, ArticleDetail, ArticleId, ArticleListQuery, ArticleSortColumn, SortOrder,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::ArticleRow;
use super::pool::DbPool;
use super::schema::{articles, comments};

/// Diesel-backed implementation of the article repository port.
#[derive(Clone)]
pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_detail((row, comment_count): (ArticleRow, i64)) -> ArticleDetail {
    ArticleDetail {
        article: row.into(),
        comment_count,
    }
}

macro_rules! order_by_direction {
    ($statement:expr, $column:expr, $order:expr) => {
        match $order {
            SortOrder::Asc => $statement.order_by($column.asc()),
            SortOrder::Desc => $statement.order_by($column.desc()),
        }
    };
}

#[async_trait]
impl ArticleRepository for DieselArticleRepository {
    async fn find_article(
        &self,
        id: ArticleId,
    ) -> Result<Option<ArticleDetail>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = articles::table
            .left_join(comments::table)
            .filter(articles::article_id.eq(id.get()))
            .group_by(articles::article_id)
            .select((
                ArticleRow::as_select(),
                count(comments::comment_id.nullable()),
            ))
            .first::<(ArticleRow, i64)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(to_detail))
    }

    async fn list_articles(
        &self,
        query: &ArticleListQuery,
    ) -> Result<Vec<ArticleDetail>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut statement = articles::table
            .left_join(comments::table)
            .group_by(articles::article_id)
            .select((
                ArticleRow::as_select(),
                count(comments::comment_id.nullable()),
            ))
            .into_boxed();

        if let Some(author) = query.author.as_deref() {
            statement = statement.filter(articles::author.eq(author));
        }
        if let Some(topic) = query.topic.as_deref() {
            statement = statement.filter(articles::topic.eq(topic));
        }

        let statement = match query.sort_by {
            ArticleSortColumn::Author => order_by_direction!(statement, articles::author, query.order),
            ArticleSortColumn::Title => order_by_direction!(statement, articles::title, query.order),
            ArticleSortColumn::ArticleId => {
                order_by_direction!(statement, articles::article_id, query.order)
            }
            ArticleSortColumn::Topic => order_by_direction!(statement, articles::topic, query.order),
            ArticleSortColumn::CreatedAt => {
                order_by_direction!(statement, articles::created_at, query.order)
            }
            ArticleSortColumn::Votes => order_by_direction!(statement, articles::votes, query.order),
            ArticleSortColumn::CommentCount => order_by_direction!(
                statement,
                count(comments::comment_id.nullable()),
                query.order
            ),
        };

        let rows = statement
            .then_order_by(articles::article_id.asc())
            .load::<(ArticleRow, i64)>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(to_detail).collect())
    }

    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: i32,
    ) -> Result<Option<Article>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(articles::table.find(id.get()))
            .set(articles::votes.eq(articles::votes + delta))
            .returning(ArticleRow::as_returning())
            .get_result::<ArticleRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Article::from))
    }

    async fn article_exists(&self, id: ArticleId) -> Result<bool, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(articles::table.find(id.get())))
            .get_result::<bool>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
