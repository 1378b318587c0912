//! PostgreSQL-backed `CommentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, NewsPersistenceError};
use crate::domain::{
    ArticleId, Comment, CommentId, CommentListQuery, CommentSortColumn, NewComment, SortOrder,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::comments;

/// Diesel-backed implementation of the comment repository port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
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
impl CommentRepository for DieselCommentRepository {
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        query: &CommentListQuery,
    ) -> Result<Vec<Comment>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let statement = comments::table
            .filter(comments::article_id.eq(article_id.get()))
            .select(CommentRow::as_select())
            .into_boxed();

        let statement = match query.sort_by {
            CommentSortColumn::CommentId => {
                order_by_direction!(statement, comments::comment_id, query.order)
            }
            CommentSortColumn::Author => order_by_direction!(statement, comments::author, query.order),
            CommentSortColumn::ArticleId => {
                order_by_direction!(statement, comments::article_id, query.order)
            }
            CommentSortColumn::Votes => order_by_direction!(statement, comments::votes, query.order),
            CommentSortColumn::CreatedAt => {
                order_by_direction!(statement, comments::created_at, query.order)
            }
            CommentSortColumn::Body => order_by_direction!(statement, comments::body, query.order),
        };

        let rows = statement
            .then_order_by(comments::comment_id.asc())
            .limit(query.page.limit())
            .offset(query.page.offset())
            .load::<CommentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn insert(&self, comment: &NewComment) -> Result<Comment, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCommentRow {
            author: comment.author().as_str(),
            article_id: comment.article_id().get(),
            body: comment.body(),
        };
        let inserted = diesel::insert_into(comments::table)
            .values(&row)
            .returning(CommentRow::as_returning())
            .get_result::<CommentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(inserted.into())
    }

    async fn increment_votes(
        &self,
        id: CommentId,
        delta: i32,
    ) -> Result<Option<Comment>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(comments::table.find(id.get()))
            .set(comments::votes.eq(comments::votes + delta))
            .returning(CommentRow::as_returning())
            .get_result::<CommentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Comment::from))
    }

    async fn delete(&self, id: CommentId) -> Result<bool, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(comments::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
