//! In-memory news store for handler and service tests.
//!
//! [`InMemoryNewsStore`] implements every news repository port over plain
//! vectors, reproducing the observable behaviour of the Diesel adapters:
//! foreign-key violations on comment inserts, stable sorting with an id
//! tiebreak, pagination and signed vote increments.

use std::cmp::Ordering;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use seed_data::{ArticleRef, SeedDataset, SeedEnvironment, format_comments, make_ref_obj};

use crate::domain::ports::{
    ArticleRepository, CommentRepository, NewsPersistenceError, TopicRepository, UserRepository,
};
use crate::domain::{
    Article, ArticleDetail, ArticleId, ArticleListQuery, ArticleSortColumn, Comment, CommentId,
    CommentListQuery, CommentSortColumn, NewComment, SortOrder, Topic, User, Username,
};

#[derive(Debug, Default)]
struct Tables {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
    next_comment_id: i32,
}

/// Vector-backed implementation of the news repository ports.
#[derive(Debug, Default)]
pub struct InMemoryNewsStore {
    tables: Mutex<Tables>,
}

impl InMemoryNewsStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the bundled test dataset with ids assigned in file
    /// order, as a fresh database seed would.
    ///
    /// # Panics
    ///
    /// Panics when the bundled fixtures cannot be read or normalised.
    pub fn seeded() -> Self {
        let dataset = SeedDataset::bundled(SeedEnvironment::Test).expect("bundled test dataset");
        Self::from_dataset(&dataset)
    }

    /// A store holding `dataset`.
    ///
    /// # Panics
    ///
    /// Panics when the dataset fails normalisation or names an invalid
    /// username.
    pub fn from_dataset(dataset: &SeedDataset) -> Self {
        let topics = dataset
            .topics
            .iter()
            .map(|topic| Topic {
                slug: topic.slug.clone(),
                description: topic.description.clone(),
            })
            .collect();
        let users = dataset
            .users
            .iter()
            .map(|user| User {
                username: Username::new(user.username.as_str()).expect("valid fixture username"),
                name: user.name.clone(),
                avatar_url: user.avatar_url.clone(),
            })
            .collect();
        let articles: Vec<Article> = dataset
            .article_seeds()
            .expect("fixture article timestamps")
            .into_iter()
            .zip(1..)
            .map(|(seed, id)| Article {
                article_id: ArticleId::new(id),
                title: seed.fields.title,
                body: seed.fields.body,
                votes: seed.fields.votes,
                topic: seed.fields.topic,
                author: seed.fields.author,
                created_at: seed.created_at,
            })
            .collect();
        let refs: Vec<ArticleRef> = articles
            .iter()
            .map(|article| ArticleRef::new(article.article_id.get(), article.title.as_str()))
            .collect();
        let comments: Vec<Comment> = format_comments(&dataset.comments, &make_ref_obj(&refs))
            .expect("fixture comments resolve")
            .into_iter()
            .zip(1..)
            .map(|(seed, id)| Comment {
                comment_id: CommentId::new(id),
                author: seed.author,
                article_id: ArticleId::new(seed.article_id),
                votes: seed.votes,
                created_at: seed.created_at,
                body: seed.body,
            })
            .collect();
        let next_comment_id = i32::try_from(comments.len()).unwrap_or(i32::MAX - 1) + 1;

        Self {
            tables: Mutex::new(Tables {
                topics,
                users,
                articles,
                comments,
                next_comment_id,
            }),
        }
    }

    /// Snapshot of a stored comment, ignoring pagination.
    pub fn comment(&self, id: CommentId) -> Option<Comment> {
        self.lock()
            .ok()?
            .comments
            .iter()
            .find(|comment| comment.comment_id == id)
            .cloned()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, NewsPersistenceError> {
        self.tables
            .lock()
            .map_err(|_| NewsPersistenceError::query("in-memory store lock poisoned"))
    }
}

impl Tables {
    fn detail(&self, article: &Article) -> ArticleDetail {
        let comment_count = self
            .comments
            .iter()
            .filter(|comment| comment.article_id == article.article_id)
            .count();
        ArticleDetail {
            article: article.clone(),
            comment_count: i64::try_from(comment_count).unwrap_or(i64::MAX),
        }
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn compare_articles(
    left: &ArticleDetail,
    right: &ArticleDetail,
    query: &ArticleListQuery,
) -> Ordering {
    let (a, b) = (&left.article, &right.article);
    let primary = match query.sort_by {
        ArticleSortColumn::Author => a.author.cmp(&b.author),
        ArticleSortColumn::Title => a.title.cmp(&b.title),
        ArticleSortColumn::ArticleId => a.article_id.cmp(&b.article_id),
        ArticleSortColumn::Topic => a.topic.cmp(&b.topic),
        ArticleSortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        ArticleSortColumn::Votes => a.votes.cmp(&b.votes),
        ArticleSortColumn::CommentCount => left.comment_count.cmp(&right.comment_count),
    };
    directed(primary, query.order).then_with(|| a.article_id.cmp(&b.article_id))
}

fn compare_comments(a: &Comment, b: &Comment, query: &CommentListQuery) -> Ordering {
    let primary = match query.sort_by {
        CommentSortColumn::CommentId => a.comment_id.cmp(&b.comment_id),
        CommentSortColumn::Author => a.author.cmp(&b.author),
        CommentSortColumn::ArticleId => a.article_id.cmp(&b.article_id),
        CommentSortColumn::Votes => a.votes.cmp(&b.votes),
        CommentSortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        CommentSortColumn::Body => a.body.cmp(&b.body),
    };
    directed(primary, query.order).then_with(|| a.comment_id.cmp(&b.comment_id))
}

fn usize_from(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl TopicRepository for InMemoryNewsStore {
    async fn list_topics(&self) -> Result<Vec<Topic>, NewsPersistenceError> {
        let mut topics = self.lock()?.topics.clone();
        topics.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(topics)
    }
}

#[async_trait]
impl UserRepository for InMemoryNewsStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, NewsPersistenceError> {
        Ok(self
            .lock()?
            .users
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }
}

#[async_trait]
impl ArticleRepository for InMemoryNewsStore {
    async fn find_article(
        &self,
        id: ArticleId,
    ) -> Result<Option<ArticleDetail>, NewsPersistenceError> {
        let tables = self.lock()?;
        Ok(tables
            .articles
            .iter()
            .find(|article| article.article_id == id)
            .map(|article| tables.detail(article)))
    }

    async fn list_articles(
        &self,
        query: &ArticleListQuery,
    ) -> Result<Vec<ArticleDetail>, NewsPersistenceError> {
        let tables = self.lock()?;
        let mut details: Vec<ArticleDetail> = tables
            .articles
            .iter()
            .filter(|article| query.author.as_deref().is_none_or(|a| article.author == a))
            .filter(|article| query.topic.as_deref().is_none_or(|t| article.topic == t))
            .map(|article| tables.detail(article))
            .collect();
        details.sort_by(|a, b| compare_articles(a, b, query));
        Ok(details)
    }

    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: i32,
    ) -> Result<Option<Article>, NewsPersistenceError> {
        let mut tables = self.lock()?;
        let Some(article) = tables
            .articles
            .iter_mut()
            .find(|article| article.article_id == id)
        else {
            return Ok(None);
        };
        article.votes = article
            .votes
            .checked_add(delta)
            .ok_or_else(|| NewsPersistenceError::query("integer out of range"))?;
        Ok(Some(article.clone()))
    }

    async fn article_exists(&self, id: ArticleId) -> Result<bool, NewsPersistenceError> {
        Ok(self
            .lock()?
            .articles
            .iter()
            .any(|article| article.article_id == id))
    }
}

#[async_trait]
impl CommentRepository for InMemoryNewsStore {
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        query: &CommentListQuery,
    ) -> Result<Vec<Comment>, NewsPersistenceError> {
        let tables = self.lock()?;
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| compare_comments(a, b, query));
        Ok(comments
            .into_iter()
            .skip(usize_from(query.page.offset()))
            .take(usize_from(query.page.limit()))
            .collect())
    }

    async fn insert(&self, comment: &NewComment) -> Result<Comment, NewsPersistenceError> {
        let mut tables = self.lock()?;
        if !tables
            .articles
            .iter()
            .any(|article| article.article_id == comment.article_id())
        {
            return Err(NewsPersistenceError::foreign_key_violation(format!(
                "article {} does not exist",
                comment.article_id()
            )));
        }
        if !tables
            .users
            .iter()
            .any(|user| &user.username == comment.author())
        {
            return Err(NewsPersistenceError::foreign_key_violation(format!(
                "user {} does not exist",
                comment.author()
            )));
        }

        let created = Comment {
            comment_id: CommentId::new(tables.next_comment_id),
            author: comment.author().to_string(),
            article_id: comment.article_id(),
            votes: 0,
            created_at: chrono::Utc::now(),
            body: comment.body().to_owned(),
        };
        tables.next_comment_id += 1;
        tables.comments.push(created.clone());
        Ok(created)
    }

    async fn increment_votes(
        &self,
        id: CommentId,
        delta: i32,
    ) -> Result<Option<Comment>, NewsPersistenceError> {
        let mut tables = self.lock()?;
        let Some(comment) = tables
            .comments
            .iter_mut()
            .find(|comment| comment.comment_id == id)
        else {
            return Ok(None);
        };
        comment.votes = comment
            .votes
            .checked_add(delta)
            .ok_or_else(|| NewsPersistenceError::query("integer out of range"))?;
        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: CommentId) -> Result<bool, NewsPersistenceError> {
        let mut tables = self.lock()?;
        let before = tables.comments.len();
        tables.comments.retain(|comment| comment.comment_id != id);
        Ok(tables.comments.len() < before)
    }
}
