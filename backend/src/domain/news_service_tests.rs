//! Tests for the news service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{
    MockArticleRepository, MockCommentRepository, MockTopicRepository, MockUserRepository,
};

#[derive(Default)]
struct Mocks {
    articles: MockArticleRepository,
    comments: MockCommentRepository,
    users: MockUserRepository,
    topics: MockTopicRepository,
}

impl Mocks {
    fn into_service(self) -> NewsService {
        NewsService::new(
            Arc::new(self.articles),
            Arc::new(self.comments),
            Arc::new(self.users),
            Arc::new(self.topics),
        )
    }
}

fn created_at() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_542_284_514_171).expect("valid timestamp")
}

fn article(id: i32, votes: i32) -> Article {
    Article {
        article_id: ArticleId::new(id),
        title: "Living in the shadow of a great man".to_owned(),
        body: "I find this existence challenging".to_owned(),
        votes,
        topic: "mitch".to_owned(),
        author: "butter_bridge".to_owned(),
        created_at: created_at(),
    }
}

fn comment(id: i32, article_id: i32) -> Comment {
    Comment {
        comment_id: CommentId::new(id),
        author: "lurker".to_owned(),
        article_id: ArticleId::new(article_id),
        votes: 0,
        created_at: created_at(),
        body: "Nice".to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn fetch_article_returns_detail() {
    let mut mocks = Mocks::default();
    mocks
        .articles
        .expect_find_article()
        .withf(|id| id.get() == 1)
        .times(1)
        .return_once(|_| {
            Ok(Some(ArticleDetail {
                article: article(1, 100),
                comment_count: 13,
            }))
        });

    let detail = mocks
        .into_service()
        .fetch_article_by_id(ArticleId::new(1))
        .await
        .expect("article exists");

    assert_eq!(detail.comment_count, 13);
    assert_eq!(detail.article.votes, 100);
}

#[rstest]
#[tokio::test]
async fn missing_article_is_not_found() {
    let mut mocks = Mocks::default();
    mocks
        .articles
        .expect_find_article()
        .return_once(|_| Ok(None));

    let err = mocks
        .into_service()
        .fetch_article_by_id(ArticleId::new(1000))
        .await
        .expect_err("missing article");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), ARTICLE_NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn empty_listing_is_not_found() {
    let mut mocks = Mocks::default();
    mocks
        .articles
        .expect_list_articles()
        .withf(|query| query.author.as_deref() == Some("nobody"))
        .return_once(|_| Ok(Vec::new()));

    let query = ArticleListQuery {
        author: Some("nobody".to_owned()),
        ..ArticleListQuery::default()
    };
    let err = mocks
        .into_service()
        .list_articles(&query)
        .await
        .expect_err("no articles");

    assert_eq!(err.message(), ARTICLES_NOT_FOUND);
}

#[rstest]
#[case(-100)]
#[case(-200)]
#[case(1)]
#[tokio::test]
async fn article_votes_forward_the_signed_delta_untouched(#[case] delta: i32) {
    let mut mocks = Mocks::default();
    mocks
        .articles
        .expect_increment_votes()
        .times(1)
        .withf(move |id, d| id.get() == 1 && *d == delta)
        .return_once(|_, _| Ok(Some(article(1, -7))));

    let updated = mocks
        .into_service()
        .update_article_votes(ArticleId::new(1), delta)
        .await
        .expect("vote applied");

    assert_eq!(updated, article(1, -7));
}

#[rstest]
#[tokio::test]
async fn empty_comment_page_for_existing_article_is_ok() {
    let mut mocks = Mocks::default();
    mocks
        .comments
        .expect_list_for_article()
        .return_once(|_, _| Ok(Vec::new()));
    mocks
        .articles
        .expect_article_exists()
        .withf(|id| id.get() == 2)
        .times(1)
        .return_once(|_| Ok(true));

    let comments = mocks
        .into_service()
        .fetch_comments_for_article(ArticleId::new(2), &CommentListQuery::default())
        .await
        .expect("article exists");

    assert!(comments.is_empty());
}

#[rstest]
#[tokio::test]
async fn empty_comment_page_for_missing_article_is_not_found() {
    let mut mocks = Mocks::default();
    mocks
        .comments
        .expect_list_for_article()
        .return_once(|_, _| Ok(Vec::new()));
    mocks
        .articles
        .expect_article_exists()
        .return_once(|_| Ok(false));

    let err = mocks
        .into_service()
        .fetch_comments_for_article(ArticleId::new(1000), &CommentListQuery::default())
        .await
        .expect_err("missing article");

    assert_eq!(err.message(), ARTICLE_NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn non_empty_comment_page_skips_existence_check() {
    let mut mocks = Mocks::default();
    mocks
        .comments
        .expect_list_for_article()
        .return_once(|_, _| Ok(vec![comment(1, 1)]));
    mocks.articles.expect_article_exists().never();

    let comments = mocks
        .into_service()
        .fetch_comments_for_article(ArticleId::new(1), &CommentListQuery::default())
        .await
        .expect("comments");

    assert_eq!(comments.len(), 1);
}

#[rstest]
#[tokio::test]
async fn blank_comment_body_is_rejected_before_insert() {
    let mut mocks = Mocks::default();
    mocks.comments.expect_insert().never();

    let err = mocks
        .into_service()
        .create_comment(ArticleId::new(1), "lurker", "   ")
        .await
        .expect_err("blank body");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "Bad request!");
}

#[rstest]
#[tokio::test]
async fn comment_on_missing_article_is_unprocessable() {
    let mut mocks = Mocks::default();
    mocks
        .comments
        .expect_insert()
        .withf(|new| new.article_id().get() == 1000 && new.author().as_str() == "lurker")
        .return_once(|_| {
            Err(NewsPersistenceError::foreign_key_violation(
                "comments_article_id_fkey",
            ))
        });

    let err = mocks
        .into_service()
        .create_comment(ArticleId::new(1000), "lurker", "Hello")
        .await
        .expect_err("missing article");

    assert_eq!(err.code(), ErrorCode::UnprocessableEntity);
    assert_eq!(err.message(), "Unprocessable entity!");
}

#[rstest]
#[tokio::test]
async fn delete_reports_missing_comment() {
    let mut mocks = Mocks::default();
    mocks.comments.expect_delete().return_once(|_| Ok(false));

    let err = mocks
        .into_service()
        .delete_comment(CommentId::new(1000))
        .await
        .expect_err("nothing deleted");

    assert_eq!(err.message(), COMMENT_NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn missing_comment_vote_is_not_found() {
    let mut mocks = Mocks::default();
    mocks
        .comments
        .expect_increment_votes()
        .return_once(|_, _| Ok(None));

    let err = mocks
        .into_service()
        .update_comment_votes(CommentId::new(1000), 1)
        .await
        .expect_err("missing comment");

    assert_eq!(err.message(), COMMENT_NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn unknown_username_is_not_found() {
    let mut mocks = Mocks::default();
    mocks
        .users
        .expect_find_by_username()
        .return_once(|_| Ok(None));

    let username = Username::new("ghost").expect("valid username");
    let err = mocks
        .into_service()
        .fetch_user_by_username(&username)
        .await
        .expect_err("missing user");

    assert_eq!(err.message(), USERNAME_NOT_FOUND);
}

#[rstest]
#[case(NewsPersistenceError::connection("refused"), ErrorCode::InternalError)]
#[case(NewsPersistenceError::query("syntax"), ErrorCode::InternalError)]
#[case(NewsPersistenceError::invalid_input("null body"), ErrorCode::InvalidRequest)]
#[tokio::test]
async fn persistence_failures_map_to_error_codes(
    #[case] failure: NewsPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut mocks = Mocks::default();
    mocks
        .topics
        .expect_list_topics()
        .return_once(move || Err(failure));

    let err = mocks
        .into_service()
        .list_topics()
        .await
        .expect_err("repository failure");

    assert_eq!(err.code(), expected);
}
