//! End-to-end handler tests over the in-memory store.

use std::sync::Arc;

use actix_web::http::{Method, StatusCode};
use actix_web::{dev::ServiceResponse, test};
use chrono::{DateTime, FixedOffset};
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ports::{MockTopicRepository, NewsPersistenceError};
use crate::domain::{
    ARTICLE_NOT_FOUND, ARTICLES_NOT_FOUND, BAD_REQUEST, COMMENT_NOT_FOUND, CommentId,
    INTERNAL_SERVER_ERROR, METHOD_NOT_FOUND, ROUTE_NOT_FOUND, TRACE_ID_HEADER,
    UNPROCESSABLE_ENTITY, USERNAME_NOT_FOUND,
};
use crate::inbound::http::endpoints::ENDPOINTS;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::test_utils::{seeded_state, test_app};
use crate::test_support::InMemoryNewsStore;

async fn send(request: test::TestRequest) -> ServiceResponse {
    let (state, _store) = seeded_state();
    let app = test::init_service(test_app(state)).await;
    test::call_service(&app, request.to_request()).await
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let res = send(test::TestRequest::get().uri(uri)).await;
    let status = res.status();
    (status, test::read_body_json(res).await)
}

fn ids(items: &Value, key: &str) -> Vec<i64> {
    items
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item[key].as_i64().expect("integer id"))
        .collect()
}

#[actix_web::test]
async fn api_serves_the_endpoint_catalogue() {
    let (status, body) = get_json("/api").await;
    assert_eq!(status, StatusCode::OK);
    let catalogue = body.as_object().expect("object");
    assert_eq!(catalogue.len(), ENDPOINTS.len());
    assert!(catalogue.contains_key("DELETE /api/comments/{comment_id}"));
}

#[actix_web::test]
async fn every_catalogue_entry_is_routed() {
    for endpoint in ENDPOINTS {
        let uri = endpoint
            .path
            .replace("{article_id}", "1")
            .replace("{comment_id}", "1")
            .replace("{username}", "butter_bridge");
        let method = Method::from_bytes(endpoint.method.as_bytes()).expect("http method");
        let mut request = test::TestRequest::default().method(method.clone()).uri(&uri);
        if method == Method::PATCH {
            request = request.set_json(json!({ "inc_votes": 1 }));
        } else if method == Method::POST {
            request = request.set_json(json!({ "username": "lurker", "body": "hello" }));
        }
        let res = send(request).await;
        assert!(
            res.status().is_success(),
            "{} answered {}",
            endpoint.key(),
            res.status()
        );
    }
}

#[actix_web::test]
async fn topics_are_listed() {
    let (status, body) = get_json("/api/topics").await;
    assert_eq!(status, StatusCode::OK);
    let topics = body["topics"].as_array().expect("topics array");
    assert_eq!(topics.len(), 3);
    for topic in topics {
        assert!(topic["slug"].is_string());
        assert!(topic["description"].is_string());
    }
}

#[rstest]
#[case("/api/users/butter_bridge", StatusCode::OK)]
#[case("/api/users/nobody", StatusCode::NOT_FOUND)]
#[case("/api/users/%20", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn users_are_fetched_by_username(#[case] uri: &str, #[case] expected: StatusCode) {
    let (status, body) = get_json(uri).await;
    assert_eq!(status, expected);
    if expected == StatusCode::OK {
        assert_eq!(
            body["user"],
            json!({
                "username": "butter_bridge",
                "name": "jonny",
                "avatar_url": "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg"
            })
        );
    } else {
        assert_eq!(body["msg"], json!(USERNAME_NOT_FOUND));
    }
}

#[actix_web::test]
async fn article_includes_its_comment_count() {
    let (status, body) = get_json("/api/articles/1").await;
    assert_eq!(status, StatusCode::OK);
    let article = &body["article"];
    assert_eq!(article["article_id"], json!(1));
    assert_eq!(article["title"], json!("Living in the shadow of a great man"));
    assert_eq!(article["votes"], json!(100));
    assert_eq!(article["comment_count"], json!(13));
    assert_eq!(article["created_at"], json!("2018-11-15T12:21:54.171Z"));
}

#[rstest]
#[case("/api/articles/1000", StatusCode::NOT_FOUND, ARTICLE_NOT_FOUND)]
#[case("/api/articles/dog", StatusCode::BAD_REQUEST, BAD_REQUEST)]
#[case("/api/articles/1000/comments", StatusCode::NOT_FOUND, ARTICLE_NOT_FOUND)]
#[case("/api/articles/dog/comments", StatusCode::BAD_REQUEST, BAD_REQUEST)]
#[case("/api/articles?topic=paper", StatusCode::NOT_FOUND, ARTICLES_NOT_FOUND)]
#[case("/api/articles?author=lurker", StatusCode::NOT_FOUND, ARTICLES_NOT_FOUND)]
#[case("/api/articles?sort_by=nope", StatusCode::BAD_REQUEST, BAD_REQUEST)]
#[case("/api/articles?order=sideways", StatusCode::BAD_REQUEST, BAD_REQUEST)]
#[case("/api/articles/1/comments?limit=0", StatusCode::BAD_REQUEST, BAD_REQUEST)]
#[case("/api/articles/1/comments?p=cat", StatusCode::BAD_REQUEST, BAD_REQUEST)]
#[case("/api/articles/1/comments?sort_by=title", StatusCode::BAD_REQUEST, BAD_REQUEST)]
#[actix_web::test]
async fn read_failures_carry_their_message(
    #[case] uri: &str,
    #[case] expected: StatusCode,
    #[case] message: &str,
) {
    let (status, body) = get_json(uri).await;
    assert_eq!(status, expected);
    assert_eq!(body["msg"], json!(message));
    assert!(body["traceId"].is_string());
}

#[rstest]
#[case("", &[12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1])]
#[case("?order=desc", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12])]
#[case("?sort_by=title&order=desc", &[7, 5, 9, 4, 2, 10, 12, 1, 3, 8, 11, 6])]
#[case("?author=rogersop&sort_by=article_id", &[4, 5, 10])]
#[case("?topic=cats", &[5])]
#[actix_web::test]
async fn articles_are_filtered_and_sorted(#[case] query: &str, #[case] expected: &[i64]) {
    let (status, body) = get_json(&format!("/api/articles{query}")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = ids(&body["articles"], "article_id");
    assert_eq!(&listed[..expected.len()], expected);
}

#[actix_web::test]
async fn articles_sort_by_comment_count() {
    let (status, body) = get_json("/api/articles?sort_by=comment_count&order=desc").await;
    assert_eq!(status, StatusCode::OK);
    let articles = body["articles"].as_array().expect("articles");
    let counts: Vec<i64> = articles
        .iter()
        .map(|article| article["comment_count"].as_i64().expect("count"))
        .collect();
    assert_eq!(counts.first(), Some(&13));
    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
}

/// Comparable value of one article column as rendered in JSON.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Number(i64),
    Text(String),
    Time(DateTime<FixedOffset>),
}

fn sort_key(article: &Value, column: &str) -> SortKey {
    let value = &article[column];
    match column {
        "created_at" => SortKey::Time(
            DateTime::parse_from_rfc3339(value.as_str().expect("timestamp string"))
                .expect("RFC 3339 timestamp"),
        ),
        "author" | "title" | "topic" => SortKey::Text(value.as_str().expect("text").to_owned()),
        _ => SortKey::Number(value.as_i64().expect("integer column")),
    }
}

#[rstest]
#[actix_web::test]
async fn every_article_sort_column_orders_the_page(
    #[values(
        "author",
        "title",
        "article_id",
        "topic",
        "created_at",
        "votes",
        "comment_count"
    )]
    column: &str,
    #[values("asc", "desc")] order: &str,
) {
    let (status, body) = get_json(&format!("/api/articles?sort_by={column}&order={order}")).await;
    assert_eq!(status, StatusCode::OK);

    let articles = body["articles"].as_array().expect("articles");
    assert_eq!(articles.len(), 12);
    let keys: Vec<SortKey> = articles.iter().map(|article| sort_key(article, column)).collect();
    let sorted = keys.windows(2).all(|pair| match order {
        "asc" => pair[0] <= pair[1],
        _ => pair[0] >= pair[1],
    });
    assert!(sorted, "articles not {order} by {column}: {keys:?}");
}

#[rstest]
#[case("", &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11])]
#[case("?limit=5&p=3", &[12, 13, 18])]
#[case("?sort_by=votes&order=asc&limit=3", &[4, 5, 6])]
#[case("?sort_by=comment_id&order=asc&limit=2&p=2", &[4, 5])]
#[actix_web::test]
async fn comments_are_sorted_and_paginated(#[case] query: &str, #[case] expected: &[i64]) {
    let (status, body) = get_json(&format!("/api/articles/1/comments{query}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["comments"], "comment_id"), expected);
}

#[actix_web::test]
async fn article_without_comments_returns_an_empty_list() {
    let (status, body) = get_json("/api/articles/2/comments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "comments": [] }));
}

#[actix_web::test]
async fn article_votes_are_plain_signed_increments() {
    let (state, _store) = seeded_state();
    let app = test::init_service(test_app(state)).await;

    let patch = |delta: i32| {
        test::TestRequest::patch()
            .uri("/api/articles/1")
            .set_json(json!({ "inc_votes": delta }))
            .to_request()
    };
    let up: Value = test::call_and_read_body_json(&app, patch(1)).await;
    assert_eq!(up["article"]["votes"], json!(101));
    assert!(up["article"].get("comment_count").is_none());

    let down: Value = test::call_and_read_body_json(&app, patch(-100)).await;
    assert_eq!(down["article"]["votes"], json!(1));

    let below_zero: Value = test::call_and_read_body_json(&app, patch(-5)).await;
    assert_eq!(below_zero["article"]["votes"], json!(-4));
}

#[actix_web::test]
async fn cancelling_all_votes_leaves_zero() {
    let (state, _store) = seeded_state();
    let app = test::init_service(test_app(state)).await;

    let request = test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "inc_votes": -100 }))
        .to_request();
    let patched: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(patched["article"]["votes"], json!(0));

    let request = test::TestRequest::get().uri("/api/articles/1").to_request();
    let fetched: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(fetched["article"]["votes"], json!(0));
}

#[rstest]
#[case("/api/articles/1", json!({}), StatusCode::BAD_REQUEST)]
#[case("/api/articles/1", json!({ "inc_votes": "cat" }), StatusCode::BAD_REQUEST)]
#[case("/api/articles/1", json!({ "inc_votes": 1, "name": "Mitch" }), StatusCode::BAD_REQUEST)]
#[case("/api/articles/dog", json!({ "inc_votes": 1 }), StatusCode::BAD_REQUEST)]
#[case("/api/articles/1000", json!({ "inc_votes": 1 }), StatusCode::NOT_FOUND)]
#[case("/api/comments/1", json!({ "inc_votes": "cat" }), StatusCode::BAD_REQUEST)]
#[case("/api/comments/1000", json!({ "inc_votes": 1 }), StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn vote_updates_validate_their_input(
    #[case] uri: &str,
    #[case] payload: Value,
    #[case] expected: StatusCode,
) {
    let res = send(test::TestRequest::patch().uri(uri).set_json(payload)).await;
    assert_eq!(res.status(), expected);
}

#[actix_web::test]
async fn comment_votes_return_the_bare_comment() {
    let res = send(
        test::TestRequest::patch()
            .uri("/api/comments/1")
            .set_json(json!({ "inc_votes": 1 })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["comment_id"], json!(1));
    assert_eq!(body["votes"], json!(17));
}

#[actix_web::test]
async fn posted_comments_are_created() {
    let res = send(
        test::TestRequest::post()
            .uri("/api/articles/2/comments")
            .set_json(json!({ "username": "lurker", "body": "First!" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    let comment = &body["comment"];
    assert_eq!(comment["comment_id"], json!(19));
    assert_eq!(comment["author"], json!("lurker"));
    assert_eq!(comment["article_id"], json!(2));
    assert_eq!(comment["votes"], json!(0));
    assert_eq!(comment["body"], json!("First!"));
    assert!(comment["created_at"].is_string());
}

#[rstest]
#[case("/api/articles/1000/comments", json!({ "username": "lurker", "body": "hi" }), StatusCode::UNPROCESSABLE_ENTITY)]
#[case("/api/articles/1/comments", json!({ "username": "nobody", "body": "hi" }), StatusCode::UNPROCESSABLE_ENTITY)]
#[case("/api/articles/1/comments", json!({ "username": "lurker" }), StatusCode::BAD_REQUEST)]
#[case("/api/articles/1/comments", json!({ "username": "lurker", "body": "  " }), StatusCode::BAD_REQUEST)]
#[case("/api/articles/dog/comments", json!({ "username": "lurker", "body": "hi" }), StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn rejected_comments(#[case] uri: &str, #[case] payload: Value, #[case] expected: StatusCode) {
    let res = send(test::TestRequest::post().uri(uri).set_json(payload)).await;
    assert_eq!(res.status(), expected);
    let body: Value = test::read_body_json(res).await;
    let message = if expected == StatusCode::UNPROCESSABLE_ENTITY {
        UNPROCESSABLE_ENTITY
    } else {
        BAD_REQUEST
    };
    assert_eq!(body["msg"], json!(message));
}

#[actix_web::test]
async fn deleting_a_comment_removes_it_once() {
    let (state, store) = seeded_state();
    let app = test::init_service(test_app(state)).await;
    let delete = || test::TestRequest::delete().uri("/api/comments/1").to_request();

    let first = test::call_service(&app, delete()).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(first).await.is_empty());
    assert!(store.comment(CommentId::new(1)).is_none());

    let second = test::call_service(&app, delete()).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(second).await;
    assert_eq!(body["msg"], json!(COMMENT_NOT_FOUND));
}

#[rstest]
#[case(Method::PUT, "/api/topics")]
#[case(Method::POST, "/api")]
#[case(Method::DELETE, "/api/articles/1")]
#[case(Method::PUT, "/api/articles/1/comments")]
#[case(Method::GET, "/api/comments/1")]
#[case(Method::POST, "/api/users/butter_bridge")]
#[actix_web::test]
async fn unsupported_methods_are_rejected(#[case] method: Method, #[case] uri: &str) {
    let res = send(test::TestRequest::default().method(method).uri(uri)).await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["msg"], json!(METHOD_NOT_FOUND));
}

#[rstest]
#[case("/api/not-a-route")]
#[case("/api/articles/1/authors")]
#[case("/")]
#[actix_web::test]
async fn unknown_paths_are_not_found(#[case] uri: &str) {
    let res = send(test::TestRequest::get().uri(uri)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["msg"], json!(ROUTE_NOT_FOUND));
    assert_eq!(body["traceId"].as_str().map(str::to_owned), header);
}

#[actix_web::test]
async fn lost_database_connection_is_redacted() {
    const SECRET: &str = "password=hunter2 host=db.internal";

    let store = Arc::new(InMemoryNewsStore::seeded());
    let mut topics = MockTopicRepository::new();
    topics
        .expect_list_topics()
        .return_once(|| Err(NewsPersistenceError::connection(SECRET)));
    let state = HttpState::new(HttpStatePorts {
        articles: store.clone(),
        comments: store.clone(),
        users: store,
        topics: Arc::new(topics),
    });
    let app = test::init_service(test_app(state)).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/topics").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(res).await;
    let text = std::str::from_utf8(&body).expect("utf-8 body");
    assert!(!text.contains("hunter2"), "secret leaked: {text}");
    let json: Value = serde_json::from_str(text).expect("json body");
    assert_eq!(json["msg"], json!(INTERNAL_SERVER_ERROR));
}
