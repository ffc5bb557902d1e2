use crate::e2e::helpers;

use blog_api::infrastructure::config::Environment;
use blog_api::infrastructure::repositories::post_repository::MAX_ROWS_PER_INSERT;
use helpers::assertions::{assert_post_response, assert_stored_post};
use helpers::fake::{generate_post, post_payload};
use helpers::{TestContext, SEED_COUNT};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_seed_posts_before_each_test(ctx: &TestContext) {
    assert_eq!(ctx.seeded.len(), SEED_COUNT);
    assert_eq!(ctx.fixtures.count().await.unwrap(), SEED_COUNT as i64);

    for post in &ctx.seeded {
        assert!(!post.title.trim().is_empty(), "Seeded title should not be empty");
        assert!(!post.author.display_name().is_empty());
    }
}

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_bind_server_to_test_database(ctx: &TestContext) {
    assert_eq!(ctx.config.environment, Environment::Test);
    assert_eq!(
        Some(ctx.config.database_target()),
        ctx.config.test_database_url.as_deref()
    );
}

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_leave_database_empty_after_repeated_teardown(ctx: &TestContext) {
    ctx.fixtures.teardown().await.unwrap();
    assert_eq!(ctx.fixtures.count().await.unwrap(), 0);

    ctx.fixtures.teardown().await.unwrap();
    assert_eq!(ctx.fixtures.count().await.unwrap(), 0);

    let response = ctx.client.get("/posts").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap(), &json!({ "posts": [] }));
}

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_list_exactly_the_seeded_count(ctx: &TestContext) {
    for count in [0, 1, 3] {
        ctx.fixtures.teardown().await.unwrap();
        ctx.fixtures.seed(count).await.unwrap();

        let response = ctx.client.get("/posts").await.unwrap();
        response.assert_status(StatusCode::OK);

        let posts = response.body.as_ref().unwrap()["posts"]
            .as_array()
            .unwrap()
            .len();
        assert_eq!(posts, count, "GET /posts after seeding {} posts", count);
    }
}

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_run_full_crud_scenario(ctx: &TestContext) {
    // List
    let response = ctx.client.get("/posts").await.unwrap();
    response.assert_status(StatusCode::OK);
    let listed = response.body.as_ref().unwrap()["posts"]
        .as_array()
        .unwrap()
        .len();
    assert_eq!(listed, SEED_COUNT);

    // Create
    let new_post = generate_post();
    let response = ctx.client.post("/posts", &post_payload(&new_post)).await.unwrap();
    response.assert_status(StatusCode::CREATED).assert_json();
    let body = response.body.as_ref().unwrap();
    assert_post_response(body, &new_post);

    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
    let stored = ctx.fixtures.find_by_id(id).await.unwrap().unwrap();
    assert_stored_post(&stored, &new_post);

    // Update
    let response = ctx
        .client
        .put(
            &format!("/posts/{}", id),
            &json!({ "id": id.to_string(), "title": "Updated Title" }),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let stored = ctx.fixtures.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Updated Title");
    assert_eq!(stored.content, new_post.content);
    assert_eq!(stored.author.0, new_post.author);

    // Delete
    let response = ctx.client.delete(&format!("/posts/{}", id)).await.unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    assert!(ctx.fixtures.find_by_id(id).await.unwrap().is_none());
    assert_eq!(ctx.fixtures.count().await.unwrap(), SEED_COUNT as i64);
}

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_seed_more_posts_than_fit_in_one_statement(ctx: &TestContext) {
    let count = MAX_ROWS_PER_INSERT + 93;

    ctx.fixtures.teardown().await.unwrap();
    let seeded = ctx.fixtures.seed(count).await.unwrap();

    assert_eq!(seeded.len(), count);
    assert_eq!(ctx.fixtures.count().await.unwrap(), count as i64);
}
