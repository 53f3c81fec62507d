//! Integration tests for post submission and random viewing.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_submit_requires_login() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/submit", &[]).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/auth/login"));

    // The gated handler never runs; nothing is stored.
    let response = app
        .post_form("/submit", &[("author", "x"), ("message", "hi")], &[])
        .await;
    assert_eq!(response.location(), Some("/auth/login"));
    assert_eq!(app.post_count().await, 0);
}

#[tokio::test]
async fn test_submit_stores_post_with_blank_author() {
    let app = helpers::TestApp::new().await;
    let cookies = app.register_and_login("alice", "pw1").await;

    let response = app
        .post_form("/submit", &[("author", ""), ("message", "hello")], &cookies)
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let (author, body): (String, String) =
        sqlx::query_as("SELECT author, body FROM posts")
            .fetch_one(&app.db_pool)
            .await
            .expect("Failed to fetch post");
    assert_eq!(author, "");
    assert_eq!(body, "hello");

    let response = app.get("/", &cookies).await;
    assert!(response.body.contains("hello"));
}

#[tokio::test]
async fn test_submit_blank_message_is_flashed_not_stored() {
    let app = helpers::TestApp::new().await;
    let cookies = app.register_and_login("alice", "pw1").await;

    let response = app
        .post_form("/submit", &[("author", "alice"), ("message", "")], &cookies)
        .await;
    assert_eq!(response.location(), Some("/"));
    assert_eq!(app.post_count().await, 0);

    let mut cookies = cookies;
    cookies.extend(response.cookies());
    let response = app.get("/", &cookies).await;
    assert!(response.body.contains("Message is required."));
}

#[tokio::test]
async fn test_index_lists_all_posts() {
    let app = helpers::TestApp::new().await;
    let cookies = app.register_and_login("alice", "pw1").await;

    for body in ["first", "second", "third"] {
        app.post_form("/submit", &[("author", "alice"), ("message", body)], &cookies)
            .await;
    }

    let response = app.get("/", &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("first"));
    assert!(response.body.contains("second"));
    assert!(response.body.contains("third"));
}

#[tokio::test]
async fn test_randomview_returns_all_when_store_is_smaller() {
    let app = helpers::TestApp::new().await;
    let cookies = app.register_and_login("alice", "pw1").await;

    app.post_form("/submit", &[("author", "alice"), ("message", "apple")], &cookies)
        .await;
    app.post_form("/submit", &[("author", "bob"), ("message", "banana")], &cookies)
        .await;

    let response = app.get("/randomview?num_messages=5", &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.matches("apple").count(), 1);
    assert_eq!(response.body.matches("banana").count(), 1);
}

#[tokio::test]
async fn test_randomview_respects_requested_count() {
    let app = helpers::TestApp::new().await;
    let cookies = app.register_and_login("alice", "pw1").await;

    for i in 0..5 {
        app.post_form(
            "/submit",
            &[("author", "alice"), ("message", &format!("entry{i}"))],
            &cookies,
        )
        .await;
    }

    let response = app.get("/randomview?num_messages=2", &[]).await;
    assert_eq!(response.status, StatusCode::OK);

    let shown = (0..5)
        .filter(|i| response.body.contains(&format!("entry{i}")))
        .count();
    assert_eq!(shown, 2);
}

#[tokio::test]
async fn test_view_redirects_to_randomview() {
    let app = helpers::TestApp::new().await;

    let response = app.post_form("/view", &[("num", "3")], &[]).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/randomview?num_messages=3"));
}

#[tokio::test]
async fn test_view_blank_count_is_flashed() {
    let app = helpers::TestApp::new().await;

    let response = app.post_form("/view", &[("num", "")], &[]).await;
    assert_eq!(response.location(), Some("/view"));

    let response = app.get("/view", &response.cookies()).await;
    assert!(response.body.contains("Number is required."));
}

#[tokio::test]
async fn test_view_rejects_non_positive_count() {
    let app = helpers::TestApp::new().await;

    for bad in ["0", "-2", "abc"] {
        let response = app.post_form("/view", &[("num", bad)], &[]).await;
        assert_eq!(response.location(), Some("/view"), "num={bad}");

        let response = app.get("/view", &response.cookies()).await;
        assert!(response.body.contains("Number must be a positive integer."));
    }
}

#[tokio::test]
async fn test_randomview_rejects_bad_count() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/randomview?num_messages=abc", &[]).await;
    assert_eq!(response.location(), Some("/view"));
    let response = app.get("/view", &response.cookies()).await;
    assert!(response.body.contains("Number must be a positive integer."));

    let response = app.get("/randomview?num_messages=0", &[]).await;
    assert_eq!(response.location(), Some("/view"));

    let response = app.get("/randomview", &[]).await;
    assert_eq!(response.location(), Some("/view"));
    let response = app.get("/view", &response.cookies()).await;
    assert!(response.body.contains("Number is required."));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/health", &[]).await;
    assert_eq!(response.status, StatusCode::OK);

    let body: serde_json::Value =
        serde_json::from_str(&response.body).expect("Health body is not JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
}
