//! Integration tests for web routes.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use feed_post::config::Config;
use feed_post::feed::Feed;
use feed_post::post::Locale;
use feed_post::web::{create_app, AppState};
use tower::ServiceExt;

const POSTS: &str = r#"[
    {
        "id": "p1",
        "author": {"id": "a1", "firstName": "Diego", "lastName": "Fernandes", "title": "dr", "picture": "https://github.com/diego3g.png"},
        "text": "Fala galeraa",
        "tags": ["novoprojeto", "nlw"],
        "publishDate": "2022-05-03T10:00:00Z"
    },
    {
        "id": "p2",
        "author": {"id": "a2", "firstName": "Mayk", "lastName": "Brito", "title": "", "picture": "https://github.com/maykbrito.png"},
        "text": "Acabei de subir mais um projeto",
        "tags": [],
        "publishDate": "2022-05-10T20:00:00Z"
    }
]"#;

fn test_config() -> Config {
    Config {
        web_host: "127.0.0.1".to_string(),
        web_port: 0,
        static_dir: None,
        posts_path: PathBuf::from("unused.json"),
        locale: Locale::PtBr,
        utc_offset: chrono::FixedOffset::east_opt(0).unwrap(),
    }
}

fn setup() -> (AppState, Router) {
    let feed = Feed::from_json(POSTS).expect("Failed to parse posts");
    let state = AppState::new(test_config(), feed);
    let app = create_app(state.clone());
    (state, app)
}

async fn body_string(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn thread_texts(state: &AppState, post_id: &str) -> Vec<String> {
    let feed = state.feed.lock().await;
    feed.get(post_id)
        .unwrap()
        .thread()
        .texts()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_state, app) = setup();

    let response = app.oneshot(get("/healthz")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn test_feed_page_lists_posts_with_seed_comment() {
    let (_state, app) = setup();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains(r#"id="post-p1""#));
    assert!(html.contains(r#"id="post-p2""#));
    assert!(html.contains(r#"title="3 de maio às 10:00h""#));
    assert_eq!(html.matches("Post massinha demais, hein?!").count(), 2);
}

#[tokio::test]
async fn test_post_page_not_found() {
    let (_state, app) = setup();

    let response = app.oneshot(get("/post/missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_then_delete_comment() {
    let (state, app) = setup();

    let response = app
        .clone()
        .oneshot(post_form("/post/p1/comments", "comment=%C3%B3timo+post%21"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/#post-p1");
    assert_eq!(
        thread_texts(&state, "p1").await,
        vec!["ótimo post!", "Post massinha demais, hein?!"]
    );
    {
        let feed = state.feed.lock().await;
        assert_eq!(feed.get("p1").unwrap().draft().text(), "");
    }

    // the other post is untouched
    assert_eq!(thread_texts(&state, "p2").await, vec!["Post massinha demais, hein?!"]);

    let html = body_string(app.clone().oneshot(get("/post/p1")).await.unwrap()).await;
    let new_pos = html.find("ótimo post!").unwrap();
    let seed_pos = html.find("Post massinha demais").unwrap();
    assert!(new_pos < seed_pos);

    // seed is id 1, the new comment id 2
    let response = app
        .oneshot(post_form("/post/p1/comments/2/delete", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(thread_texts(&state, "p1").await, vec!["Post massinha demais, hein?!"]);
}

#[tokio::test]
async fn test_empty_submit_shows_required_message() {
    let (state, app) = setup();

    let response = app
        .oneshot(post_form("/post/p1/comments", "comment="))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(response).await;
    assert!(html.contains("Este campo é obrigatório!"));
    assert!(html.contains(r#"aria-invalid="true""#));
    assert_eq!(thread_texts(&state, "p1").await, vec!["Post massinha demais, hein?!"]);
}

#[tokio::test]
async fn test_required_message_not_shown_to_later_visitors() {
    let (_state, app) = setup();

    let response = app
        .clone()
        .oneshot(post_form("/post/p1/comments", "comment="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    for uri in ["/", "/post/p1"] {
        let html = body_string(app.clone().oneshot(get(uri)).await.unwrap()).await;
        assert!(!html.contains("Este campo é obrigatório!"), "{uri}");
        assert!(!html.contains(r#"aria-invalid="true""#), "{uri}");
    }
}

#[tokio::test]
async fn test_missing_comment_field_is_treated_as_empty() {
    let (state, app) = setup();

    let response = app
        .oneshot(post_form("/post/p1/comments", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(thread_texts(&state, "p1").await.len(), 1);
}

#[tokio::test]
async fn test_duplicate_text_comments_deleted_one_at_a_time() {
    let (state, app) = setup();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_form("/post/p2/comments", "comment=igual"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    // ids: seed 1, first "igual" 2, second "igual" 3
    app.oneshot(post_form("/post/p2/comments/2/delete", ""))
        .await
        .unwrap();

    assert_eq!(
        thread_texts(&state, "p2").await,
        vec!["igual", "Post massinha demais, hein?!"]
    );
}

#[tokio::test]
async fn test_delete_absent_comment_is_noop() {
    let (state, app) = setup();

    let response = app
        .oneshot(post_form("/post/p1/comments/99/delete", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(thread_texts(&state, "p1").await, vec!["Post massinha demais, hein?!"]);
}

#[tokio::test]
async fn test_comment_routes_unknown_post() {
    let (_state, app) = setup();

    let response = app
        .clone()
        .oneshot(post_form("/post/nope/comments", "comment=oi"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(post_form("/post/nope/comments/1/delete", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
