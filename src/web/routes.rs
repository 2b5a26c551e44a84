//! HTML routes for the feed, single posts, and comment actions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Form;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;

use super::templates;
use super::AppState;
use crate::comments::CommentId;
use crate::presenter::{EventOutcome, PostEvent};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feed_page))
        .route("/post/:id", get(post_page))
        .route("/post/:id/comments", post(submit_comment))
        .route("/post/:id/comments/:comment_id/delete", post(delete_comment))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

async fn feed_page(State(state): State<AppState>) -> Response {
    let feed = state.feed.lock().await;
    let html = templates::render_feed_page(&feed, &state.formatter, Utc::now());
    Html(html.into_string()).into_response()
}

async fn post_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let feed = state.feed.lock().await;
    let Some(presenter) = feed.get(&id) else {
        return (StatusCode::NOT_FOUND, "Post not found").into_response();
    };

    let html = templates::render_post_page(presenter, &state.formatter, Utc::now());
    Html(html.into_string()).into_response()
}

async fn health() -> &'static str {
    "OK"
}

// ========== Comment Routes ==========

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    comment: String,
}

/// Handler for the comment form (POST /post/:id/comments).
///
/// The submitted text becomes the draft, then the submit event runs. An
/// accepted comment redirects back to the post in the feed; an empty one
/// re-renders the post with the required-field message.
async fn submit_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<CommentForm>,
) -> Response {
    let mut feed = state.feed.lock().await;
    let Some(presenter) = feed.get_mut(&id) else {
        return (StatusCode::NOT_FOUND, "Post not found").into_response();
    };

    presenter.handle(PostEvent::DraftChanged(form.comment));
    match presenter.handle(PostEvent::Submit) {
        EventOutcome::Added(comment_id) => {
            tracing::info!(post_id = %id, comment_id = %comment_id, "Comment published");
            Redirect::to(&format!("/#{}", presenter.anchor())).into_response()
        }
        _ => {
            // Only this response shows the message; other visitors see a clean form.
            let html = templates::render_post_page(presenter, &state.formatter, Utc::now());
            presenter.dismiss_validation();
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html.into_string())).into_response()
        }
    }
}

/// Handler for deleting a comment (POST /post/:id/comments/:comment_id/delete).
///
/// Deleting an id that is no longer in the thread is not an error.
async fn delete_comment(
    State(state): State<AppState>,
    Path((id, comment_id)): Path<(String, u64)>,
) -> Response {
    let mut feed = state.feed.lock().await;
    let Some(presenter) = feed.get_mut(&id) else {
        return (StatusCode::NOT_FOUND, "Post not found").into_response();
    };

    let comment_id = CommentId::new(comment_id);
    if presenter.handle(PostEvent::Delete(comment_id)) == EventOutcome::Deleted(comment_id) {
        tracing::info!(post_id = %id, comment_id = %comment_id, "Comment deleted");
    } else {
        tracing::debug!(post_id = %id, comment_id = %comment_id, "Delete of absent comment ignored");
    }

    Redirect::to(&format!("/#{}", presenter.anchor())).into_response()
}
