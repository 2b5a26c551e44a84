//! Post presenter: one mounted post with its draft and comment thread.
//!
//! All state changes go through [`PostPresenter::handle`], one event at a
//! time. Rendering reads the current state and never mutates it.

use chrono::{DateTime, Utc};
use maud::{html, Markup, Render};
use tracing::debug;

use crate::comments::{CommentId, CommentThread, DraftComment};
use crate::components::{Avatar, Button, Comment, FieldError, Form, TextArea};
use crate::constants::{COMMENT_FIELD, COMMENT_FORM_HEADING, COMMENT_PLACEHOLDER, SUBMIT_LABEL};
use crate::post::{Post, TimestampFormatter};

/// A discrete user interaction on one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    /// The comment field's text changed.
    DraftChanged(String),
    /// The comment field reported a missing required value.
    DraftInvalid,
    /// The comment form was submitted.
    Submit,
    /// The delete action of a comment was used.
    Delete(CommentId),
}

/// What an event did to the presenter's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    DraftUpdated,
    /// Submit accepted; the new comment is at the head of the thread.
    Added(CommentId),
    /// Submit refused because the draft was empty.
    Rejected,
    Deleted(CommentId),
    /// Nothing changed (e.g. delete of an id that is not in the thread).
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct PostPresenter {
    post: Post,
    draft: DraftComment,
    thread: CommentThread,
}

impl PostPresenter {
    /// Mount a post with a freshly seeded thread and an empty draft.
    #[must_use]
    pub fn new(post: Post) -> Self {
        Self {
            post,
            draft: DraftComment::new(),
            thread: CommentThread::new(),
        }
    }

    #[must_use]
    pub fn post(&self) -> &Post {
        &self.post
    }

    #[must_use]
    pub fn draft(&self) -> &DraftComment {
        &self.draft
    }

    #[must_use]
    pub fn thread(&self) -> &CommentThread {
        &self.thread
    }

    /// Forget a previous failed submit, leaving the draft text as is.
    pub fn dismiss_validation(&mut self) {
        self.draft.clear_validation();
    }

    /// URL the comment form posts to.
    #[must_use]
    pub fn comments_action(&self) -> String {
        format!("/post/{}/comments", self.post.id)
    }

    /// URL the delete button of comment `id` posts to.
    #[must_use]
    pub fn delete_action(&self, id: CommentId) -> String {
        format!("/post/{}/comments/{id}/delete", self.post.id)
    }

    /// Fragment anchor of this post in the feed.
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("post-{}", self.post.id)
    }

    /// Apply one event.
    pub fn handle(&mut self, event: PostEvent) -> EventOutcome {
        match event {
            PostEvent::DraftChanged(text) => {
                self.draft.change(text);
                EventOutcome::DraftUpdated
            }
            PostEvent::DraftInvalid => {
                self.draft.mark_required();
                EventOutcome::Rejected
            }
            PostEvent::Submit => match self.draft.take_accepted() {
                Some(comment) => {
                    let id = self.thread.add(comment);
                    debug!(post_id = %self.post.id, comment_id = %id, "Comment added");
                    EventOutcome::Added(id)
                }
                None => {
                    debug!(post_id = %self.post.id, "Empty comment rejected");
                    EventOutcome::Rejected
                }
            },
            PostEvent::Delete(id) => match self.thread.remove_by_id(id) {
                Some(_) => {
                    debug!(post_id = %self.post.id, comment_id = %id, "Comment deleted");
                    EventOutcome::Deleted(id)
                }
                None => EventOutcome::Unchanged,
            },
        }
    }

    /// Render the post as seen at `now`.
    #[must_use]
    pub fn render_at(&self, formatter: &TimestampFormatter, now: DateTime<Utc>) -> Markup {
        html! {
            article class="post" id=(self.anchor()) {
                (self.render_header(formatter, now))
                (self.render_content())
                (self.render_form())
                (self.render_comments())
            }
        }
    }

    fn render_header(&self, formatter: &TimestampFormatter, now: DateTime<Utc>) -> Markup {
        let author = &self.post.author;
        let labels = formatter.labels_at(self.post.publish_date, now);
        html! {
            header class="post-header" {
                div class="author" {
                    (Avatar::new(&author.picture))
                    div class="author-info" {
                        strong { (author.full_name()) }
                        span { (author.title.display()) }
                    }
                }
                time title=(labels.absolute) datetime=(labels.iso) {
                    (labels.relative)
                }
            }
        }
    }

    fn render_content(&self) -> Markup {
        html! {
            div class="post-content" {
                p { (self.post.text) }
                p class="post-tags" {
                    @for tag in &self.post.tags {
                        a href="#" { "#" (tag) }
                    }
                }
            }
        }
    }

    fn render_form(&self) -> Markup {
        let error_id = format!("{}-comment-error", self.anchor());
        let message = self.draft.validation().message();
        let action = self.comments_action();

        let textarea = TextArea::new(COMMENT_FIELD)
            .placeholder(COMMENT_PLACEHOLDER)
            .value(self.draft.text())
            .required()
            .invalid_if(message.is_some())
            .described_by(&error_id);

        let content = html! {
            strong { (COMMENT_FORM_HEADING) }
            (textarea)
            @if let Some(message) = message {
                (FieldError::new(&error_id, message))
            }
            footer {
                (Button::primary(SUBMIT_LABEL)
                    .r#type("submit")
                    .disabled_if(!self.draft.can_submit()))
            }
        };

        Form::post(&action, content).class("comment-form").render()
    }

    fn render_comments(&self) -> Markup {
        html! {
            div class="comment-list" {
                @for comment in self.thread.entries() {
                    (Comment::new(&comment.text, &self.delete_action(comment.id)))
                }
            }
        }
    }
}
