//! A single comment line with its delete action.

use maud::{html, Markup, Render};

use super::button::Button;
use super::form::Form;

/// Renders one comment. The delete button posts to `delete_action`, which
/// identifies the comment by id rather than by its text.
#[derive(Debug, Clone)]
pub struct Comment<'a> {
    pub content: &'a str,
    pub delete_action: &'a str,
}

impl<'a> Comment<'a> {
    #[must_use]
    pub fn new(content: &'a str, delete_action: &'a str) -> Self {
        Self {
            content,
            delete_action,
        }
    }
}

impl Render for Comment<'_> {
    fn render(&self) -> Markup {
        let delete = Form::post(
            self.delete_action,
            html! {
                (Button::ghost("×")
                    .r#type("submit")
                    .title("Deletar comentário")
                    .class("comment-delete"))
            },
        )
        .class("comment-delete-form");

        html! {
            div class="comment" {
                div class="comment-box" {
                    p class="comment-content" { (self.content) }
                    (delete)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_renders_content_and_delete_action() {
        let html = Comment::new("ótimo post!", "/post/p1/comments/3/delete")
            .render()
            .into_string();

        assert!(html.contains("ótimo post!"));
        assert!(html.contains(r#"action="/post/p1/comments/3/delete""#));
        assert!(html.contains(r#"title="Deletar comentário""#));
    }

    #[test]
    fn test_comment_content_is_plain_text() {
        let html = Comment::new("<b>bold</b>", "/x").render().into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
