//! Form components for maud templates.
//!
//! This module provides the form pieces the comment form is built from,
//! matching the styles defined in `static/css/style.css`.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    /// Optional CSS class
    pub class: Option<&'a str>,
}

impl<'a> Form<'a> {
    /// Create a new form with the given action and method.
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            class: None,
        }
    }

    /// Create a POST form.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self::new(action, "post", content)
    }

    /// Set the CSS class.
    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) class=[self.class] {
                (self.content)
            }
        }
    }
}

/// A textarea element.
#[derive(Debug, Clone)]
pub struct TextArea<'a> {
    /// Textarea name attribute
    pub name: &'a str,
    /// Current value/content
    pub value: Option<&'a str>,
    /// Placeholder text
    pub placeholder: Option<&'a str>,
    /// Whether the field is required
    pub required: bool,
    /// Whether the field is currently marked invalid
    pub invalid: bool,
    /// ID of the element describing the field (error message)
    pub described_by: Option<&'a str>,
}

impl<'a> TextArea<'a> {
    /// Create a new textarea with the given name.
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            value: None,
            placeholder: None,
            required: false,
            invalid: false,
            described_by: None,
        }
    }

    /// Set the value/content.
    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Mark as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark as invalid (`aria-invalid="true"`).
    #[must_use]
    pub fn invalid_if(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Point `aria-describedby` at an element ID.
    #[must_use]
    pub fn described_by(mut self, id: &'a str) -> Self {
        self.described_by = Some(id);
        self
    }
}

impl Render for TextArea<'_> {
    fn render(&self) -> Markup {
        html! {
            textarea
                name=(self.name)
                placeholder=[self.placeholder]
                required[self.required]
                aria-invalid=[self.invalid.then_some("true")]
                aria-describedby=[self.described_by]
            {
                @if let Some(value) = self.value {
                    (value)
                }
            }
        }
    }
}

/// Inline validation message shown under a field.
#[derive(Debug, Clone)]
pub struct FieldError<'a> {
    pub id: &'a str,
    pub message: &'a str,
}

impl<'a> FieldError<'a> {
    #[must_use]
    pub fn new(id: &'a str, message: &'a str) -> Self {
        Self { id, message }
    }
}

impl Render for FieldError<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="field-error" id=(self.id) role="alert" {
                (self.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_form() {
        let form = Form::post("/post/1/comments", html! { "x" }).class("comment-form");
        let html = form.render().into_string();

        assert!(html.contains(r#"action="/post/1/comments""#));
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"class="comment-form""#));
    }

    #[test]
    fn test_textarea() {
        let textarea = TextArea::new("comment")
            .placeholder("Deixe um comentário")
            .required()
            .value("Hello world");
        let html = textarea.render().into_string();

        assert!(html.contains(r#"name="comment""#));
        assert!(html.contains(r#"placeholder="Deixe um comentário""#));
        assert!(html.contains("required"));
        assert!(html.contains(">Hello world</textarea>"));
        assert!(!html.contains("aria-invalid"));
    }

    #[test]
    fn test_textarea_invalid() {
        let html = TextArea::new("comment")
            .invalid_if(true)
            .described_by("err")
            .render()
            .into_string();

        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(html.contains(r#"aria-describedby="err""#));
    }

    #[test]
    fn test_textarea_escapes_value() {
        let html = TextArea::new("comment")
            .value("</textarea><script>")
            .render()
            .into_string();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_field_error() {
        let html = FieldError::new("e1", "Este campo é obrigatório!")
            .render()
            .into_string();
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Este campo é obrigatório!"));
    }
}
