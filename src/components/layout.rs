//! Base layout components for the web UI.
//!
//! This module provides the page skeleton the feed is rendered into:
//! the HTML head, the site header, and the main feed column.

use maud::{html, Markup, DOCTYPE};

use crate::post::Locale;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("Feed", Locale::PtBr).render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    locale: Locale,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title and locale.
    #[must_use]
    pub fn new(title: &'a str, locale: Locale) -> Self {
        Self { title, locale }
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="feed">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang=(self.locale.tag()) {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) " - Feed" }
                    link rel="stylesheet" href="/static/css/style.css";
                }
                body {
                    (Self::render_header())
                    div class="wrapper" {
                        main class="feed" {
                            (content)
                        }
                    }
                    script src="/static/js/comment-form.js" {}
                }
            }
        }
    }

    /// Render the site header.
    fn render_header() -> Markup {
        html! {
            header class="site-header" {
                a href="/" {
                    strong class="site-logo" { "Feed" }
                }
            }
        }
    }
}
