//! Full-page templates for the feed host.

use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::components::BaseLayout;
use crate::feed::Feed;
use crate::post::TimestampFormatter;
use crate::presenter::PostPresenter;

/// Render the feed page with every mounted post.
#[must_use]
pub fn render_feed_page(feed: &Feed, formatter: &TimestampFormatter, now: DateTime<Utc>) -> Markup {
    let content = html! {
        @if feed.is_empty() {
            p class="empty-state" { "Nenhum post por aqui." }
        } @else {
            (feed.render_at(formatter, now))
        }
    };
    BaseLayout::new("Feed", formatter.locale()).render(content)
}

/// Render a page holding a single post.
#[must_use]
pub fn render_post_page(
    presenter: &PostPresenter,
    formatter: &TimestampFormatter,
    now: DateTime<Utc>,
) -> Markup {
    let title = presenter.post().author.full_name();
    BaseLayout::new(&title, formatter.locale()).render(presenter.render_at(formatter, now))
}
