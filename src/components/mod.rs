//! Maud HTML components for rendering posts.
//!
//! - `layout`: Base page layout
//! - `avatar`: Author picture
//! - `button`: Submit and icon buttons
//! - `comment`: One comment line with its delete action
//! - `form`: Form, textarea and inline validation message
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{Avatar, BaseLayout, Comment};
//!
//! fn page() -> Markup {
//!     let content = html! {
//!         (Avatar::new("https://example.com/me.png"))
//!         (Comment::new("Nice!", "/post/1/comments/2/delete"))
//!     };
//!     BaseLayout::new("Feed", Locale::PtBr).render(content)
//! }
//! ```

pub mod avatar;
pub mod button;
pub mod comment;
pub mod form;
pub mod layout;

pub use avatar::Avatar;
pub use button::{Button, ButtonVariant};
pub use comment::Comment;
pub use form::{FieldError, Form, TextArea};
pub use layout::BaseLayout;
