//! Comment thread store and draft validation.

pub mod thread;
pub mod validator;

pub use thread::{Comment, CommentId, CommentThread};
pub use validator::{AcceptedComment, DraftComment, ValidationState};
