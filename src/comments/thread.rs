//! Per-post comment thread.
//!
//! Entries are kept newest first. Each entry gets a [`CommentId`] from a
//! monotonic counter when it is created, so two comments with the same text
//! can still be deleted one at a time.

use std::fmt;

use super::validator::AcceptedComment;
use crate::constants::PLACEHOLDER_COMMENT;

/// Stable identifier of a comment within one thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommentId(u64);

impl CommentId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThread {
    entries: Vec<Comment>,
    next_id: u64,
}

impl Default for CommentThread {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentThread {
    /// A thread seeded with the placeholder comment.
    #[must_use]
    pub fn new() -> Self {
        let mut thread = Self::empty();
        thread.push_front(PLACEHOLDER_COMMENT.to_string());
        thread
    }

    /// A thread with no entries at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Prepend an accepted comment and return its id.
    pub fn add(&mut self, comment: AcceptedComment) -> CommentId {
        self.push_front(comment.into_inner())
    }

    fn push_front(&mut self, text: String) -> CommentId {
        let id = CommentId(self.next_id);
        self.next_id += 1;
        self.entries.insert(0, Comment { id, text });
        id
    }

    /// Remove the entry with `id`. Returns the removed comment, or `None` if absent.
    pub fn remove_by_id(&mut self, id: CommentId) -> Option<Comment> {
        let pos = self.entries.iter().position(|c| c.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Remove every entry whose text equals `text`. Returns how many were removed.
    pub fn remove(&mut self, text: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|c| c.text != text);
        before - self.entries.len()
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[Comment] {
        &self.entries
    }

    /// Entry texts, newest first.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.text.as_str())
    }

    #[must_use]
    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.entries.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
