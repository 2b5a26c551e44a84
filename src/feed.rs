//! The set of mounted posts served by the host.
//!
//! Each post gets its own [`PostPresenter`]; nothing is shared between them.
//! Posts are read once at startup from a JSON or TOML file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use maud::{html, Markup};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::post::{Post, PostError, PostRecord, TimestampFormatter};
use crate::presenter::PostPresenter;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read posts file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse posts JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse posts TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported posts file extension: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Post(#[from] PostError),
    #[error("duplicate post id: {0}")]
    DuplicateId(String),
}

/// TOML files hold posts under a top-level `posts` array.
#[derive(Debug, Deserialize)]
struct TomlPosts {
    #[serde(default)]
    posts: Vec<PostRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct Feed {
    presenters: Vec<PostPresenter>,
}

impl Feed {
    /// Check every record and mount one presenter per post, in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if any record is malformed or two posts share an id.
    pub fn from_records(records: Vec<PostRecord>) -> Result<Self, FeedError> {
        let mut seen = HashSet::new();
        let mut presenters = Vec::with_capacity(records.len());
        for record in records {
            let post = Post::try_from(record)?;
            if !seen.insert(post.id.clone()) {
                return Err(FeedError::DuplicateId(post.id));
            }
            presenters.push(PostPresenter::new(post));
        }
        Ok(Self { presenters })
    }

    /// Parse posts from JSON text (a top-level array of posts).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a post is malformed.
    pub fn from_json(text: &str) -> Result<Self, FeedError> {
        let records: Vec<PostRecord> = serde_json::from_str(text)?;
        Self::from_records(records)
    }

    /// Parse posts from TOML text (`[[posts]]` tables).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a post is malformed.
    pub fn from_toml(text: &str) -> Result<Self, FeedError> {
        let parsed: TomlPosts = toml::from_str(text)?;
        Self::from_records(parsed.posts)
    }

    /// Load posts from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, FeedError> {
        let text = std::fs::read_to_string(path).map_err(|source| FeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let feed = match ext.as_str() {
            "json" => Self::from_json(&text)?,
            "toml" => Self::from_toml(&text)?,
            other => return Err(FeedError::UnsupportedFormat(other.to_string())),
        };

        info!(path = %path.display(), posts = feed.len(), "Posts loaded");
        Ok(feed)
    }

    #[must_use]
    pub fn presenters(&self) -> &[PostPresenter] {
        &self.presenters
    }

    #[must_use]
    pub fn get(&self, post_id: &str) -> Option<&PostPresenter> {
        self.presenters.iter().find(|p| p.post().id == post_id)
    }

    pub fn get_mut(&mut self, post_id: &str) -> Option<&mut PostPresenter> {
        self.presenters.iter_mut().find(|p| p.post().id == post_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presenters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presenters.is_empty()
    }

    /// Render every post, in feed order.
    #[must_use]
    pub fn render_at(&self, formatter: &TimestampFormatter, now: DateTime<Utc>) -> Markup {
        html! {
            @for presenter in &self.presenters {
                (presenter.render_at(formatter, now))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::PostEvent;
    use std::io::Write;

    const JSON: &str = r#"[
        {
            "id": "p1",
            "author": {"id": "a1", "firstName": "Diego", "lastName": "Fernandes", "title": "dr", "picture": "d.png"},
            "text": "Fala galeraa",
            "tags": ["nlw"],
            "publishDate": "2022-05-03T10:00:00Z"
        },
        {
            "id": "p2",
            "author": {"id": "a2", "firstName": "Mayk", "lastName": "Brito", "title": "mr", "picture": "m.png"},
            "text": "Olá",
            "tags": [],
            "publishDate": "2022-05-10T20:00:00Z"
        }
    ]"#;

    const TOML: &str = r#"
[[posts]]
id = "p1"
text = "Fala galeraa"
tags = ["nlw", "rocketseat"]
publishDate = "2022-05-03T10:00:00Z"

[posts.author]
id = "a1"
firstName = "Diego"
lastName = "Fernandes"
title = "dr"
picture = "d.png"
"#;

    #[test]
    fn test_from_json_mounts_presenters_in_order() {
        let feed = Feed::from_json(JSON).unwrap();
        let ids: Vec<&str> = feed.presenters().iter().map(|p| p.post().id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_from_toml() {
        let feed = Feed::from_toml(TOML).unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.get("p1").unwrap().post().tags, vec!["nlw", "rocketseat"]);
    }

    #[test]
    fn test_posts_have_independent_threads() {
        let mut feed = Feed::from_json(JSON).unwrap();
        let p1 = feed.get_mut("p1").unwrap();
        p1.handle(PostEvent::DraftChanged("só no p1".to_string()));
        p1.handle(PostEvent::Submit);

        assert_eq!(feed.get("p1").unwrap().thread().len(), 2);
        assert_eq!(feed.get("p2").unwrap().thread().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = JSON.replace("\"p2\"", "\"p1\"");
        let err = Feed::from_json(&json).unwrap_err();
        assert!(matches!(err, FeedError::DuplicateId(ref id) if id == "p1"));
    }

    #[test]
    fn test_malformed_post_rejected() {
        let json = JSON.replace("\"mr\"", "\"sir\"");
        let err = Feed::from_json(&json).unwrap_err();
        assert!(matches!(err, FeedError::Post(PostError::UnknownTitle { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(JSON.as_bytes()).unwrap();

        let feed = Feed::load(file.path()).unwrap();
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = Feed::load(file.path()).unwrap_err();
        assert!(matches!(err, FeedError::UnsupportedFormat(ref ext) if ext == "yaml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Feed::load(Path::new("/nonexistent/posts.json")).unwrap_err();
        assert!(matches!(err, FeedError::Read { .. }));
    }
}
