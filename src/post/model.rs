//! Post and author records supplied by the hosting application.
//!
//! Records arrive as [`PostRecord`] (the wire shape, camelCase fields) and are
//! checked into [`Post`] before a presenter is mounted. A post that fails the
//! check never reaches the renderer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostError {
    #[error("post {post_id}: unparseable publishDate '{value}'")]
    InvalidPublishDate { post_id: String, value: String },
    #[error("post {post_id}: unknown author title '{value}'")]
    UnknownTitle { post_id: String, value: String },
    #[error("post id cannot be empty")]
    EmptyId,
}

/// Honorific shown under the author's name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Title {
    Mr,
    Ms,
    Mrs,
    Miss,
    Dr,
    /// Empty title; renders as nothing.
    #[default]
    None,
}

impl Title {
    /// The wire value of this title.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mr => "mr",
            Self::Ms => "ms",
            Self::Mrs => "mrs",
            Self::Miss => "miss",
            Self::Dr => "dr",
            Self::None => "",
        }
    }

    /// Uppercase display form ("DR", "MISS", or empty).
    #[must_use]
    pub fn display(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl FromStr for Title {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mr" => Ok(Self::Mr),
            "ms" => Ok(Self::Ms),
            "mrs" => Ok(Self::Mrs),
            "miss" => Ok(Self::Miss),
            "dr" => Ok(Self::Dr),
            "" => Ok(Self::None),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author record as it arrives from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub title: String,
    pub picture: String,
}

/// Post record as it arrives from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    pub author: OwnerRecord,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub publish_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub title: Title,
    pub picture: String,
}

impl Author {
    /// "First Last" as shown in the post header.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A checked post. Immutable for the lifetime of its presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub author: Author,
    pub text: String,
    pub tags: Vec<String>,
    pub publish_date: DateTime<Utc>,
}

impl TryFrom<PostRecord> for Post {
    type Error = PostError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        if record.id.is_empty() {
            return Err(PostError::EmptyId);
        }

        let title = record
            .author
            .title
            .parse::<Title>()
            .map_err(|value| PostError::UnknownTitle {
                post_id: record.id.clone(),
                value,
            })?;

        let publish_date =
            parse_publish_date(&record.publish_date).ok_or_else(|| {
                PostError::InvalidPublishDate {
                    post_id: record.id.clone(),
                    value: record.publish_date.clone(),
                }
            })?;

        Ok(Self {
            id: record.id,
            author: Author {
                id: record.author.id,
                first_name: record.author.first_name,
                last_name: record.author.last_name,
                title,
                picture: record.author.picture,
            },
            text: record.text,
            tags: record.tags,
            publish_date,
        })
    }
}

/// Parse a publish timestamp.
///
/// Accepts RFC 3339 instants ("2022-05-03T10:00:00Z", "2022-05-03T10:00:00.000-03:00")
/// and bare dates ("2022-05-03"), which are taken as midnight UTC.
#[must_use]
pub fn parse_publish_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
