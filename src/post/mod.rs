//! Post records and publish timestamp formatting.

pub mod model;
pub mod timestamp;

pub use model::{parse_publish_date, Author, OwnerRecord, Post, PostError, PostRecord, Title};
pub use timestamp::{parse_utc_offset, Distance, Locale, PublishLabels, TimestampFormatter};
