//! Feed post library.
//!
//! Renders social-feed posts (author, body, hashtags, publish time) with a
//! per-post comment thread and comment form, and serves them over HTTP.

pub mod comments;
pub mod components;
pub mod config;
pub mod constants;
pub mod feed;
pub mod post;
pub mod presenter;
pub mod web;
