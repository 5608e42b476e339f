//! Pressroom - server-rendered blog post pages from a headless content store.
//!
//! This crate provides a lightweight HTTP server that renders blog post
//! pages — hero image, rich-text body, author byline, approved comments,
//! and a comment form whose submissions are forwarded to an external
//! moderation endpoint.
//!
//! # Architecture
//!
//! - **Props**: Enumerates post slugs and loads a single post (with author
//!   and approved comments) from the content store's query API
//! - **Render**: Generates HTML with maud (compile-time templates), mapping
//!   the portable-text block tree through per-kind serializers
//! - **Cache**: Per-slug stale-while-revalidate cache; stale pages are
//!   served while a single background task refreshes them
//! - **Form**: Explicit editing/submitting/submitted state machine for the
//!   comment form, with guarded transitions
//!
//! # URL Pattern
//!
//! ```text
//! GET  /post/{slug}
//! POST /post/{slug}/comment
//! ```
//!
//! Slugs known at startup are pre-rendered; unknown slugs render on first
//! request (blocking fallback). A slug with no matching post is a 404.
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Link and image URLs are validated (HTTPS/HTTP only) before use
//! - Strict Content-Security-Policy: no JavaScript execution
//! - X-Frame-Options: DENY prevents clickjacking

pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod image;
pub mod model;
pub mod moderation;
pub mod props;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
