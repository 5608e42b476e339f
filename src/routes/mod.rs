//! Route definitions for the page service.
//!
//! ## Routes
//!
//! - `GET /` - Front page listing posts
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /post/{slug}` - Post page (stale-while-revalidate cached)
//! - `POST /post/{slug}/comment` - Comment submission

mod comment;
mod health;
mod home;
pub mod post;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::{get, post};

use crate::state::AppState;

pub use post::prerender_all;

/// Build the complete service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/post/{slug}", get(post::post_page_handler))
        .route("/post/{slug}/comment", post(comment::submit_comment))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}
