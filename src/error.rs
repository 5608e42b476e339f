//! Error types for the page service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

use crate::content::StoreError;

/// Page service error type.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No post matches the requested slug. The one expected, recovered
    /// error: it maps to a 404 page.
    #[error("no post for slug: {0}")]
    NotFound(String),

    /// Content store query failure. Not handled locally; the request for
    /// that route fails.
    #[error("content store error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error (rendering, state, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(slug) => (
                StatusCode::NOT_FOUND,
                "Post Not Found",
                format!("There is no post at \"{slug}\". It may have been removed."),
            ),
            Self::Store(err) => {
                tracing::error!(error = %err, "content store error");
                (
                    StatusCode::BAD_GATEWAY,
                    "Service Unavailable",
                    "The content store is temporarily unavailable. Please try again later."
                        .to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to the front page" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
