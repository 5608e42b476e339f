//! Comment submission route handler.
//!
//! Handles `POST /post/{slug}/comment`: drives the comment form state
//! machine, forwards accepted input to the moderation endpoint, and
//! re-renders the post page in the resulting form state. The page cache is
//! never written here — a new comment only appears after approval and a
//! later content refresh.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, header};
use axum::response::{Html, IntoResponse, Response};

use crate::error::PageError;
use crate::form::{CommentInput, FormState};
use crate::model::Post;
use crate::props;
use crate::render;
use crate::state::AppState;

/// Handle a comment form submission.
pub async fn submit_comment(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(input): Form<CommentInput>,
) -> Result<Response, PageError> {
    let slug = slug.trim();

    // The post is re-fetched so the rendered page reflects the store; an
    // unknown slug 404s just like the page route.
    let props = props::load_props(&state.content, Some(slug)).await?;

    let mut form = FormState::default();
    if let Err(blocked) = form.begin_submit(&input) {
        tracing::debug!(slug = %slug, blocked = ?blocked, "submission blocked");
        return Ok(page_response(&state, &props.post, &form, &input));
    }

    match state.moderation.submit(&input).await {
        Ok(()) => {
            tracing::info!(slug = %slug, post_id = %input.post_id, "comment sent to moderation");
            form.complete();
        }
        Err(err) => {
            // Caught and logged; the visitor just gets the editable form
            // back, submitted flag still false.
            tracing::warn!(slug = %slug, error = %err, "comment submission failed");
            form.fail();
        }
    }

    Ok(page_response(&state, &props.post, &form, &input))
}

/// Render the post page in the given form state, uncached.
fn page_response(
    state: &AppState,
    post: &Post,
    form: &FormState,
    input: &CommentInput,
) -> Response {
    let markup = render::post_page(&state.config, post, form, input);

    let mut response = Html(markup.into_string()).into_response();
    // Submission responses are per-visitor; never cache them.
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
