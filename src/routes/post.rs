//! Post page route handler.
//!
//! Handles `GET /post/{slug}` with stale-while-revalidate caching: cached
//! pages are served even past the revalidate interval, while a single
//! background task re-fetches and re-renders. Unknown slugs render on
//! demand, blocking until props resolve.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::cache::CachedPage;
use crate::error::PageError;
use crate::form::{CommentInput, FormState};
use crate::props;
use crate::render;
use crate::state::AppState;

/// Handle a post page request.
pub async fn post_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, PageError> {
    let slug = slug.trim();

    if let Some(cached) = state.cache.get(slug).await {
        if cached.is_stale(state.config.revalidate) {
            tracing::debug!(slug = %slug, "serving stale page, refreshing in background");
            spawn_refresh(&state, slug);
        } else {
            tracing::debug!(slug = %slug, "cache hit");
        }
        return Ok(build_response(&cached.html, &state));
    }

    // Blocking fallback: slugs outside the pre-rendered set are rendered
    // on first request rather than 404'd.
    tracing::debug!(slug = %slug, "cache miss, rendering on demand");
    let html = render_and_cache(&state, slug).await?;
    Ok(build_response(&html, &state))
}

/// Load props for a slug, render the page, and promote it into the cache.
pub(crate) async fn render_and_cache(state: &AppState, slug: &str) -> Result<String, PageError> {
    let props = props::load_props(&state.content, Some(slug)).await?;

    let input = CommentInput::empty(&props.post.id);
    let markup = render::post_page(&state.config, &props.post, &FormState::default(), &input);
    let html = markup.into_string();

    state
        .cache
        .insert(slug.to_string(), CachedPage::new(html.clone()))
        .await;

    Ok(html)
}

/// Pre-render every known post into the page cache.
///
/// The startup analog of build-time static generation: enumerate paths and
/// render each one. A slugs-query failure propagates and aborts startup; a
/// slug that vanished between the two queries is skipped.
pub async fn prerender_all(state: &AppState) -> Result<usize, PageError> {
    let paths = props::generate_paths(&state.content).await?;

    let mut rendered = 0;
    for params in &paths.params {
        match render_and_cache(state, &params.slug).await {
            Ok(_) => {
                tracing::debug!(slug = %params.slug, "pre-rendered");
                rendered += 1;
            }
            Err(PageError::NotFound(_)) => {
                tracing::warn!(slug = %params.slug, "slug disappeared between queries, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(rendered)
}

/// Kick off a background refresh for a stale slug, unless one is already
/// in flight for it.
fn spawn_refresh(state: &AppState, slug: &str) {
    if !state.refresh.try_begin(slug) {
        return;
    }

    let state = state.clone();
    let slug = slug.to_string();
    tokio::spawn(async move {
        match render_and_cache(&state, &slug).await {
            Ok(_) => tracing::debug!(slug = %slug, "background refresh complete"),
            Err(PageError::NotFound(_)) => {
                // The post was removed; drop the stale page so the route
                // 404s from now on.
                tracing::info!(slug = %slug, "post removed from store, evicting cached page");
                state.cache.invalidate(&slug).await;
            }
            Err(err) => {
                tracing::warn!(slug = %slug, error = %err, "background refresh failed, keeping stale page");
            }
        }
        state.refresh.finish(&slug);
    });
}

/// Build an HTTP response with HTML content plus cache and security headers.
fn build_response(html: &str, state: &AppState) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    // Downstream caches follow the same revalidation policy as our own.
    let revalidate = state.config.revalidate.as_secs();
    let cache_value =
        format!("public, max-age=0, s-maxage={revalidate}, stale-while-revalidate={revalidate}");
    if let Ok(val) = HeaderValue::from_str(&cache_value) {
        headers.insert(header::CACHE_CONTROL, val);
    }

    (StatusCode::OK, headers, html.to_string()).into_response()
}
