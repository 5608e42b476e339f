//! Static path generation and page props loading.
//!
//! The build-time contract of the page: enumerate every post slug for
//! pre-rendering, and load the props for a single slug. Unknown slugs are
//! still rendered on demand by the dynamic route (blocking fallback), so
//! path generation is an optimization, not an access list.

use std::time::Duration;

use crate::content::{ContentStore, StoreError};
use crate::error::PageError;
use crate::model::Post;

/// Revalidation interval for loaded props: after this long, cached pages
/// are refreshed in the background while the stale copy is served.
pub const REVALIDATE: Duration = Duration::from_secs(60);

/// Route parameters for one pre-rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParams {
    pub slug: String,
}

/// Policy for slugs outside the pre-rendered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Render on first request, blocking until props resolve.
    Blocking,
}

/// Output of [`generate_paths`].
#[derive(Debug, Clone)]
pub struct StaticPaths {
    pub params: Vec<PathParams>,
    pub fallback: Fallback,
}

/// Props for the post page.
#[derive(Debug, Clone)]
pub struct PageProps {
    pub post: Post,
    /// How long the rendered page stays fresh.
    pub revalidate: Duration,
}

/// Enumerate route parameters for every post in the store.
///
/// Each stored slug appears exactly once, even if the store returns
/// duplicates. Query failure propagates and fails pre-rendering.
pub async fn generate_paths<S: ContentStore>(store: &S) -> Result<StaticPaths, StoreError> {
    let mut slugs = store.all_slugs().await?;

    let mut seen = std::collections::HashSet::new();
    slugs.retain(|slug| seen.insert(slug.clone()));

    Ok(StaticPaths {
        params: slugs
            .into_iter()
            .map(|slug| PathParams { slug })
            .collect(),
        fallback: Fallback::Blocking,
    })
}

/// Load the props for one post page.
///
/// An absent slug or a slug with no matching post yields
/// [`PageError::NotFound`]; query failures propagate unchanged.
pub async fn load_props<S: ContentStore>(
    store: &S,
    slug: Option<&str>,
) -> Result<PageProps, PageError> {
    let Some(slug) = slug else {
        return Err(PageError::NotFound(String::new()));
    };

    let post = store
        .post_by_slug(slug)
        .await?
        .ok_or_else(|| PageError::NotFound(slug.to_string()))?;

    Ok(PageProps {
        post,
        revalidate: REVALIDATE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::{FixtureStore, sample_comment, sample_post};

    #[tokio::test]
    async fn generate_paths_contains_each_slug_once() {
        let store = FixtureStore::with_posts(vec![
            sample_post("hello-world", vec![]),
            sample_post("second-post", vec![]),
            // Duplicate slug from the store should collapse to one path.
            sample_post("hello-world", vec![]),
        ]);

        let paths = generate_paths(&store).await.unwrap();

        let slugs: Vec<&str> = paths.params.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["hello-world", "second-post"]);
        assert_eq!(paths.fallback, Fallback::Blocking);
    }

    #[tokio::test]
    async fn generate_paths_propagates_query_failure() {
        let store = FixtureStore::failing();
        assert!(generate_paths(&store).await.is_err());
    }

    #[tokio::test]
    async fn load_props_returns_post_with_approved_comments() {
        // "hello-world" with 2 approved comments; the unapproved third one
        // was already filtered out by the store query, so the fixture holds
        // only the approved pair.
        let store = FixtureStore::with_posts(vec![sample_post(
            "hello-world",
            vec![sample_comment("c1", "bob"), sample_comment("c2", "eve")],
        )]);

        let props = load_props(&store, Some("hello-world")).await.unwrap();
        assert_eq!(props.post.slug.current, "hello-world");
        assert_eq!(props.post.comments.len(), 2);
        assert_eq!(props.revalidate, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn load_props_missing_post_is_not_found() {
        let store = FixtureStore::with_posts(vec![sample_post("hello-world", vec![])]);

        let err = load_props(&store, Some("missing-post")).await.unwrap_err();
        assert!(matches!(err, PageError::NotFound(slug) if slug == "missing-post"));
    }

    #[tokio::test]
    async fn load_props_absent_slug_is_not_found() {
        let store = FixtureStore::with_posts(vec![]);

        let err = load_props(&store, None).await.unwrap_err();
        assert!(matches!(err, PageError::NotFound(_)));
    }

    #[tokio::test]
    async fn load_props_propagates_query_failure() {
        let store = FixtureStore::failing();

        let err = load_props(&store, Some("hello-world")).await.unwrap_err();
        assert!(matches!(err, PageError::Store(_)));
    }
}
