//! Content store query layer.
//!
//! The store exposes a parameterized query API returning JSON projections
//! wrapped in a `{"result": ...}` envelope. This service issues exactly two
//! query shapes: "all slugs" and "single post by slug with joined author
//! and approved comments".

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::model::Post;

/// Query projecting every post's slug.
const ALL_SLUGS_QUERY: &str = "*[_type == 'post']{ 'slug': slug.current }";

/// Query for a single post by slug, with the author dereferenced and the
/// approved comments subquery joined in. Unapproved comments are filtered
/// out here, server-side; they never reach the page.
const POST_BY_SLUG_QUERY: &str = "\
*[_type == 'post' && slug.current == $slug][0]{ \
_id, _createdAt, title, description, slug, mainImage, \
author -> { name, image }, \
'comments': *[_type == 'comment' && post._ref == ^._id && approved == true], \
body }";

/// Errors from the content store query layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Transport-level failure talking to the query API.
    #[error("content store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The query API answered with a non-success status.
    #[error("content store returned status {0}")]
    Status(u16),

    /// The response body did not match the expected projection.
    #[error("content store response malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read access to the content store.
///
/// The production implementation is [`ContentClient`]; tests substitute an
/// in-memory fixture.
pub trait ContentStore: Send + Sync {
    /// Fetch every post slug known to the store.
    fn all_slugs(&self) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;

    /// Fetch one post by slug with author and approved comments joined,
    /// or `None` when no post matches.
    fn post_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Post>, StoreError>> + Send;
}

/// Query API response envelope.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Row shape for the all-slugs projection. `slug` is null for drafts that
/// have no slug assigned yet.
#[derive(Debug, Deserialize)]
struct SlugRow {
    slug: Option<String>,
}

/// HTTP client for the content store query API.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    query_url: String,
}

impl ContentClient {
    /// API version date used in query URLs.
    const API_VERSION: &'static str = "2021-10-21";

    pub fn new(config: &Config) -> Self {
        let query_url = format!(
            "{}/v{}/data/query/{}",
            config.content_api_url,
            Self::API_VERSION,
            config.dataset
        );

        Self {
            http: reqwest::Client::new(),
            query_url,
        }
    }

    /// Run a query with named parameters and decode the `result` field.
    async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<T, StoreError> {
        let mut request = self.http.get(&self.query_url).query(&[("query", query)]);
        for (name, value) in params {
            request = request.query(&[(format!("${name}"), encode_param(value))]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let envelope: QueryResponse<T> = serde_json::from_slice(&body)?;
        Ok(envelope.result)
    }
}

impl ContentStore for ContentClient {
    async fn all_slugs(&self) -> Result<Vec<String>, StoreError> {
        let rows: Vec<SlugRow> = self.query(ALL_SLUGS_QUERY, &[]).await?;
        Ok(rows.into_iter().filter_map(|row| row.slug).collect())
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        self.query(POST_BY_SLUG_QUERY, &[("slug", slug)]).await
    }
}

/// Encode a string parameter as a query-language literal (JSON string).
fn encode_param(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_param_quotes_plain_string() {
        assert_eq!(encode_param("hello-world"), "\"hello-world\"");
    }

    #[test]
    fn encode_param_escapes_quotes() {
        assert_eq!(encode_param("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn envelope_decodes_slug_rows() {
        let body = br#"{"ms": 3, "result": [{"slug": "one"}, {"slug": null}, {"slug": "two"}]}"#;
        let envelope: QueryResponse<Vec<SlugRow>> = serde_json::from_slice(body).unwrap();
        let slugs: Vec<String> = envelope
            .result
            .into_iter()
            .filter_map(|row| row.slug)
            .collect();
        assert_eq!(slugs, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn envelope_decodes_null_post() {
        let body = br#"{"result": null}"#;
        let envelope: QueryResponse<Option<Post>> = serde_json::from_slice(body).unwrap();
        assert!(envelope.result.is_none());
    }

    #[test]
    fn envelope_rejects_missing_result() {
        let body = br#"{"ms": 3}"#;
        let parsed: Result<QueryResponse<Option<Post>>, _> = serde_json::from_slice(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn post_query_filters_on_approval() {
        // The approval predicate lives in the query itself.
        assert!(POST_BY_SLUG_QUERY.contains("approved == true"));
        assert!(POST_BY_SLUG_QUERY.contains("slug.current == $slug"));
    }
}
