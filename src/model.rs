//! Content-store data model.
//!
//! These types mirror the JSON projections returned by the content store's
//! query API. They are read-only to this service: posts and comments are
//! authored elsewhere, and new comments only enter the store through the
//! moderation endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A blog post with its author and approved comments joined in.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// Document ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Creation timestamp.
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    /// Post title.
    pub title: String,
    /// Short description shown under the title.
    #[serde(default)]
    pub description: String,
    /// URL slug for the post route.
    pub slug: Slug,
    /// Hero image reference.
    #[serde(rename = "mainImage", default)]
    pub main_image: Option<ImageRef>,
    /// Embedded author.
    pub author: Author,
    /// Approved comments. The query filters on `approved == true`, so
    /// anything that reaches this list is approved by construction.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Rich-text body as a portable-text block tree.
    #[serde(default)]
    pub body: Vec<Block>,
}

/// Slug wrapper matching the store's `{ "current": "..." }` shape.
#[derive(Debug, Clone, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// Post author, embedded in [`Post`].
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

/// An approved comment on a post.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub comment: String,
}

/// Reference to an image asset in the content store.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    pub asset: AssetRef,
}

/// Raw asset pointer, e.g. `image-<id>-800x600-jpg`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// One portable-text block.
///
/// Text blocks carry a `style` ("normal", "h1".."h4", "blockquote") and an
/// optional `listItem` kind; non-text block types (images, embeds, custom
/// kinds) keep their `_type` and are routed to the default renderer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Block {
    #[serde(rename = "_type", default)]
    pub kind: String,
    #[serde(default)]
    pub style: String,
    #[serde(rename = "listItem", default)]
    pub list_item: Option<String>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(rename = "markDefs", default)]
    pub mark_defs: Vec<MarkDef>,
}

impl Block {
    /// Resolve a span mark key against this block's mark definitions.
    pub fn mark_def(&self, key: &str) -> Option<&MarkDef> {
        self.mark_defs.iter().find(|def| def.key == key)
    }
}

/// Inline text span within a block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    /// Mark names ("strong", "em", "code", "underline") or mark-def keys.
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Annotation referenced from span marks, e.g. a hyperlink.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST_JSON: &str = r#"{
        "_id": "post-1",
        "_createdAt": "2024-03-01T09:30:00Z",
        "title": "Hello World",
        "description": "An introduction",
        "slug": { "current": "hello-world" },
        "mainImage": { "asset": { "_ref": "image-abc123-1200x800-jpg" } },
        "author": {
            "name": "Ada",
            "image": { "asset": { "_ref": "image-def456-100x100-png" } }
        },
        "comments": [
            { "_id": "c1", "name": "Bob", "email": "bob@example.com", "comment": "Nice!" },
            { "_id": "c2", "name": "Eve", "comment": "Agreed." }
        ],
        "body": [
            {
                "_type": "block",
                "style": "h1",
                "children": [ { "text": "Intro", "marks": [] } ],
                "markDefs": []
            },
            {
                "_type": "block",
                "style": "normal",
                "children": [
                    { "text": "See ", "marks": [] },
                    { "text": "the docs", "marks": ["a1b2"] }
                ],
                "markDefs": [
                    { "_key": "a1b2", "_type": "link", "href": "https://example.com" }
                ]
            }
        ]
    }"#;

    #[test]
    fn post_deserializes() {
        let post: Post = serde_json::from_str(POST_JSON).unwrap();
        assert_eq!(post.id, "post-1");
        assert_eq!(post.slug.current, "hello-world");
        assert_eq!(post.author.name, "Ada");
        assert_eq!(post.comments.len(), 2);
        assert_eq!(post.body.len(), 2);
        assert_eq!(post.body[0].style, "h1");
    }

    #[test]
    fn comment_email_defaults_when_missing() {
        let post: Post = serde_json::from_str(POST_JSON).unwrap();
        assert_eq!(post.comments[1].email, "");
    }

    #[test]
    fn mark_def_lookup() {
        let post: Post = serde_json::from_str(POST_JSON).unwrap();
        let block = &post.body[1];
        let def = block.mark_def("a1b2").unwrap();
        assert_eq!(def.kind, "link");
        assert_eq!(def.href.as_deref(), Some("https://example.com"));
        assert!(block.mark_def("missing").is_none());
    }

    #[test]
    fn post_without_optional_fields() {
        let json = r#"{
            "_id": "post-2",
            "_createdAt": "2024-03-02T00:00:00Z",
            "title": "Bare",
            "slug": { "current": "bare" },
            "author": { "name": "Ada" }
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.main_image.is_none());
        assert!(post.author.image.is_none());
        assert!(post.comments.is_empty());
        assert!(post.body.is_empty());
        assert_eq!(post.description, "");
    }
}
