//! Shared HTML components for the post pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};

use crate::form::{CommentInput, FieldErrors};
use crate::model::Comment;

/// Inline CSS for all pages. Amber accent, spacing-led hierarchy.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fff;--fg:#1a1a1a;--fg2:#555;--fg3:#999;--accent:#eab308;--accent-hover:#ca8a04;--border:rgba(234,179,8,.35)}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column}
a{color:var(--accent-hover);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%}

.site-header{display:flex;align-items:center;justify-content:space-between;max-width:1024px;width:100%;margin:0 auto;padding:1rem 1.25rem}
.site-name{font-size:1.3rem;font-weight:800;letter-spacing:-.02em;color:var(--fg)}
.site-name:hover{text-decoration:none;color:var(--accent-hover)}

.hero{width:100%;height:160px;object-fit:cover;display:block}

article{max-width:48rem;margin:0 auto;padding:1.25rem;width:100%}
.post-title{font-size:1.9rem;font-weight:700;margin:2rem 0 .75rem;line-height:1.25}
.post-description{font-size:1.25rem;font-weight:300;color:var(--fg2);margin-bottom:.75rem}
.byline{display:flex;align-items:center;gap:.6rem;margin:.5rem 0 1rem}
.byline-pic{width:40px;height:40px;border-radius:50%;background:var(--accent);flex-shrink:0;display:flex;align-items:center;justify-content:center;color:#fff;font-weight:700;text-transform:uppercase;overflow:hidden;position:relative}
.byline-pic img{position:absolute;inset:0;width:100%;height:100%;object-fit:cover}
.byline-text{font-size:.85rem;font-weight:300;color:var(--fg2)}
.byline-text .byline-name{color:var(--accent-hover);font-weight:500}

.post-body{font-size:1.05rem;line-height:1.75;margin-top:1.25rem}
.post-body h1,.post-body h2,.post-body h3,.post-body h4{font-weight:700;margin:1.25rem 0 .5rem}
.post-body h1{font-size:1.5rem}
.post-body h2{font-size:1.25rem}
.post-body h3{font-size:1.1rem}
.post-body h4{font-size:1rem}
.post-body p{margin:.6rem 0}
.post-body ul,.post-body ol{margin:.6rem 0;padding-left:1.5rem}
.post-body li{margin:.25rem 0}
.post-body blockquote{border-left:3px solid var(--border);padding:.4rem 0 .4rem 1rem;margin:.6rem 0;color:var(--fg2)}
.post-body code{font-family:ui-monospace,Menlo,monospace;font-size:.9em;background:#f6f6f4;padding:.1rem .3rem;border-radius:3px}
.post-body a{text-decoration:underline}

.rule{max-width:32rem;margin:1.5rem auto;border:1px solid var(--accent);border-radius:1px}

.comment-form{max-width:42rem;margin:0 auto 2.5rem;padding:1.25rem;display:flex;flex-direction:column;border:1px solid var(--accent);border-radius:4px}
.comment-form-kicker{font-size:.85rem;color:var(--accent-hover)}
.comment-form-title{font-size:1.6rem;font-weight:700;margin-bottom:.75rem}
.comment-form label{display:block;margin-bottom:1rem}
.comment-form label span{color:var(--fg2);font-size:.9rem}
.comment-form input[type=text],.comment-form input[type=email],.comment-form textarea{display:block;width:100%;margin-top:.25rem;padding:.6rem .7rem;border:1px solid #ddd;border-radius:4px;font:inherit;outline-color:var(--accent)}
.field-error{color:#dc2626;font-size:.85rem;margin:.1rem 0}
.comment-form input[type=submit]{cursor:pointer;background:var(--accent);color:#fff;font-weight:700;border:none;border-radius:4px;padding:.6rem 1rem;margin-top:.5rem}
.comment-form input[type=submit]:hover{background:var(--accent-hover)}

.thank-you{max-width:42rem;margin:0 auto 2.5rem;padding:2rem 1.25rem;background:var(--accent);color:#fff;border-radius:4px}
.thank-you h2{font-size:1.5rem;margin-bottom:.4rem}

.comments{max-width:42rem;margin:0 auto 3rem;padding:1.25rem;box-shadow:0 0 8px var(--border);border-radius:4px}
.comments h3{font-size:1.6rem;margin-bottom:.5rem}
.comment{margin:.5rem 0}
.comment-author{color:var(--accent-hover);font-weight:500}

.footer{text-align:center;margin-top:auto;padding:1rem;font-size:.8rem;color:var(--fg3)}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fff;color:#1a1a1a;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#ca8a04}
"#;

/// Content-Security-Policy header value.
///
/// No script execution anywhere; images may come from the asset CDN over
/// HTTPS. Form posts stay on this origin.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src https: http: data:; form-action 'self'; frame-ancestors 'none'";

/// Open Graph metadata for a page.
pub struct OpenGraphData<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// OG type (e.g., "article", "website").
    pub og_type: &'a str,
    pub image: Option<&'a str>,
}

/// Render the full HTML page shell with `<head>`, OG tags, and body content.
pub fn page_shell(
    title: &str,
    description: &str,
    canonical_url: &str,
    og: OpenGraphData<'_>,
    body_content: Markup,
    site_name: &str,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(canonical_url);

                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:url" content=(canonical_url);
                meta property="og:site_name" content=(site_name);
                meta property="og:type" content=(og.og_type);
                @if let Some(image) = og.image {
                    meta property="og:image" content=(image);
                }

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (body_content)
                footer class="footer" {
                    "Published with " (site_name)
                }
            }
        }
    }
}

/// Site header with the site name linking home.
pub fn site_header(site_name: &str) -> Markup {
    html! {
        header class="site-header" {
            a href="/" class="site-name" { (site_name) }
        }
    }
}

/// Author byline with avatar, name, and formatted publication date.
pub fn byline(
    author_name: &str,
    author_image_url: Option<&str>,
    created_at: &chrono::DateTime<chrono::Utc>,
) -> Markup {
    let initial = author_name
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    html! {
        div class="byline" {
            div class="byline-pic" {
                (initial.as_str())
                @if let Some(url) = author_image_url {
                    @if is_safe_url(url) {
                        img src=(url) alt=(author_name) loading="lazy";
                    }
                }
            }
            p class="byline-text" {
                "Blog post by " span class="byline-name" { (author_name) }
                " - published at " (format_date(created_at))
            }
        }
    }
}

/// The comment form, pre-filled from the last attempt with inline
/// per-field error annotations.
pub fn comment_form(post_slug: &str, input: &CommentInput, errors: &FieldErrors) -> Markup {
    html! {
        form class="comment-form" method="post" action={"/post/" (post_slug) "/comment"} {
            h3 class="comment-form-kicker" { "Enjoyed this article?" }
            h4 class="comment-form-title" { "Leave a comment below!" }

            input type="hidden" name="_id" value=(input.post_id);

            label {
                span { "Name" }
                input type="text" name="name" placeholder="Your name" value=(input.name);
            }
            @if errors.name {
                p class="field-error" { "The name field is required" }
            }

            label {
                span { "Email" }
                input type="email" name="email" placeholder="you@example.com" value=(input.email);
            }
            @if errors.email {
                p class="field-error" { "The email field is required" }
            }

            label {
                span { "Comment" }
                textarea name="comment" rows="8" placeholder="Your comment" { (input.comment) }
            }
            @if errors.comment {
                p class="field-error" { "The comment field is required" }
            }

            input type="submit" value="Submit";
        }
    }
}

/// Thank-you notice shown in place of the form after a successful submission.
pub fn thank_you() -> Markup {
    html! {
        div class="thank-you" {
            h2 { "Thank you for submitting your comment!" }
            p { "Once it has been approved, it will appear below." }
        }
    }
}

/// Approved-comment list. Everything passed here is approved by
/// construction; this renders exactly what it is given.
pub fn comment_list(comments: &[Comment]) -> Markup {
    html! {
        div class="comments" {
            h3 { "Comments" }
            hr class="rule";
            @for comment in comments {
                div class="comment" {
                    p {
                        span class="comment-author" { (comment.name) }
                        " " (comment.comment)
                    }
                }
            }
        }
    }
}

/// Format a timestamp for the byline, e.g. "March 1, 2024 at 09:30 UTC".
pub fn format_date(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%B %-d, %Y at %H:%M UTC").to_string()
}

/// Check a URL is plain http(s) before emitting it into an attribute.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Truncate a string to `max` characters on a char boundary, appending an
/// ellipsis when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}
