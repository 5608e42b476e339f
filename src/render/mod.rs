//! HTML rendering for post pages.
//!
//! Rendering is pure: post data, configuration, and form state in, markup
//! out. All dynamic values are escaped by maud; image and link URLs pass
//! an http(s) check before reaching attributes.

pub mod components;
pub mod portable_text;

use maud::{Markup, html};

use components::{
    OpenGraphData, byline, comment_form, comment_list, page_shell, site_header, thank_you,
    truncate,
};

use crate::config::Config;
use crate::form::{CommentInput, FormState};
use crate::image;
use crate::model::Post;

/// Render the complete post page.
///
/// Layout: site header, hero image, title, description, author byline,
/// rich-text body, then the comment form (or the thank-you notice once
/// submitted) and the approved-comment list.
pub fn post_page(
    config: &Config,
    post: &Post,
    form: &FormState,
    input: &CommentInput,
) -> Markup {
    let hero_url = post
        .main_image
        .as_ref()
        .and_then(|img| image::url_for(config, img));
    let author_image_url = post
        .author
        .image
        .as_ref()
        .and_then(|img| image::url_for(config, img));

    let page_title = format!("{} - {}", post.title, config.site_name);
    let description = truncate(&post.description, 200);
    let canonical = format!("{}/post/{}", config.base_url, post.slug.current);

    let og = OpenGraphData {
        title: &post.title,
        description: &description,
        og_type: "article",
        image: hero_url.as_deref(),
    };

    let body = html! {
        (site_header(&config.site_name))

        @if let Some(url) = hero_url.as_deref() {
            img class="hero" src=(url) alt=(post.title);
        }

        article {
            h1 class="post-title" { (post.title) }
            h2 class="post-description" { (post.description) }
            (byline(&post.author.name, author_image_url.as_deref(), &post.created_at))
            div class="post-body" {
                (portable_text::render_body(&post.body))
            }
        }

        hr class="rule";

        @if form.is_submitted() {
            (thank_you())
        } @else {
            (comment_form(&post.slug.current, input, &form.errors()))
        }

        (comment_list(&post.comments))
    };

    page_shell(
        &page_title,
        &description,
        &canonical,
        og,
        body,
        &config.site_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::{sample_comment, sample_post};
    use crate::form::FieldErrors;
    use crate::model::{AssetRef, ImageRef};

    fn test_config() -> Config {
        Config {
            bind_addr: "0.0.0.0:8080".to_string(),
            content_api_url: "http://localhost:3333".to_string(),
            project_id: "abc123".to_string(),
            dataset: "production".to_string(),
            content_cdn_url: "https://cdn.example.io".to_string(),
            moderation_url: "http://localhost:3000/api/createComment".to_string(),
            base_url: "https://blog.example".to_string(),
            site_name: "Pressroom".to_string(),
            revalidate: std::time::Duration::from_secs(60),
        }
    }

    fn fresh_form(post_id: &str) -> (FormState, CommentInput) {
        (FormState::default(), CommentInput::empty(post_id))
    }

    #[test]
    fn page_renders_title_byline_and_body() {
        let config = test_config();
        let post = sample_post("hello-world", vec![]);
        let (form, input) = fresh_form(&post.id);

        let html = post_page(&config, &post, &form, &input).into_string();

        assert!(html.contains("Hello World"));
        assert!(html.contains("Blog post by"));
        assert!(html.contains("Ada"));
        assert!(html.contains("March 1, 2024"));
        assert!(html.contains("Welcome to the blog."));
        assert!(html.contains("https://blog.example/post/hello-world"));
    }

    #[test]
    fn page_renders_exactly_the_approved_comments() {
        let config = test_config();
        // The store query already filtered to approved; the page shows
        // exactly what it was given — N entries, never more.
        let post = sample_post(
            "hello-world",
            vec![sample_comment("c1", "bob"), sample_comment("c2", "eve")],
        );
        let (form, input) = fresh_form(&post.id);

        let html = post_page(&config, &post, &form, &input).into_string();
        assert_eq!(html.matches("class=\"comment\"").count(), 2);
    }

    #[test]
    fn editing_state_shows_the_form() {
        let config = test_config();
        let post = sample_post("hello-world", vec![]);
        let (form, input) = fresh_form(&post.id);

        let html = post_page(&config, &post, &form, &input).into_string();
        assert!(html.contains("class=\"comment-form\""));
        assert!(!html.contains("class=\"thank-you\""));
        // Hidden post id travels with the form.
        assert!(html.contains("name=\"_id\""));
    }

    #[test]
    fn submitted_state_replaces_form_with_thank_you() {
        let config = test_config();
        let post = sample_post("hello-world", vec![]);
        let (_, input) = fresh_form(&post.id);
        let form = FormState::Submitted;

        let html = post_page(&config, &post, &form, &input).into_string();
        assert!(html.contains("class=\"thank-you\""));
        assert!(!html.contains("class=\"comment-form\""));
    }

    #[test]
    fn field_errors_are_rendered_inline() {
        let config = test_config();
        let post = sample_post("hello-world", vec![]);
        let input = CommentInput::empty(&post.id);
        let form = FormState::Editing {
            errors: FieldErrors {
                name: true,
                email: false,
                comment: false,
            },
        };

        let html = post_page(&config, &post, &form, &input).into_string();
        assert!(html.contains("The name field is required"));
        assert!(!html.contains("The email field is required"));
    }

    #[test]
    fn hero_is_omitted_without_main_image() {
        let config = test_config();
        let post = sample_post("hello-world", vec![]);
        let (form, input) = fresh_form(&post.id);

        let html = post_page(&config, &post, &form, &input).into_string();
        assert!(!html.contains("class=\"hero\""));
    }

    #[test]
    fn hero_uses_the_image_url_builder() {
        let config = test_config();
        let mut post = sample_post("hello-world", vec![]);
        post.main_image = Some(ImageRef {
            asset: AssetRef {
                reference: "image-deadbeef-1200x800-jpg".to_string(),
            },
        });
        let (form, input) = fresh_form(&post.id);

        let html = post_page(&config, &post, &form, &input).into_string();
        assert!(html.contains(
            "https://cdn.example.io/images/abc123/production/deadbeef-1200x800.jpg"
        ));
    }
}
