//! Front page — lists every published post.

use axum::extract::State;
use maud::{Markup, html};

use crate::error::PageError;
use crate::props;
use crate::render::components::{OpenGraphData, page_shell, site_header};
use crate::state::AppState;

/// Render the front page with links to all known posts.
pub async fn home_page(State(state): State<AppState>) -> Result<Markup, PageError> {
    let paths = props::generate_paths(&state.content).await?;
    let site_name = &state.config.site_name;

    let og = OpenGraphData {
        title: site_name,
        description: "A blog",
        og_type: "website",
        image: None,
    };

    let body = html! {
        (site_header(site_name))
        article {
            h1 class="post-title" { "Latest posts" }
            ul {
                @for params in &paths.params {
                    li {
                        a href={"/post/" (params.slug)} { (params.slug) }
                    }
                }
            }
        }
    };

    Ok(page_shell(
        site_name,
        "A blog",
        &state.config.base_url,
        og,
        body,
        site_name,
    ))
}
