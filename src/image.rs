//! Image URL builder.
//!
//! Resolves content-store asset references of the form
//! `image-{id}-{width}x{height}-{format}` into CDN URLs:
//! `{cdn}/images/{project}/{dataset}/{id}-{width}x{height}.{format}`.
//! Malformed references resolve to `None` and the renderer omits the image.

use crate::config::Config;
use crate::model::ImageRef;

/// Build a resolvable CDN URL for an image reference.
pub fn url_for(config: &Config, image: &ImageRef) -> Option<String> {
    let file = asset_file_name(&image.asset.reference)?;
    Some(format!(
        "{}/images/{}/{}/{}",
        config.content_cdn_url, config.project_id, config.dataset, file
    ))
}

/// Convert an asset reference into its CDN file name, e.g.
/// `image-abc123-1200x800-jpg` -> `abc123-1200x800.jpg`.
fn asset_file_name(reference: &str) -> Option<String> {
    let rest = reference.strip_prefix("image-")?;

    // The id itself never contains '-', so the reference splits into
    // exactly id, dimensions, and format.
    let mut parts = rest.rsplitn(3, '-');
    let format = parts.next()?;
    let dimensions = parts.next()?;
    let id = parts.next()?;

    if id.is_empty() || format.is_empty() || !is_dimensions(dimensions) {
        return None;
    }

    Some(format!("{id}-{dimensions}.{format}"))
}

/// Check a `{width}x{height}` dimensions segment.
fn is_dimensions(segment: &str) -> bool {
    let Some((w, h)) = segment.split_once('x') else {
        return false;
    };
    !w.is_empty()
        && !h.is_empty()
        && w.bytes().all(|b| b.is_ascii_digit())
        && h.bytes().all(|b| b.is_ascii_digit())
}
