//! Portable-text rendering: a pure tree-to-markup transform.
//!
//! Each block is dispatched through a serializer keyed by its kind and
//! style — heading levels, blockquotes, list items, paragraphs — with a
//! default renderer for anything unrecognized. Consecutive list items of
//! the same kind are grouped into one `ul`/`ol`. Inline marks (strong, em,
//! code, underline, strike-through) nest, and link marks are resolved
//! through the block's mark definitions.

use maud::{Markup, html};

use super::components::is_safe_url;
use crate::model::{Block, Span};

/// Recognized text-block styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockStyle {
    H1,
    H2,
    H3,
    H4,
    Blockquote,
    Normal,
    /// Anything else routes to the default renderer.
    Other,
}

impl BlockStyle {
    fn from_style(style: &str) -> Self {
        match style {
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "blockquote" => Self::Blockquote,
            "normal" | "" => Self::Normal,
            _ => Self::Other,
        }
    }
}

/// List grouping kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn from_item(item: &str) -> Self {
        match item {
            "number" => Self::Number,
            _ => Self::Bullet,
        }
    }
}

/// Render a portable-text block tree to markup.
pub fn render_body(blocks: &[Block]) -> Markup {
    let mut rendered: Vec<Markup> = Vec::new();
    let mut open_list: Option<(ListKind, Vec<Markup>)> = None;

    for block in blocks {
        if block.kind == "block"
            && let Some(item) = block.list_item.as_deref()
        {
            let kind = ListKind::from_item(item);
            let li = html! { li { (render_children(block)) } };
            match &mut open_list {
                Some((open_kind, items)) if *open_kind == kind => items.push(li),
                _ => {
                    flush_list(&mut rendered, &mut open_list);
                    open_list = Some((kind, vec![li]));
                }
            }
            continue;
        }

        flush_list(&mut rendered, &mut open_list);
        rendered.push(render_block(block));
    }
    flush_list(&mut rendered, &mut open_list);

    html! {
        @for fragment in &rendered { (fragment) }
    }
}

/// Close the currently open list, if any, and emit it.
fn flush_list(rendered: &mut Vec<Markup>, open_list: &mut Option<(ListKind, Vec<Markup>)>) {
    if let Some((kind, items)) = open_list.take() {
        rendered.push(match kind {
            ListKind::Bullet => html! { ul { @for item in &items { (item) } } },
            ListKind::Number => html! { ol { @for item in &items { (item) } } },
        });
    }
}

/// Serialize one non-list block.
fn render_block(block: &Block) -> Markup {
    if block.kind != "block" {
        return default_block(block);
    }

    let children = render_children(block);
    match BlockStyle::from_style(&block.style) {
        BlockStyle::H1 => html! { h1 { (children) } },
        BlockStyle::H2 => html! { h2 { (children) } },
        BlockStyle::H3 => html! { h3 { (children) } },
        BlockStyle::H4 => html! { h4 { (children) } },
        BlockStyle::Blockquote => html! { blockquote { (children) } },
        BlockStyle::Normal | BlockStyle::Other => html! { p { (children) } },
    }
}

/// Default renderer for unrecognized block types: render whatever text
/// children it carries as a plain paragraph, dropping nothing silently
/// unless there is nothing to show.
fn default_block(block: &Block) -> Markup {
    if block.children.is_empty() {
        return html! {};
    }
    html! { p { (render_children(block)) } }
}

/// Render a block's spans in order.
fn render_children(block: &Block) -> Markup {
    html! {
        @for span in &block.children { (render_span(block, span)) }
    }
}

/// Render one span, wrapping its text in nested mark elements.
fn render_span(block: &Block, span: &Span) -> Markup {
    let mut markup = html! { (span.text) };
    for mark in &span.marks {
        markup = apply_mark(block, mark, markup);
    }
    markup
}

/// Wrap `inner` in the element for one mark. Decoration marks map to
/// fixed elements; any other mark is looked up in the block's mark
/// definitions (links). Unknown marks pass the content through unchanged.
fn apply_mark(block: &Block, mark: &str, inner: Markup) -> Markup {
    match mark {
        "strong" => html! { strong { (inner) } },
        "em" => html! { em { (inner) } },
        "code" => html! { code { (inner) } },
        "underline" => html! { u { (inner) } },
        "strike-through" => html! { del { (inner) } },
        key => match block.mark_def(key) {
            Some(def) if def.kind == "link" => match def.href.as_deref().filter(|h| is_safe_url(h))
            {
                Some(href) => html! { a href=(href) { (inner) } },
                None => inner,
            },
            _ => inner,
        },
    }
}
