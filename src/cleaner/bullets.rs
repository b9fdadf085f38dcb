//! Bullet-paragraph consolidation.
//!
//! Word processor exports write list items as paragraphs whose text starts
//! with a bullet glyph. Every such paragraph in the body becomes an item of
//! one `<ul>`, inserted where the first of them stood.

use crate::dom::{self, NodeRef};

/// Check if a paragraph's left-trimmed text starts with `glyph`.
#[must_use]
pub fn is_bullet_paragraph(paragraph: &NodeRef, glyph: char) -> bool {
    dom::text_content(paragraph).trim_start().starts_with(glyph)
}

/// Collect bullet paragraphs into one unordered list. Returns the item count.
///
/// Qualifying paragraphs are gathered from the whole subtree, not only from
/// a contiguous run, so bullets from separate sections share one list.
pub fn consolidate_bullets(root: &NodeRef, glyph: char) -> usize {
    let bullets: Vec<NodeRef> = dom::find_all(root, "p")
        .into_iter()
        .filter(|p| is_bullet_paragraph(p, glyph))
        .collect();

    let Some(first) = bullets.first() else {
        return 0;
    };

    let list = dom::create_element(root, "ul");
    for paragraph in &bullets {
        strip_bullet(paragraph, glyph);
        let item = dom::create_element(root, "li");
        dom::move_children(paragraph, &item);
        dom::append_child(&list, &item);
    }

    dom::insert_before(first, &list);
    for paragraph in &bullets {
        dom::remove(paragraph);
    }
    bullets.len()
}

/// Remove the leading glyph and the whitespace around the item text.
///
/// Works on text nodes so inline markup inside the paragraph survives.
fn strip_bullet(paragraph: &NodeRef, glyph: char) {
    let texts = dom::text_descendants(paragraph);
    let mut seen_glyph = false;

    for text in &texts {
        let content = dom::text_content(text);
        let mut rest = content.trim_start();
        if !seen_glyph {
            if let Some(after) = rest.strip_prefix(glyph) {
                seen_glyph = true;
                rest = after.trim_start();
            }
        }
        if rest.len() != content.len() {
            dom::replace_text(text, rest);
        }
        if seen_glyph && !rest.is_empty() {
            break;
        }
    }

    // Trailing whitespace lives in the last non-blank text node
    let remaining = dom::text_descendants(paragraph);
    if let Some(last) = remaining.iter().rev().find(|t| !dom::text_content(t).trim().is_empty()) {
        let content = dom::text_content(last);
        let trimmed = content.trim_end();
        if trimmed.len() != content.len() {
            dom::replace_text(last, trimmed);
        }
    }
}
