//! Attribute sanitization and text encoding normalization.
//!
//! Both run as the last cleaning step, walking the tree top-down so that
//! anything produced by earlier rewrites is covered too.

use tracing::trace;

use crate::dom::{self, NodeRef};
use crate::encoding::Transcoder;
use crate::options::{AttributeWhitelist, TextScope};
use crate::patterns::DANGEROUS_SCHEME;

/// Strip non-whitelisted attributes from `root` and every element below it.
///
/// Surviving `href` values with a script-capable scheme are replaced by `#`.
/// Returns the number of attributes removed.
pub fn sanitize_attributes(root: &NodeRef, whitelist: &AttributeWhitelist) -> usize {
    let mut removed = 0;
    if let Some(tag) = dom::tag_name(root) {
        removed += sanitize_element(root, &tag, whitelist);
    }
    for element in dom::descendant_elements(root) {
        if let Some(tag) = dom::tag_name(&element) {
            removed += sanitize_element(&element, &tag, whitelist);
        }
    }
    removed
}

fn sanitize_element(element: &NodeRef, tag: &str, whitelist: &AttributeWhitelist) -> usize {
    let mut removed = 0;
    for name in dom::attribute_names(element) {
        if !whitelist.allows(tag, &name) {
            dom::remove_attribute(element, &name);
            removed += 1;
        }
    }

    if let Some(href) = dom::get_attribute(element, "href") {
        if DANGEROUS_SCHEME.is_match(&href) {
            trace!(tag, href = %href, "neutralizing href");
            dom::set_attribute(element, "href", "#");
        }
    }
    removed
}

/// Run text nodes in scope through the transcoder. Returns how many changed.
///
/// A text node is in scope when the scope covers any of its ancestor
/// elements, so nested carriers never convert the same text twice.
pub fn normalize_text(root: &NodeRef, transcoder: &Transcoder, scope: &TextScope) -> usize {
    if transcoder.is_identity() {
        return 0;
    }
    let in_scope = dom::tag_name(root).is_some_and(|tag| scope.covers(&tag));

    let mut changed = 0;
    let mut stack = vec![(*root, in_scope)];
    while let Some((node, in_scope)) = stack.pop() {
        for child in dom::child_nodes(&node).into_iter().rev() {
            if child.is_text() {
                if in_scope && normalize_node(&child, transcoder) {
                    changed += 1;
                }
            } else if let Some(tag) = dom::tag_name(&child) {
                stack.push((child, in_scope || scope.covers(&tag)));
            }
        }
    }
    changed
}

fn normalize_node(text: &NodeRef, transcoder: &Transcoder) -> bool {
    let original = dom::text_content(text);
    let normalized = transcoder.normalize(&original);
    if normalized == &*original {
        return false;
    }
    dom::replace_text(text, &normalized);
    true
}
