//! Text and inner-markup normalization helpers.

use std::borrow::Cow;

use crate::dom::{self, NodeRef};
use crate::patterns::{ENTITY_REFERENCE, WHITESPACE_NORMALIZE};

/// Collapse every whitespace run to one space and trim both ends.
#[must_use]
pub fn fold_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Decode character references in serialized markup, leaving the ones that
/// would change the markup itself (`<`, `>`, `&`, `"`) escaped.
///
/// Re-parsing the result therefore yields the same element structure as the
/// input.
#[must_use]
pub fn decode_entities_in_markup(markup: &str) -> Cow<'_, str> {
    ENTITY_REFERENCE.replace_all(markup, |caps: &regex::Captures| {
        let reference = &caps[0];
        let decoded = html_escape::decode_html_entities(reference);
        if decoded.contains(['<', '>', '&', '"']) {
            reference.to_string()
        } else {
            decoded.into_owned()
        }
    })
}

/// Inner markup of an element, entity-decoded and whitespace-folded.
#[must_use]
pub fn normalized_inner_html(node: &NodeRef) -> String {
    let inner = dom::inner_html(node);
    fold_whitespace(&decode_entities_in_markup(&inner))
}
