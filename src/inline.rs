//! Inline fragment sanitizer.
//!
//! Block text may only carry a handful of inline tags. Everything else is
//! unwrapped so its text survives, attributes are stripped except for a
//! small set on links, and links with a script-capable scheme are defused.

use tracing::trace;

use crate::dom::{self, NodeRef};
use crate::options::{contains_name, Options};
use crate::patterns::{DANGEROUS_HREF_ATTR, DANGEROUS_SCHEME};

/// Sanitize an HTML fragment down to the configured inline vocabulary.
///
/// Blank or structurally empty fragments produce `""`. Never fails:
/// malformed markup is recovered by the parser first.
#[must_use]
pub fn sanitize_fragment(fragment: &str, options: &Options) -> String {
    if fragment.trim().is_empty() {
        return String::new();
    }

    let doc = dom::parse(&format!("<div>{fragment}</div>"));
    let mut nodes = dom::child_nodes(&dom::body_or_root(&doc)).into_iter();
    let Some(container) = nodes.find(|n| n.is_element()) else {
        return String::new();
    };
    // A stray closing tag in the fragment ends the container early
    for stray in nodes {
        dom::append_child(&container, &stray);
    }

    let sanitizer = InlineSanitizer { options };
    for node in dom::descendant_nodes(&container) {
        sanitizer.visit(&node);
    }

    let html = dom::inner_html(&container);
    DANGEROUS_HREF_ATTR.replace_all(&html, r##"href="#""##).into_owned()
}

struct InlineSanitizer<'o> {
    options: &'o Options,
}

impl InlineSanitizer<'_> {
    /// Sanitize one node. Unwrapping keeps the children alive, so every
    /// node of a pre-walk snapshot can be visited in turn.
    fn visit(&self, node: &NodeRef) {
        if node.is_text() {
            return;
        }
        let Some(tag) = dom::tag_name(node) else {
            // Comments, processing instructions
            dom::remove(node);
            return;
        };

        if !contains_name(&self.options.inline_tags, &tag) {
            dom::unwrap(node);
        } else if tag == "a" {
            self.sanitize_anchor(node);
        } else {
            for name in dom::attribute_names(node) {
                dom::remove_attribute(node, &name);
            }
        }
    }

    fn sanitize_anchor(&self, anchor: &NodeRef) {
        for name in dom::attribute_names(anchor) {
            if !contains_name(&self.options.anchor_attributes, &name) {
                dom::remove_attribute(anchor, &name);
            }
        }

        let Some(href) = dom::get_attribute(anchor, "href") else {
            return;
        };
        if DANGEROUS_SCHEME.is_match(&href) {
            trace!(href = %href, "neutralizing inline href");
            dom::set_attribute(anchor, "href", "#");
        } else if !href.starts_with('#') && !href.starts_with('/') {
            dom::set_attribute(anchor, "rel", "noopener noreferrer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(fragment: &str) -> String {
        sanitize_fragment(fragment, &Options::default())
    }

    #[test]
    fn test_blank_fragment() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("  \n "), "");
    }

    #[test]
    fn test_plain_text_passes() {
        assert_eq!(sanitize("just text"), "just text");
    }

    #[test]
    fn test_inline_tags_kept_attributes_stripped() {
        assert_eq!(
            sanitize(r#"<b class="x">bold</b> <em style="c">em</em> <span lang="fr">s</span> <code id="c">c</code>"#),
            "<b>bold</b> <em>em</em> <span>s</span> <code>c</code>"
        );
    }

    #[test]
    fn test_block_tags_unwrapped() {
        assert_eq!(
            sanitize("<div>one <p>two <u>three</u></p></div> <h2>four</h2>"),
            "one two three four"
        );
    }

    #[test]
    fn test_unwrap_inside_kept_tag() {
        assert_eq!(sanitize("<strong>a <font>b</font></strong>"), "<strong>a b</strong>");
    }

    #[test]
    fn test_external_link_gets_rel() {
        assert_eq!(
            sanitize(r#"<a href="https://example.com" onclick="x()" title="t">l</a>"#),
            r#"<a href="https://example.com" title="t" rel="noopener noreferrer">l</a>"#
        );
    }

    #[test]
    fn test_local_links_untouched() {
        assert_eq!(sanitize(r##"<a href="#top">t</a>"##), r##"<a href="#top">t</a>"##);
        assert_eq!(sanitize(r#"<a href="/about">a</a>"#), r#"<a href="/about">a</a>"#);
    }

    #[test]
    fn test_anchor_without_href() {
        assert_eq!(sanitize(r#"<a name="x" target="_blank">a</a>"#), r#"<a target="_blank">a</a>"#);
    }

    #[test]
    fn test_dangerous_href_neutralized() {
        assert_eq!(sanitize(r#"<a href="javascript:alert(1)">x</a>"#), r##"<a href="#">x</a>"##);
        assert_eq!(
            sanitize(r#"<a href=" DATA:text/html,<script>">x</a>"#),
            r##"<a href="#">x</a>"##
        );
    }

    #[test]
    fn test_comments_dropped() {
        assert_eq!(sanitize("a<!-- hidden -->b"), "ab");
    }

    #[test]
    fn test_escaped_text_stays_escaped() {
        assert_eq!(sanitize("&lt;script&gt;alert(1)&lt;/script&gt;"), "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_script_content_not_executable() {
        // The element is unwrapped; its raw text comes out escaped
        let out = sanitize("<script>alert('<b>')</script>ok");
        assert!(!out.contains("<script"));
        assert!(out.ends_with("ok"));
    }

    #[test]
    fn test_stray_closing_tag_keeps_rest() {
        assert_eq!(sanitize("a</div><b>b</b>"), "a<b>b</b>");
    }

    #[test]
    fn test_nested_div_unwrapped() {
        assert_eq!(sanitize("<div><div>x</div></div>"), "x");
    }

    #[test]
    fn test_deeply_nested_fragment() {
        let depth = 5_000;
        let fragment = format!("{}<b>x</b>{}", "<div>".repeat(depth), "</div>".repeat(depth));
        assert_eq!(sanitize(&fragment), "<b>x</b>");
    }

    #[test]
    fn test_custom_inline_whitelist() {
        let options = Options {
            inline_tags: vec!["u".to_string()],
            ..Options::default()
        };
        assert_eq!(sanitize_fragment("<u>a</u><b>b</b>", &options), "<u>a</u>b");
    }
}
