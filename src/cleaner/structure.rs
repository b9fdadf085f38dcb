//! Structural rewrites: head removal, tag unwrapping, adjacent merge and
//! scoped nested-tag removal.

use crate::dom::{self, Document, NodeRef};
use crate::options::{contains_name, ScopedUnwrap};

/// Remove the `<head>` subtree. Returns true if one was present.
pub fn remove_head(doc: &Document) -> bool {
    dom::remove_matching(doc, "head") > 0
}

/// Unwrap every element named in `tags` below `root`.
pub fn unwrap_tags(root: &NodeRef, tags: &[String]) -> usize {
    if tags.is_empty() {
        return 0;
    }
    dom::unwrap_where(root, |node| {
        dom::tag_name(node).is_some_and(|tag| contains_name(tags, &tag))
    })
}

/// Merge directly adjacent siblings that share a mergeable tag name.
///
/// The second element's children are appended to the first and the second
/// is removed. After each merge the new next sibling is checked again, so a
/// run of any length collapses into its first element. Runs are merged at
/// every depth, including runs created inside an element by a merge.
pub fn merge_adjacent(root: &NodeRef, tags: &[String]) -> usize {
    if tags.is_empty() {
        return 0;
    }

    let mut merged = 0;
    let mut parents = vec![*root];
    while let Some(parent) = parents.pop() {
        let mut current = parent.first_child();
        while let Some(node) = current {
            if let Some(tag) = dom::tag_name(&node).filter(|t| contains_name(tags, t)) {
                while let Some(next) = node.next_sibling() {
                    if !dom::has_tag(&next, &tag) {
                        break;
                    }
                    dom::move_children(&next, &node);
                    dom::remove(&next);
                    merged += 1;
                }
            }
            if node.is_element() {
                parents.push(node);
            }
            current = node.next_sibling();
        }
    }
    merged
}

/// Unwrap the removal tag wherever it sits strictly inside a container.
pub fn remove_scoped(root: &NodeRef, scoped: &ScopedUnwrap) -> usize {
    let containers: Vec<NodeRef> = dom::descendant_elements(root)
        .into_iter()
        .filter(|n| dom::tag_name(n).is_some_and(|tag| contains_name(&scoped.containers, &tag)))
        .collect();

    containers
        .iter()
        .map(|container| dom::unwrap_where(container, |n| dom::has_tag(n, &scoped.remove)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;

    fn body_html(doc: &Document) -> String {
        dom::inner_html(&dom::body_or_root(doc)).to_string()
    }

    #[test]
    fn test_remove_head() {
        let doc = dom::parse("<html><head><title>T</title></head><body><p>x</p></body></html>");
        assert!(remove_head(&doc));
        assert!(doc.select("title").is_empty());
        assert_eq!(body_html(&doc), "<p>x</p>");
    }

    #[test]
    fn test_unwrap_tags_drops_attributes_keeps_order() {
        let doc = dom::parse(r#"<p>a <font color="red">b <i>c</i></font> d</p><font>e</font>"#);
        let count = unwrap_tags(&dom::body_or_root(&doc), &tags::owned(&["font"]));

        assert_eq!(count, 2);
        assert_eq!(body_html(&doc), "<p>a b <i>c</i> d</p>e");
    }

    #[test]
    fn test_unwrap_tags_empty_list() {
        let doc = dom::parse("<font>x</font>");
        assert_eq!(unwrap_tags(&dom::body_or_root(&doc), &[]), 0);
        assert_eq!(body_html(&doc), "<font>x</font>");
    }

    #[test]
    fn test_merge_two() {
        let doc = dom::parse("<b>x</b><b>y</b>");
        let merged = merge_adjacent(&dom::body_or_root(&doc), &tags::owned(&["b"]));

        assert_eq!(merged, 1);
        assert_eq!(body_html(&doc), "<b>xy</b>");
    }

    #[test]
    fn test_merge_cascades_over_run() {
        let doc = dom::parse("<p><i>1</i><i>2</i><i>3</i><i>4</i> tail</p>");
        let merged = merge_adjacent(&dom::body_or_root(&doc), &tags::owned(&["i"]));

        assert_eq!(merged, 3);
        assert_eq!(body_html(&doc), "<p><i>1234</i> tail</p>");
    }

    #[test]
    fn test_merge_broken_by_text() {
        let doc = dom::parse("<b>x</b> <b>y</b>");
        let merged = merge_adjacent(&dom::body_or_root(&doc), &tags::owned(&["b"]));

        assert_eq!(merged, 0);
        assert_eq!(body_html(&doc), "<b>x</b> <b>y</b>");
    }

    #[test]
    fn test_merge_only_same_tag() {
        let doc = dom::parse("<b>x</b><i>y</i><b>z</b>");
        let merged = merge_adjacent(&dom::body_or_root(&doc), &tags::owned(&["b", "i"]));

        assert_eq!(merged, 0);
    }

    #[test]
    fn test_merge_ignores_unlisted_tags() {
        let doc = dom::parse("<p>one</p><p>two</p>");
        let merged = merge_adjacent(&dom::body_or_root(&doc), &tags::owned(&["b"]));

        assert_eq!(merged, 0);
        assert_eq!(body_html(&doc), "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_merge_deep_tree() {
        let depth = 5_000;
        let doc = dom::parse(&format!("{}<b>x</b><b>y</b>{}", "<div>".repeat(depth), "</div>".repeat(depth)));
        assert_eq!(merge_adjacent(&dom::body_or_root(&doc), &["b".to_string()]), 1);
        assert!(body_html(&doc).contains("<b>xy</b>"));
    }

    #[test]
    fn test_merge_nested_runs_created_by_merge() {
        let doc = dom::parse("<b><i>a</i></b><b><i>b</i></b>");
        let merged = merge_adjacent(&dom::body_or_root(&doc), &tags::owned(&["b", "i"]));

        assert_eq!(merged, 2);
        assert_eq!(body_html(&doc), "<b><i>ab</i></b>");
    }

    #[test]
    fn test_remove_scoped_inside_headings_only() {
        let doc = dom::parse("<h2>A <b>bold</b> title</h2><p>keep <b>this</b></p><h3><b>x</b></h3>");
        let scoped = ScopedUnwrap::new(tags::HEADING_TAGS, "b");
        let count = remove_scoped(&dom::body_or_root(&doc), &scoped);

        assert_eq!(count, 2);
        assert_eq!(body_html(&doc), "<h2>A bold title</h2><p>keep <b>this</b></p><h3>x</h3>");
    }

    #[test]
    fn test_remove_scoped_deep_descendant() {
        let doc = dom::parse("<h1><a href=\"/x\"><b>deep</b></a></h1>");
        let scoped = ScopedUnwrap::new(["h1"], "b");
        remove_scoped(&dom::body_or_root(&doc), &scoped);

        assert_eq!(body_html(&doc), "<h1><a href=\"/x\">deep</a></h1>");
    }
}
