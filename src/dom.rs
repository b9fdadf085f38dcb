//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate exposing the operations the
//! cleaning and extraction stages need: parsing, element lookup, attribute
//! access and the structural edits (insert, remove, unwrap, move).
//!
//! Every function that hands out several nodes returns an owned `Vec`
//! snapshot, so callers can mutate the tree while walking the result.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document.
///
/// Parsing never fails: malformed markup is recovered the way browsers do.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The `<body>` element, or the document root when there is none.
#[must_use]
pub fn body_or_root(doc: &Document) -> NodeRef<'_> {
    doc.select("body")
        .nodes()
        .first()
        .copied()
        .unwrap_or_else(|| doc.root())
}

/// Remove every element matching a CSS selector. Returns how many matched.
pub fn remove_matching(doc: &Document, selector: &str) -> usize {
    let matched = doc.select(selector);
    let count = matched.length();
    matched.remove();
    count
}

// === Tag/Node Information ===

/// Get tag name (lowercase). `None` for text and other non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check if node is an element with the given (lowercase) tag name.
#[inline]
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|t| t == tag)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Set an attribute value
#[inline]
pub fn set_attribute(node: &NodeRef, name: &str, value: &str) {
    node.set_attr(name, value);
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(node: &NodeRef, name: &str) {
    node.remove_attr(name);
}

/// Names of all attributes on an element, in document order.
#[must_use]
pub fn attribute_names(node: &NodeRef) -> Vec<String> {
    node.attrs()
        .iter()
        .map(|attr| attr.name.local.to_string())
        .collect()
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    node.inner_html()
}

// === Tree Navigation (snapshots) ===

/// All direct child nodes, text included.
#[inline]
#[must_use]
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
}

/// Direct element children.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(|n| n.is_element()).collect()
}

/// All descendant nodes (text and comments included) in document order.
///
/// The walk keeps its own stack, so arbitrarily deep trees are fine.
#[must_use]
pub fn descendant_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = node.children().into_iter().rev().collect();
    while let Some(current) = stack.pop() {
        stack.extend(current.children().into_iter().rev());
        out.push(current);
    }
    out
}

/// All descendant elements in document order (pre-order, depth-first).
#[must_use]
pub fn descendant_elements<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    descendant_nodes(node)
        .into_iter()
        .filter(|n| n.is_element())
        .collect()
}

/// All descendant text nodes in document order.
#[must_use]
pub fn text_descendants<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    descendant_nodes(node)
        .into_iter()
        .filter(|n| n.is_text())
        .collect()
}

/// Descendant elements with the given tag name, in document order.
#[must_use]
pub fn find_all<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    descendant_elements(node)
        .into_iter()
        .filter(|n| has_tag(n, tag))
        .collect()
}

/// First descendant element with the given tag name.
#[must_use]
pub fn find_first<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    descendant_elements(node).into_iter().find(|n| has_tag(n, tag))
}

/// Element siblings after `node`, in order.
#[must_use]
pub fn following_element_siblings<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            out.push(s);
        }
        sibling = s.next_sibling();
    }
    out
}

// === Tree Manipulation ===

/// Detach a node (and its subtree) from the tree.
#[inline]
pub fn remove(node: &NodeRef) {
    node.remove_from_parent();
}

/// Create a detached element owned by the same tree as `anchor`.
#[must_use]
pub fn create_element<'a>(anchor: &NodeRef<'a>, name: &str) -> NodeRef<'a> {
    anchor.tree.new_element(name)
}

/// Move `node` so that it sits immediately before `anchor`.
pub fn insert_before(anchor: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    anchor.insert_before(node);
}

/// Move `node` to the end of `parent`'s children.
pub fn append_child(parent: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    parent.append_child(node);
}

/// Move every child of `from` to the end of `to`, preserving order.
pub fn move_children(from: &NodeRef, to: &NodeRef) {
    for child in from.children() {
        append_child(to, &child);
    }
}

/// Replace an element with its children at the same position.
///
/// The element's own tag and attributes are discarded; child order and the
/// surrounding siblings are preserved.
pub fn unwrap(node: &NodeRef) {
    for child in node.children() {
        insert_before(node, &child);
    }
    node.remove_from_parent();
}

/// Unwrap every descendant element of `root` accepted by `predicate`.
///
/// Matches are snapshotted before any edit. Returns how many were unwrapped.
pub fn unwrap_where<F>(root: &NodeRef, predicate: F) -> usize
where
    F: Fn(&NodeRef) -> bool,
{
    let matches: Vec<NodeRef> = descendant_elements(root)
        .into_iter()
        .filter(|n| predicate(n))
        .collect();
    for node in &matches {
        unwrap(node);
    }
    matches.len()
}

/// Replace a text node's content. An empty replacement removes the node.
pub fn replace_text(node: &NodeRef, text: &str) {
    if !text.is_empty() {
        let fresh = node.tree.new_text(text);
        insert_before(node, &fresh);
    }
    node.remove_from_parent();
}
