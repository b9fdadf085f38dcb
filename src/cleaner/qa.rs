//! Question/answer restructuring.
//!
//! FAQ sections usually end a document: a heading followed by alternating
//! question and answer paragraphs. Each pair after the last heading becomes
//!
//! ```html
//! <details><summary>question</summary><p>answer</p></details>
//! ```
//!
//! A question paragraph gives up its content to the summary; any other
//! question element moves into the summary whole. The answer element moves
//! into the disclosure as is, so lists and tables stay intact.

use crate::dom::{self, NodeRef};
use crate::tags;

/// The last `h1`-`h6` element below `root`, in document order.
#[must_use]
pub fn last_heading<'a>(root: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    dom::descendant_elements(root)
        .into_iter()
        .rev()
        .find(|n| dom::tag_name(n).is_some_and(|tag| tags::is_heading_tag(&tag)))
}

/// Wrap question/answer pairs following the last heading in disclosure
/// elements. Returns the number of pairs converted.
///
/// A trailing element without an answer is left where it is.
pub fn restructure_qa(root: &NodeRef) -> usize {
    let Some(heading) = last_heading(root) else {
        return 0;
    };

    let trailing = dom::following_element_siblings(&heading);
    let mut pairs = 0;
    for pair in trailing.chunks_exact(2) {
        let (question, answer) = (&pair[0], &pair[1]);

        let details = dom::create_element(root, "details");
        let summary = dom::create_element(root, "summary");
        dom::insert_before(question, &details);
        dom::append_child(&details, &summary);

        if dom::has_tag(question, "p") {
            dom::move_children(question, &summary);
            dom::remove(question);
        } else {
            dom::append_child(&summary, question);
        }
        dom::append_child(&details, answer);
        pairs += 1;
    }
    pairs
}
