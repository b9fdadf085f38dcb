//! Block extraction.
//!
//! Walks the cleaned body left to right and classifies each recognized
//! construct into one [`Block`]. Unrecognized elements are transparent:
//! their children are visited as if they stood in the element's place.

use tracing::debug;

use crate::cleaner;
use crate::dom::{self, NodeRef};
use crate::error::Result;
use crate::inline::sanitize_fragment;
use crate::options::Options;
use crate::result::{
    Block, BlockDocument, CodeData, HeaderData, ImageData, ListData, ListStyle, ParagraphData,
    QuoteData, TableData,
};
use crate::tags;
use crate::text::{fold_whitespace, normalized_inner_html};

/// Clean `html`, then extract its blocks.
pub(crate) fn extract_document(html: &str, options: &Options) -> Result<BlockDocument> {
    if html.trim().is_empty() {
        return Ok(BlockDocument::empty());
    }

    let cleaned = cleaner::clean_html(html, options)?;
    let doc = dom::parse(&cleaned);
    for tag in &options.discard_tags {
        dom::remove_matching(&doc, tag);
    }

    let blocks = extract_blocks_from(&dom::body_or_root(&doc), options);
    debug!(blocks = blocks.len(), "blocks extracted");
    Ok(BlockDocument::new(blocks))
}

/// Extract blocks from the children of `root`, in document order.
#[must_use]
pub fn extract_blocks_from(root: &NodeRef, options: &Options) -> Vec<Block> {
    let extractor = BlockExtractor { options };
    let mut blocks = Vec::new();

    // Pending nodes, next one on top
    let mut stack: Vec<NodeRef> = dom::child_nodes(root).into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        match extractor.classify(&node) {
            Visit::Emit(block) => blocks.push(block),
            Visit::Skip => {}
            Visit::Descend => stack.extend(dom::child_nodes(&node).into_iter().rev()),
        }
    }
    blocks
}

/// What the walk does with one node.
enum Visit {
    Emit(Block),
    Skip,
    /// Transparent container: visit the children in its place.
    Descend,
}

struct BlockExtractor<'o> {
    options: &'o Options,
}

impl BlockExtractor<'_> {
    fn classify(&self, node: &NodeRef) -> Visit {
        if node.is_text() {
            let text = fold_whitespace(&dom::text_content(node));
            if text.is_empty() {
                return Visit::Skip;
            }
            let text = self.sanitize(&html_escape::encode_text(&text));
            return Visit::Emit(Block::Paragraph(ParagraphData { text }));
        }
        let Some(tag) = dom::tag_name(node) else {
            return Visit::Skip;
        };

        let block = match tag.as_str() {
            "p" => Block::Paragraph(ParagraphData {
                text: self.sanitize_inner(node),
            }),
            "ul" => self.list(node, ListStyle::Unordered),
            "ol" => self.list(node, ListStyle::Ordered),
            "pre" => code(node),
            "blockquote" => Block::Quote(QuoteData {
                text: self.sanitize_inner(node),
                caption: String::new(),
            }),
            "img" => return self.image(node).map_or(Visit::Skip, Visit::Emit),
            "table" => self.table(node),
            _ if tags::is_header_like(&tag) => Block::Header(HeaderData {
                text: self.sanitize_inner(node),
                level: tags::header_level(&tag),
            }),
            _ => return Visit::Descend,
        };
        Visit::Emit(block)
    }

    fn sanitize(&self, fragment: &str) -> String {
        sanitize_fragment(fragment, self.options)
    }

    fn sanitize_inner(&self, node: &NodeRef) -> String {
        self.sanitize(&normalized_inner_html(node))
    }

    fn list(&self, list: &NodeRef, style: ListStyle) -> Block {
        let items = dom::element_children(list)
            .iter()
            .filter(|child| dom::has_tag(child, "li"))
            .map(|li| self.sanitize_inner(li))
            .collect();
        Block::List(ListData { style, items })
    }

    fn image(&self, img: &NodeRef) -> Option<Block> {
        let src = dom::get_attribute(img, "src").filter(|src| !src.is_empty())?;
        let alt = dom::get_attribute(img, "alt").unwrap_or_default();
        let caption = self.sanitize(&html_escape::encode_text(&alt));
        Some(Block::Image(ImageData::new(src, caption)))
    }

    fn table(&self, table: &NodeRef) -> Block {
        let rows = dom::find_all(table, "tr");
        let with_headings = dom::find_first(table, "thead").is_some()
            || rows.first().is_some_and(|tr| {
                dom::element_children(tr).iter().any(|cell| dom::has_tag(cell, "th"))
            });

        let content = rows
            .iter()
            .map(|tr| {
                dom::element_children(tr)
                    .iter()
                    .filter(|cell| dom::has_tag(cell, "th") || dom::has_tag(cell, "td"))
                    .map(|cell| self.sanitize_inner(cell))
                    .collect()
            })
            .collect();
        Block::Table(TableData { with_headings, content })
    }
}

/// Code block from `<pre>`, preferring the text of a nested `<code>`.
fn code(pre: &NodeRef) -> Block {
    let source = dom::find_first(pre, "code").unwrap_or(*pre);
    Block::Code(CodeData {
        code: dom::text_content(&source).to_string(),
    })
}
