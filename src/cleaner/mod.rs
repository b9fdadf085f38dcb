//! Structural cleaning pipeline.
//!
//! Rewrites run in a fixed order because later passes operate on what the
//! earlier ones produced:
//!
//! 1. head removal
//! 2. tag unwrapping
//! 3. adjacent same-tag merge
//! 4. scoped nested-tag removal
//! 5. bullet-paragraph consolidation
//! 6. attribute sanitization and text encoding normalization
//! 7. question/answer restructuring

pub mod attributes;
pub mod bullets;
pub mod qa;
pub mod structure;

use tracing::debug;

use crate::dom::{self, Document};
use crate::encoding::{self, Transcoder};
use crate::error::Result;
use crate::options::Options;

/// Clean an HTML string and return the body's inner markup.
///
/// The transcoder is resolved before the tree is touched, so an unsupported
/// charset aborts without doing any work.
pub(crate) fn clean_html(html: &str, options: &Options) -> Result<String> {
    if html.trim().is_empty() {
        return Ok(String::new());
    }

    let declared = encoding::declared_charset(html);
    let transcoder = Transcoder::for_document(
        declared.as_deref(),
        options.fallback_codepage,
        options.target_codepage,
    )?;

    let doc = dom::parse(html);
    clean_document(&doc, &transcoder, options);
    Ok(dom::inner_html(&dom::body_or_root(&doc)).to_string())
}

/// Apply every cleaning stage to a parsed document in place.
pub fn clean_document(doc: &Document, transcoder: &Transcoder, options: &Options) {
    let head_removed = structure::remove_head(doc);
    let body = dom::body_or_root(doc);

    let unwrapped = structure::unwrap_tags(&body, &options.unwrap_tags);
    let merged = structure::merge_adjacent(&body, &options.merge_tags);
    let scoped: usize = options
        .scoped_unwraps
        .iter()
        .map(|scoped| structure::remove_scoped(&body, scoped))
        .sum();
    debug!(head_removed, unwrapped, merged, scoped, "structural rewrites");

    if options.consolidate_bullets {
        let items = bullets::consolidate_bullets(&body, options.bullet_glyph);
        debug!(items, "bullet paragraphs consolidated");
    }

    let stripped = attributes::sanitize_attributes(&body, &options.attributes);
    if transcoder.is_identity() {
        debug!(encoding = transcoder.source().name(), "source matches target, text left as is");
    } else {
        let normalized = attributes::normalize_text(&body, transcoder, &options.text_scope);
        debug!(
            source = transcoder.source().name(),
            target = transcoder.target().name(),
            normalized,
            "text re-encoded"
        );
    }
    debug!(stripped, "attributes sanitized");

    if options.restructure_qa {
        let pairs = qa::restructure_qa(&body);
        debug!(pairs, "question/answer pairs restructured");
    }
}
