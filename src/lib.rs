//! # html-blocks
//!
//! Clean arbitrary HTML and extract it as typed editor blocks.
//!
//! The pipeline has two outputs: a cleaned, attribute-restricted HTML body
//! with a few structural rewrites applied, and a block document (paragraph,
//! header, list, quote, image, table, code) in the JSON shape used by
//! block-based editors.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_blocks::{clean, extract_blocks, Block};
//!
//! let cleaned = clean("<body><b>x</b><b>y</b></body>")?;
//! assert_eq!(cleaned, "<b>xy</b>");
//!
//! let doc = extract_blocks("<h1>Title</h1><p>Body text</p>")?;
//! assert_eq!(doc.blocks.len(), 2);
//! assert!(matches!(&doc.blocks[0], Block::Header(h) if h.level == 1));
//! # Ok::<(), html_blocks::Error>(())
//! ```
//!
//! ## Cleaning stages
//!
//! - **Head removal** and **tag unwrapping** (`<font>` by default)
//! - **Adjacent merge**: `<b>x</b><b>y</b>` becomes `<b>xy</b>`
//! - **Scoped unwrapping**: bold wrappers inside headings are dropped
//! - **Bullet consolidation**: `<p>· item</p>` paragraphs become one `<ul>`
//! - **Attribute whitelisting** and **text re-encoding**
//! - **Q&A restructuring**: pairs after the last heading become `<details>`
//!
//! Every call owns its own document; nothing is shared between conversions.

mod error;
mod extract;
mod inline;
mod options;
mod patterns;
mod result;
mod text;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Structural cleaning stages.
pub mod cleaner;

/// Codepages, charset detection and text re-encoding.
pub mod encoding;

/// Tag catalogs and heading levels.
pub mod tags;

// Public API - re-exports
pub use encoding::{Codepage, Transcoder};
pub use error::{Error, Result};
pub use extract::extract_blocks_from;
pub use options::{AttributeWhitelist, Options, ScopedUnwrap, TextScope};
pub use result::{
    Block, BlockDocument, CodeData, HeaderData, ImageData, ImageFile, ListData, ListStyle,
    ParagraphData, QuoteData, TableData, SCHEMA_VERSION,
};

/// Cleans an HTML document using default options.
///
/// Returns the cleaned body's inner markup, or `""` for blank input.
///
/// # Example
///
/// ```rust
/// use html_blocks::clean;
///
/// let html = "<body><h2>FAQ</h2><p>Q1</p><p>A1</p></body>";
/// assert_eq!(
///     clean(html)?,
///     "<h2>FAQ</h2><details><summary>Q1</summary><p>A1</p></details>"
/// );
/// # Ok::<(), html_blocks::Error>(())
/// ```
pub fn clean(html: &str) -> Result<String> {
    clean_with_options(html, &Options::default())
}

/// Cleans an HTML document with custom options.
///
/// Fails only when the document declares a charset, or the options name a
/// codepage, that has no known encoding.
///
/// # Example
///
/// ```rust
/// use html_blocks::{clean_with_options, Options};
///
/// let options = Options {
///     restructure_qa: false,
///     ..Options::default()
/// };
/// let cleaned = clean_with_options("<h2>FAQ</h2><p>Q</p><p>A</p>", &options)?;
/// assert_eq!(cleaned, "<h2>FAQ</h2><p>Q</p><p>A</p>");
/// # Ok::<(), html_blocks::Error>(())
/// ```
pub fn clean_with_options(html: &str, options: &Options) -> Result<String> {
    cleaner::clean_html(html, options)
}

/// Cleans an HTML document and extracts its blocks using default options.
///
/// Blank input yields a document with no blocks.
pub fn extract_blocks(html: &str) -> Result<BlockDocument> {
    extract_blocks_with_options(html, &Options::default())
}

/// Cleans an HTML document and extracts its blocks with custom options.
pub fn extract_blocks_with_options(html: &str, options: &Options) -> Result<BlockDocument> {
    extract::extract_document(html, options)
}

/// Serializes a block document to JSON.
///
/// # Example
///
/// ```rust
/// use html_blocks::{serialize, BlockDocument};
///
/// let json = serialize(&BlockDocument::empty())?;
/// assert!(json.contains(r#""blocks":[]"#));
/// assert!(json.contains(r#""version":"2.23.0""#));
/// # Ok::<(), html_blocks::Error>(())
/// ```
pub fn serialize(doc: &BlockDocument) -> Result<String> {
    result::to_json(doc)
}

/// Converts HTML straight to block JSON using default options.
pub fn html_to_editor_json(html: &str) -> Result<String> {
    serialize(&extract_blocks(html)?)
}

/// Sanitizes an inline HTML fragment using default options.
///
/// Keeps `strong`, `b`, `em`, `i`, `a`, `code` and `span`; everything else
/// is unwrapped. Links keep `href`, `title`, `target` and `rel`, and lose
/// `javascript:` or `data:` targets.
///
/// # Example
///
/// ```rust
/// use html_blocks::sanitize_inline;
///
/// let safe = sanitize_inline(r#"<div><a href="javascript:alert(1)">x</a></div>"#);
/// assert_eq!(safe, r##"<a href="#">x</a>"##);
/// ```
#[must_use]
pub fn sanitize_inline(fragment: &str) -> String {
    sanitize_inline_with_options(fragment, &Options::default())
}

/// Sanitizes an inline HTML fragment with custom options.
#[must_use]
pub fn sanitize_inline_with_options(fragment: &str, options: &Options) -> String {
    inline::sanitize_fragment(fragment, options)
}
