//! Block types for extraction output.
//!
//! A [`BlockDocument`] is the editor-facing form of a page: an ordered list
//! of typed blocks plus a timestamp and schema version. Each block
//! serializes as `{"type": <kind>, "data": {...}}`.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Schema version written into every block document.
pub const SCHEMA_VERSION: &str = "2.23.0";

/// One unit of structured content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Block {
    /// `<p>` or loose text.
    Paragraph(ParagraphData),
    /// `h1`-`h6`, or any other `h<digits>` element.
    Header(HeaderData),
    /// `<ul>` or `<ol>`.
    List(ListData),
    /// `<blockquote>`.
    Quote(QuoteData),
    /// `<img>` with a non-empty `src`.
    Image(ImageData),
    /// `<table>`.
    Table(TableData),
    /// `<pre>`, optionally wrapping `<code>`.
    Code(CodeData),
}

impl Block {
    /// Block kind as written to the `type` field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Header(_) => "header",
            Block::List(_) => "list",
            Block::Quote(_) => "quote",
            Block::Image(_) => "image",
            Block::Table(_) => "table",
            Block::Code(_) => "code",
        }
    }
}

/// Paragraph block data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphData {
    /// Sanitized inline markup.
    pub text: String,
}

/// Header block data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    /// Sanitized inline markup.
    pub text: String,
    /// Heading level, always in 1..=6.
    pub level: u8,
}

/// List ordering, serialized as `"ordered"` / `"unordered"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Numbered list (`<ol>`).
    Ordered,
    /// Bulleted list (`<ul>`).
    Unordered,
}

/// List block data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListData {
    /// Ordered or unordered, from the list element's tag.
    pub style: ListStyle,
    /// Sanitized inline markup of each direct `<li>`.
    pub items: Vec<String>,
}

/// Quote block data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteData {
    /// Sanitized inline markup of the whole quote.
    pub text: String,
    /// Attribution. Always empty.
    pub caption: String,
}

/// Image location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFile {
    /// The `src` attribute, verbatim.
    pub url: String,
}

/// Image block data. The display flags are always written as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    /// Where the image lives.
    pub file: ImageFile,
    /// Escaped and sanitized `alt` text.
    pub caption: String,
    /// Draw a border around the image.
    pub with_border: bool,
    /// Stretch the image to the editor width.
    pub stretched: bool,
    /// Show the image on a background.
    pub with_background: bool,
}

impl ImageData {
    /// Image block with every display flag off.
    #[must_use]
    pub fn new(url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            file: ImageFile { url: url.into() },
            caption: caption.into(),
            with_border: false,
            stretched: false,
            with_background: false,
        }
    }
}

/// Table block data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
    /// True when the table has a `<thead>` or its first row holds a `<th>`.
    pub with_headings: bool,
    /// One row per `<tr>`, one cell per `<th>`/`<td>`.
    pub content: Vec<Vec<String>>,
}

/// Code block data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeData {
    /// Raw text, not sanitized.
    pub code: String,
}

/// Ordered blocks plus generation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDocument {
    /// Generation time in epoch milliseconds.
    pub time: i64,
    /// Blocks in document order.
    pub blocks: Vec<Block>,
    /// Editor schema version, [`SCHEMA_VERSION`] for generated documents.
    pub version: String,
}

impl BlockDocument {
    /// Wrap blocks, stamping the current time and schema version.
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            time: Utc::now().timestamp_millis(),
            blocks,
            version: SCHEMA_VERSION.to_string(),
        }
    }

    /// Document without blocks.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Serialize a block document to compact JSON.
pub fn to_json(doc: &BlockDocument) -> Result<String> {
    Ok(serde_json::to_string(doc)?)
}
