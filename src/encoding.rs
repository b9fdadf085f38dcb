//! Character encoding detection and text re-encoding.
//!
//! Word processors and legacy CMS exports often ship text that was decoded
//! with the wrong codepage ("CafÃ©" instead of "Café"). The [`Transcoder`]
//! reverses that: it turns text back into bytes with the source codepage,
//! reads those bytes with the target codepage and finally decodes any HTML
//! entities left in the result.

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::error::{Error, Result};
use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// Numeric codepage identifier (Windows numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codepage(pub u16);

impl Codepage {
    /// UTF-8
    pub const UTF_8: Codepage = Codepage(65001);

    /// Windows-1252 (Western European), the fallback for undeclared documents.
    pub const WINDOWS_1252: Codepage = Codepage(1252);

    /// The `encoding_rs` encoding behind this codepage.
    pub fn encoding(self) -> Result<&'static Encoding> {
        codepage_encoding(self.0).ok_or(Error::UnsupportedCodepage(self.0))
    }
}

/// Map a codepage number to its encoding.
///
/// Several ISO-8859 numbers share an encoding (`encoding_rs` follows WHATWG,
/// where ISO-8859-1 and US-ASCII are windows-1252).
fn codepage_encoding(number: u16) -> Option<&'static Encoding> {
    let encoding = match number {
        65001 => encoding_rs::UTF_8,
        1252 | 20127 | 28591 => encoding_rs::WINDOWS_1252,
        1250 => encoding_rs::WINDOWS_1250,
        1251 => encoding_rs::WINDOWS_1251,
        1253 => encoding_rs::WINDOWS_1253,
        1254 | 28599 => encoding_rs::WINDOWS_1254,
        1255 => encoding_rs::WINDOWS_1255,
        1256 => encoding_rs::WINDOWS_1256,
        1257 => encoding_rs::WINDOWS_1257,
        1258 => encoding_rs::WINDOWS_1258,
        874 => encoding_rs::WINDOWS_874,
        1200 => encoding_rs::UTF_16LE,
        1201 => encoding_rs::UTF_16BE,
        932 => encoding_rs::SHIFT_JIS,
        936 => encoding_rs::GBK,
        949 => encoding_rs::EUC_KR,
        950 => encoding_rs::BIG5,
        10000 => encoding_rs::MACINTOSH,
        20866 => encoding_rs::KOI8_R,
        21866 => encoding_rs::KOI8_U,
        28592 => encoding_rs::ISO_8859_2,
        28593 => encoding_rs::ISO_8859_3,
        28594 => encoding_rs::ISO_8859_4,
        28595 => encoding_rs::ISO_8859_5,
        28596 => encoding_rs::ISO_8859_6,
        28597 => encoding_rs::ISO_8859_7,
        28598 => encoding_rs::ISO_8859_8,
        28603 => encoding_rs::ISO_8859_13,
        28605 => encoding_rs::ISO_8859_15,
        51932 => encoding_rs::EUC_JP,
        54936 => encoding_rs::GB18030,
        _ => return None,
    };
    Some(encoding)
}

/// Charset label declared by the document, if any.
///
/// Looks for charset declarations in the following order:
/// 1. `<meta charset="...">`
/// 2. `<meta http-equiv="Content-Type" content="...; charset=...">`
///
/// Only examines the first 1024 bytes.
#[must_use]
pub fn declared_charset(html: &str) -> Option<String> {
    let mut end = html.len().min(1024);
    while !html.is_char_boundary(end) {
        end -= 1;
    }
    let head = &html[..end];

    [&*CHARSET_META, &*CONTENT_TYPE_CHARSET]
        .iter()
        .find_map(|re| re.captures(head).and_then(|c| c.get(1)))
        .map(|m| m.as_str().to_string())
}

/// Resolve the source encoding of a document.
///
/// A declared label must be known to `encoding_rs`; an unknown label is a
/// configuration error rather than something to guess around. Without a
/// declaration the fallback codepage is used.
pub fn source_encoding(declared: Option<&str>, fallback: Codepage) -> Result<&'static Encoding> {
    match declared {
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnsupportedEncoding(label.to_string())),
        None => fallback.encoding(),
    }
}

/// Re-encodes text from a source to a target encoding.
#[derive(Debug, Clone, Copy)]
pub struct Transcoder {
    source: &'static Encoding,
    target: &'static Encoding,
}

impl Transcoder {
    #[must_use]
    pub fn new(source: &'static Encoding, target: &'static Encoding) -> Self {
        Self { source, target }
    }

    /// Build a transcoder for a document's declared charset and the configured codepages.
    pub fn for_document(
        declared: Option<&str>,
        fallback: Codepage,
        target: Codepage,
    ) -> Result<Self> {
        Ok(Self::new(source_encoding(declared, fallback)?, target.encoding()?))
    }

    #[must_use]
    pub fn source(&self) -> &'static Encoding {
        self.source
    }

    #[must_use]
    pub fn target(&self) -> &'static Encoding {
        self.target
    }

    /// True when source and target are the same encoding.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }

    /// Re-encode `text` from source to target, then decode HTML entities.
    ///
    /// Identity transcoders return the input unchanged. Characters the
    /// source encoding cannot represent come out of the encoder as numeric
    /// character references, which the entity decoding step turns back into
    /// the original characters.
    #[must_use]
    pub fn normalize<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.is_identity() {
            return Cow::Borrowed(text);
        }

        let (bytes, _, _) = self.source.encode(text);
        let (decoded, _) = self.target.decode_without_bom_handling(&bytes);
        Cow::Owned(html_escape::decode_html_entities(&decoded).into_owned())
    }
}
