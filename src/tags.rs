//! Tag catalogs and default whitelists.
//!
//! Arrays are used for iteration and for building the configurable lists in
//! [`Options`](crate::Options); the lookup helpers here only cover the fixed
//! vocabulary (headings, block constructs).

/// Heading tags: h1-h6
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Inline tags that survive fragment sanitization.
pub static INLINE_TAGS: [&str; 7] = ["strong", "b", "em", "i", "a", "code", "span"];

/// Attributes kept on `<a>` by the inline sanitizer.
pub static ANCHOR_ATTRIBUTES: [&str; 4] = ["href", "title", "target", "rel"];

/// Wrapper tags unwrapped by default during cleaning.
pub static UNWRAP_TAGS: [&str; 1] = ["font"];

/// Formatting tags whose adjacent runs are merged.
pub static MERGE_TAGS: [&str; 5] = ["b", "strong", "i", "em", "u"];

/// Bold wrappers stripped from inside headings.
pub static HEADING_BOLD_TAGS: [&str; 2] = ["b", "strong"];

/// Elements removed before block extraction.
pub static DISCARD_TAGS: [&str; 2] = ["script", "style"];

/// Attributes allowed on every element.
pub static GLOBAL_ATTRIBUTES: [&str; 1] = ["id"];

/// Per-tag attribute additions: `(tag, attributes)`.
pub static TAG_ATTRIBUTES: [(&str, &[&str]); 2] = [
    ("a", &["href", "title", "target", "rel"]),
    ("img", &["src", "alt"]),
];

/// Level used when a heading suffix is missing, non-numeric or out of range.
pub const DEFAULT_HEADER_LEVEL: u8 = 2;

/// Check if tag is one of h1-h6.
#[inline]
#[must_use]
pub fn is_heading_tag(tag: &str) -> bool {
    HEADING_TAGS.contains(&tag)
}

/// Check if tag looks like a heading: `h` followed by digits only.
///
/// Wider than [`is_heading_tag`] so that `<h7>` or `<h10>` still produce a
/// header block instead of being treated as an anonymous container.
#[must_use]
pub fn is_header_like(tag: &str) -> bool {
    tag.strip_prefix('h')
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Header level for a heading tag name.
///
/// The numeric suffix is used when it lies in 1..=6; anything else falls
/// back to [`DEFAULT_HEADER_LEVEL`].
#[must_use]
pub fn header_level(tag: &str) -> u8 {
    tag.get(1..)
        .and_then(|suffix| suffix.parse::<u8>().ok())
        .filter(|level| (1..=6).contains(level))
        .unwrap_or(DEFAULT_HEADER_LEVEL)
}

/// Owned copy of a static tag list.
#[must_use]
pub fn owned(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| (*t).to_string()).collect()
}
