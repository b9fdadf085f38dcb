//! Compiled regex patterns used across the pipeline.
//!
//! All patterns are compiled once at first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Patterns
// =============================================================================

/// Matches runs of whitespace for folding to a single space.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches a single character reference: named, decimal or hex.
pub static ENTITY_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").expect("ENTITY_REFERENCE regex")
});

// =============================================================================
// URI Safety Patterns
// =============================================================================

/// Matches link targets using a script-capable scheme.
pub static DANGEROUS_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(javascript:|data:)").expect("DANGEROUS_SCHEME regex")
});

/// Matches a serialized `href` attribute whose value uses a dangerous scheme.
///
/// Applied to sanitizer output as a final text-level pass.
pub static DANGEROUS_HREF_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href\s*=\s*["']\s*(javascript:|data:)[^"']*["']"#).expect("DANGEROUS_HREF_ATTR regex")
});

// =============================================================================
// Charset Declaration Patterns
// =============================================================================

/// Match `<meta charset="...">` tag
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/]+)"#).expect("CHARSET_META regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("CONTENT_TYPE_CHARSET regex")
});
