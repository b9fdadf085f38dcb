//! Configuration options for cleaning and block extraction.
//!
//! The `Options` struct is fixed for the duration of one conversion. Tag and
//! attribute names are stored lower-cased so every lookup is
//! case-insensitive.

use std::collections::{HashMap, HashSet};

use crate::encoding::Codepage;
use crate::tags;

/// Attributes allowed to survive cleaning.
///
/// The allowed set for an element is the union of the global set and the
/// element's per-tag set.
#[derive(Debug, Clone, Default)]
pub struct AttributeWhitelist {
    global: HashSet<String>,
    per_tag: HashMap<String, HashSet<String>>,
}

impl AttributeWhitelist {
    /// Whitelist with only global attributes.
    #[must_use]
    pub fn new<I, S>(global: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            global: global.into_iter().map(|a| a.as_ref().to_ascii_lowercase()).collect(),
            per_tag: HashMap::new(),
        }
    }

    /// Add attributes allowed on a specific tag.
    #[must_use]
    pub fn with_tag<I, S>(mut self, tag: &str, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.per_tag
            .entry(tag.to_ascii_lowercase())
            .or_default()
            .extend(attributes.into_iter().map(|a| a.as_ref().to_ascii_lowercase()));
        self
    }

    /// Check if `attribute` may stay on a `tag` element.
    #[must_use]
    pub fn allows(&self, tag: &str, attribute: &str) -> bool {
        let attribute = attribute.to_ascii_lowercase();
        self.global.contains(&attribute)
            || self
                .per_tag
                .get(&tag.to_ascii_lowercase())
                .is_some_and(|allowed| allowed.contains(&attribute))
    }
}

/// A set of container tags inside which one tag is unwrapped.
#[derive(Debug, Clone)]
pub struct ScopedUnwrap {
    /// Tags whose descendants are searched.
    pub containers: Vec<String>,
    /// Tag unwrapped wherever it occurs inside a container.
    pub remove: String,
}

impl ScopedUnwrap {
    #[must_use]
    pub fn new<I, S>(containers: I, remove: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            containers: containers.into_iter().map(|c| c.as_ref().to_ascii_lowercase()).collect(),
            remove: remove.to_ascii_lowercase(),
        }
    }
}

/// Which text the encoding normalizer rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextScope {
    /// Only text below one of these elements.
    Carriers(Vec<String>),
    /// Every text node in the body.
    All,
}

impl TextScope {
    /// Check if text directly inside a `tag` element is in scope.
    #[must_use]
    pub fn covers(&self, tag: &str) -> bool {
        match self {
            TextScope::Carriers(tags) => tags.iter().any(|t| t.eq_ignore_ascii_case(tag)),
            TextScope::All => true,
        }
    }
}

/// Configuration options for a conversion.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use html_blocks::Options;
///
/// let options = Options {
///     restructure_qa: false,
///     unwrap_tags: vec!["font".to_string(), "span".to_string()],
///     ..Options::default()
/// };
/// assert!(!options.restructure_qa);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Codepage text is converted to.
    ///
    /// Default: `65001` (UTF-8)
    pub target_codepage: Codepage,

    /// Codepage assumed when the document declares no charset.
    ///
    /// Text in scope is always re-encoded from this codepage to
    /// `target_codepage`. An undeclared document that is really UTF-8 has
    /// its non-ASCII text in scope corrupted under the default: `Café` in a
    /// `<span>` comes out as `Caf\u{FFFD}`. Set this to `Codepage::UTF_8`
    /// when input is known to be UTF-8, or make sure it declares a charset.
    ///
    /// Default: `1252` (windows-1252)
    pub fallback_codepage: Codepage,

    /// Text rewritten by the encoding normalizer.
    ///
    /// Default: `TextScope::Carriers(["span"])`
    pub text_scope: TextScope,

    /// Tags replaced by their children everywhere in the body.
    ///
    /// Default: `["font"]`
    pub unwrap_tags: Vec<String>,

    /// Tags whose directly adjacent siblings of the same name are merged.
    ///
    /// Default: `["b", "strong", "i", "em", "u"]`
    pub merge_tags: Vec<String>,

    /// Tags unwrapped only inside specific containers.
    ///
    /// Default: `b` and `strong` inside `h1`-`h6`
    pub scoped_unwraps: Vec<ScopedUnwrap>,

    /// Turn paragraphs starting with `bullet_glyph` into one list.
    ///
    /// Default: `true`
    pub consolidate_bullets: bool,

    /// Leading glyph marking a bullet paragraph.
    ///
    /// Default: `'·'` (U+00B7, as written by word processor exports)
    pub bullet_glyph: char,

    /// Attributes kept by the attribute sanitizer.
    ///
    /// Default: global `id`; `a`: `href`, `title`, `target`, `rel`; `img`: `src`, `alt`
    pub attributes: AttributeWhitelist,

    /// Turn question/answer pairs after the last heading into `<details>`.
    ///
    /// Default: `true`
    pub restructure_qa: bool,

    /// Tags kept by the inline sanitizer.
    ///
    /// Default: `["strong", "b", "em", "i", "a", "code", "span"]`
    pub inline_tags: Vec<String>,

    /// Attributes kept on `<a>` by the inline sanitizer.
    ///
    /// Default: `["href", "title", "target", "rel"]`
    pub anchor_attributes: Vec<String>,

    /// Elements dropped (with content) before block extraction.
    ///
    /// Default: `["script", "style"]`
    pub discard_tags: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        let attributes = tags::TAG_ATTRIBUTES.iter().fold(
            AttributeWhitelist::new(tags::GLOBAL_ATTRIBUTES),
            |whitelist, (tag, attrs)| whitelist.with_tag(tag, attrs.iter()),
        );
        let scoped_unwraps = tags::HEADING_BOLD_TAGS
            .iter()
            .map(|remove| ScopedUnwrap::new(tags::HEADING_TAGS, remove))
            .collect();

        Self {
            target_codepage: Codepage::UTF_8,
            fallback_codepage: Codepage::WINDOWS_1252,
            text_scope: TextScope::Carriers(vec!["span".to_string()]),
            unwrap_tags: tags::owned(&tags::UNWRAP_TAGS),
            merge_tags: tags::owned(&tags::MERGE_TAGS),
            scoped_unwraps,
            consolidate_bullets: true,
            bullet_glyph: '·',
            attributes,
            restructure_qa: true,
            inline_tags: tags::owned(&tags::INLINE_TAGS),
            anchor_attributes: tags::owned(&tags::ANCHOR_ATTRIBUTES),
            discard_tags: tags::owned(&tags::DISCARD_TAGS),
        }
    }
}

/// Check if `name` is in `list`, ignoring ASCII case.
#[must_use]
pub(crate) fn contains_name(list: &[String], name: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(name))
}
