//! Integration tests for the inline fragment sanitizer.

use html_blocks::{sanitize_inline, sanitize_inline_with_options, Options};

#[test]
fn keeps_whitelisted_inline_tags() {
    let fragment = "<strong>s</strong><b>b</b><em>e</em><i>i</i><code>c</code><span>sp</span>";
    assert_eq!(sanitize_inline(fragment), fragment);
}

#[test]
fn unwraps_everything_else() {
    assert_eq!(
        sanitize_inline("<p>Para <u>under</u> <table><tr><td>cell</td></tr></table></p>"),
        "Para under cell"
    );
}

#[test]
fn javascript_href_becomes_placeholder() {
    assert_eq!(
        sanitize_inline(r#"<a href="javascript:alert(1)" title="t">x</a>"#),
        r##"<a href="#" title="t">x</a>"##
    );
}

#[test]
fn data_href_becomes_placeholder() {
    assert_eq!(
        sanitize_inline(r#"<a href="data:text/html,<script>alert(1)</script>">x</a>"#),
        r##"<a href="#">x</a>"##
    );
}

#[test]
fn scheme_check_is_case_insensitive() {
    assert_eq!(sanitize_inline(r#"<a href="JaVaScRiPt:void(0)">x</a>"#), r##"<a href="#">x</a>"##);
}

#[test]
fn external_links_get_noopener() {
    assert_eq!(
        sanitize_inline(r#"<a href="http://example.com/page" target="_blank">x</a>"#),
        r#"<a href="http://example.com/page" target="_blank" rel="noopener noreferrer">x</a>"#
    );
}

#[test]
fn existing_rel_is_overwritten_for_external_links() {
    assert_eq!(
        sanitize_inline(r#"<a rel="nofollow" href="mailto:me@example.com">m</a>"#),
        r#"<a rel="noopener noreferrer" href="mailto:me@example.com">m</a>"#
    );
}

#[test]
fn fragment_and_root_links_left_alone() {
    assert_eq!(sanitize_inline(r##"<a href="#s">s</a>"##), r##"<a href="#s">s</a>"##);
    assert_eq!(sanitize_inline(r#"<a href="/p">p</a>"#), r#"<a href="/p">p</a>"#);
}

#[test]
fn anchor_attributes_outside_whitelist_dropped() {
    assert_eq!(
        sanitize_inline(r#"<a href="/p" class="c" onmouseover="x()" id="i" title="t">p</a>"#),
        r#"<a href="/p" title="t">p</a>"#
    );
}

#[test]
fn blank_and_empty_fragments() {
    assert_eq!(sanitize_inline(""), "");
    assert_eq!(sanitize_inline("   "), "");
    assert_eq!(sanitize_inline("<div></div>"), "");
}

#[test]
fn malformed_fragment_does_not_fail() {
    let out = sanitize_inline("<b>unclosed <i>tags");
    assert_eq!(out, "<b>unclosed <i>tags</i></b>");
}

#[test]
fn custom_anchor_whitelist() {
    let options = Options {
        anchor_attributes: vec!["href".to_string()],
        ..Options::default()
    };
    assert_eq!(
        sanitize_inline_with_options(r#"<a href="/x" title="t">x</a>"#, &options),
        r#"<a href="/x">x</a>"#
    );
}
