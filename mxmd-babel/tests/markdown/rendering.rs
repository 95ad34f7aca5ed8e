//! Rendering tests for the block and inline engines (markdown → message HTML)

use mxmd_babel::markdown::{markdown_to_html, parse_block_md, parse_inline_md};

#[test]
fn test_leftmost_span_wins() {
    assert_eq!(
        parse_inline_md("*x* **y**"),
        r#"<i data-md="*">x</i> <strong data-md="**">y</strong>"#
    );
}

#[test]
fn test_code_span_is_opaque() {
    assert_eq!(
        parse_inline_md("`*not bold*`"),
        r#"<code data-md="`">*not bold*</code>"#
    );
    assert_eq!(
        parse_inline_md("**a** `<b>`"),
        r#"<strong data-md="**">a</strong> <code data-md="`">&lt;b&gt;</code>"#
    );
}

#[test]
fn test_spans_nest() {
    assert_eq!(
        parse_inline_md("**bold _and italic_**"),
        r#"<strong data-md="**">bold <i data-md="_">and italic</i></strong>"#
    );
}

#[test]
fn test_every_span_kind() {
    assert_eq!(
        parse_inline_md("~~gone~~ ||secret|| __under__"),
        concat!(
            r#"<del data-md="~~">gone</del> "#,
            r#"<span data-mx-spoiler data-md="||">secret</span> "#,
            r#"<u data-md="__">under</u>"#
        )
    );
}

#[test]
fn test_links_keep_their_target() {
    assert_eq!(
        parse_inline_md("see [docs](https://example.org/a_b)"),
        r#"see <a data-md href="https://example.org/a_b">docs</a>"#
    );
}

#[test]
fn test_bare_urls_are_not_formatted() {
    let text = "https://example.org/some_path_here";
    assert_eq!(parse_inline_md(text), text);
}

#[test]
fn test_escaped_delimiters_render_bare() {
    assert_eq!(parse_inline_md(r"\*not italic\*"), "*not italic*");
}

#[test]
fn test_escaped_closing_delimiters_stay_inside_the_span() {
    assert_eq!(parse_inline_md(r"*a\*b*"), r#"<i data-md="*">a*b</i>"#);
    assert_eq!(
        parse_inline_md(r"**a\**b**"),
        r#"<strong data-md="**">a**b</strong>"#
    );
    assert_eq!(
        parse_inline_md(r"~~a\~~b~~"),
        r#"<del data-md="~~">a~~b</del>"#
    );
    assert_eq!(parse_inline_md(r"`a\`b`"), r#"<code data-md="`">a\`b</code>"#);
}

#[test]
fn test_link_label_keeps_nested_spans() {
    assert_eq!(
        parse_inline_md("[**b**](https://x.org)"),
        r#"<a data-md href="https://x.org"><strong data-md="**">b</strong></a>"#
    );
}

#[test]
fn test_literal_text_is_html_escaped() {
    assert_eq!(parse_inline_md("a < b & c"), "a &lt; b &amp; c");
    assert_eq!(parse_inline_md("**bold"), "**bold");
}

#[test]
fn test_message_with_every_block() {
    let md = "Release notes\n## Fixed\n- crash on *start*\n- typo\n> quoted\n```\ncode\n```";
    assert_eq!(
        markdown_to_html(md),
        concat!(
            "Release notes<br/>",
            r###"<h2 data-md="##">Fixed</h2>"###,
            r#"<ul data-md="-"><li><p>crash on <i data-md="*">start</i></p></li><li><p>typo</p></li></ul>"#,
            r#"<blockquote data-md=">">quoted<br/></blockquote>"#,
            "<pre data-md=\"```\"><code>code\n</code></pre>"
        )
    );
}

#[test]
fn test_ordered_list_start_and_type() {
    assert_eq!(
        markdown_to_html("2. b\n3. c"),
        r#"<ol data-md="2." start="2"><li><p>b</p></li><li><p>c</p></li></ol>"#
    );
    assert_eq!(
        markdown_to_html("A. alpha"),
        r#"<ol data-md="A." type="A"><li><p>alpha</p></li></ol>"#
    );
}

#[test]
fn test_code_block_language_and_escaping() {
    assert_eq!(
        markdown_to_html("```html\n<b>hi</b>\n```"),
        "<pre data-md=\"```\"><code class=\"language-html\">&lt;b&gt;hi&lt;/b&gt;\n</code></pre>"
    );
}

#[test]
fn test_incomplete_blocks_stay_text() {
    assert_eq!(markdown_to_html("#hashtag"), "#hashtag");
    assert_eq!(markdown_to_html("- "), "- ");
    assert_eq!(markdown_to_html("1.no space"), "1.no space");
}

#[test]
fn test_block_engine_without_inline_parser() {
    assert_eq!(
        parse_block_md("> *a*", None),
        r#"<blockquote data-md=">">*a*<br/></blockquote>"#
    );
}
