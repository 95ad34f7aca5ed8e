//! Escaping tests: literal text must survive the rule engines

use mxmd_babel::markdown::{
    escape_markdown_inline_sequences, escape_markdown_line_start, markdown_to_html,
    unescape_markdown_line_start,
};

#[test]
fn test_line_start_escaping() {
    assert_eq!(escape_markdown_line_start("> **quote**"), r"\> \*\*quote\*\*");
    assert_eq!(escape_markdown_line_start("1. first"), r"\1. first");
    assert_eq!(escape_markdown_line_start("not # heading"), "not # heading");
}

#[test]
fn test_line_start_unescaping() {
    assert_eq!(unescape_markdown_line_start(r"\> \*\*quote\*\*"), "> **quote**");
    assert_eq!(unescape_markdown_line_start(r"\1. first"), "1. first");
    assert_eq!(unescape_markdown_line_start("plain"), "plain");
}

#[test]
fn test_inline_escaping_leaves_backslashes_alone() {
    assert_eq!(escape_markdown_inline_sequences("snake_case"), r"snake\_case");
    assert_eq!(escape_markdown_inline_sequences(r"a\b"), r"a\b");
}

#[test]
fn test_escaped_text_renders_literally() {
    let escaped = escape_markdown_line_start("# *hi*");
    assert_eq!(escaped, r"\# \*hi\*");
    assert_eq!(markdown_to_html(&escaped), "# *hi*");
}

#[test]
fn test_escaped_list_marker_renders_literally() {
    let escaped = escape_markdown_line_start("- ~~x~~");
    assert_eq!(markdown_to_html(&escaped), "- ~~x~~");
}
