//! Property tests for the conversion engines

use mxmd_babel::ir::nodes::{Block, Document, Paragraph};
use mxmd_babel::markdown::{
    escape_markdown_inline_sequences, escape_markdown_line_start, markdown_to_html,
    parse_inline_md, unescape_markdown_inline_sequences, unescape_markdown_line_start,
};
use mxmd_babel::transforms::{html_to_editor_input, plain_to_editor_input};
use proptest::prelude::*;

/// Text dense in markdown delimiters, across several lines.
fn markdownish() -> impl Strategy<Value = String> {
    "[a-z #>*_~`|\\\\\\[\\]().:/\n-]{0,60}"
}

/// A single line without backslashes, parentheses or HTML-significant
/// characters, starting with a visible character.
fn literal_line() -> impl Strategy<Value = String> {
    "([a-z0-9#>*_~`|.\\[\\]-][a-z0-9#>*_~`|.\\[\\] -]{0,30})?"
}

/// One word, plain or wrapped in a span or a link.
fn formatted_word() -> impl Strategy<Value = String> {
    ("[a-z]{1,6}", 0..8usize).prop_map(|(word, kind)| match kind {
        0 => format!("**{word}**"),
        1 => format!("*{word}*"),
        2 => format!("`{word}`"),
        3 => format!("~~{word}~~"),
        4 => format!("[{word}](https://x.org/{word})"),
        5 => format!("[**{word}**](https://x.org)"),
        6 => format!(r"*{word}\*{word}*"),
        _ => word,
    })
}

/// A message of well-formed lines, some of them opening a block.
fn formatted_message() -> impl Strategy<Value = String> {
    let line = (
        prop::sample::select(vec!["", "# ", "> ", "- ", "1. "]),
        prop::collection::vec(formatted_word(), 1..6),
    )
        .prop_map(|(prefix, words)| format!("{prefix}{}", words.join(" ")));
    prop::collection::vec(line, 1..4).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_engines_terminate(text in markdownish()) {
        let html = markdown_to_html(&text);
        let blocks = html_to_editor_input(&html, true);
        prop_assert!(!blocks.is_empty());
    }

    #[test]
    fn test_arbitrary_html_yields_blocks(text in any::<String>()) {
        prop_assert!(!html_to_editor_input(&text, true).is_empty());
        prop_assert!(!html_to_editor_input(&text, false).is_empty());
    }

    #[test]
    fn test_inline_escape_round_trip(text in any::<String>()) {
        let escaped = escape_markdown_inline_sequences(&text);
        prop_assert_eq!(unescape_markdown_inline_sequences(&escaped), text);
    }

    #[test]
    fn test_line_start_escape_round_trip(text in "[^\n\\\\]{0,40}") {
        let escaped = escape_markdown_line_start(&text);
        prop_assert_eq!(unescape_markdown_line_start(&escaped), text);
    }

    #[test]
    fn test_escaped_inline_text_renders_literally(text in "[^\\\\\\[\n]{0,40}") {
        let escaped = escape_markdown_inline_sequences(&text);
        prop_assert_eq!(
            parse_inline_md(&escaped),
            html_escape::encode_text(&text).into_owned()
        );
    }

    #[test]
    fn test_escaped_line_survives_an_edit(text in literal_line()) {
        let escaped = escape_markdown_line_start(&text);
        let blocks = html_to_editor_input(&markdown_to_html(&escaped), true);
        prop_assert_eq!(blocks, vec![Block::Paragraph(Paragraph::from_text(escaped))]);
    }

    #[test]
    fn test_edited_message_renders_like_the_original(md in formatted_message()) {
        let blocks = html_to_editor_input(&markdown_to_html(&md), true);
        let edited = Document::new(blocks).plain_text();
        prop_assert_eq!(markdown_to_html(&edited), markdown_to_html(&md));
    }

    #[test]
    fn test_plain_text_has_one_paragraph_per_line(text in "[a-z*#\n ]{0,40}") {
        let blocks = plain_to_editor_input(&text, true);
        prop_assert_eq!(blocks.len(), text.split('\n').count());
    }
}
