//! Round trip tests: markdown typed in the composer, rendered to HTML, then
//! opened again for editing must show the text that was typed.

use mxmd_babel::ir::nodes::{Block, Document};
use mxmd_babel::markdown::markdown_to_html;
use mxmd_babel::transforms::html_to_editor_input;

fn edit(md: &str) -> Vec<Block> {
    html_to_editor_input(&markdown_to_html(md), true)
}

fn edit_lines(md: &str) -> Vec<String> {
    let blocks = edit(md);
    assert!(
        blocks.iter().all(|block| matches!(block, Block::Paragraph(_))),
        "expected literal paragraphs for {md:?}, got {blocks:?}"
    );
    Document::new(blocks)
        .plain_text()
        .split('\n')
        .map(str::to_string)
        .collect()
}

#[test]
fn test_inline_spans_come_back_as_typed() {
    assert_eq!(edit_lines("**bold** text"), vec!["**bold** text"]);
    assert_eq!(edit_lines("`*x*`"), vec!["`*x*`"]);
    assert_eq!(edit_lines("~~a~~ ||b|| __c__ _d_"), vec!["~~a~~ ||b|| __c__ _d_"]);
}

#[test]
fn test_heading_comes_back_as_typed() {
    assert_eq!(edit_lines("# Heading"), vec!["# Heading"]);
    assert_eq!(edit_lines("### *Third*"), vec!["### *Third*"]);
}

#[test]
fn test_lines_come_back_as_paragraphs() {
    assert_eq!(edit_lines("a\nb"), vec!["a", "b"]);
    assert_eq!(edit_lines("a < b"), vec!["a < b"]);
}

#[test]
fn test_quote_comes_back_as_typed() {
    assert_eq!(edit_lines("> quote\n> more"), vec!["> quote", "> more"]);
}

#[test]
fn test_lists_come_back_with_the_first_marker() {
    assert_eq!(edit_lines("- a\n- b"), vec!["- a", "- b"]);
    assert_eq!(edit_lines("2. two\n3. three"), vec!["2. two", "2. three"]);
}

#[test]
fn test_code_block_comes_back_as_fenced_lines() {
    assert_eq!(
        edit_lines("```rust\nfn main() {}\n```"),
        vec!["```rust", "fn main() {}", "```"]
    );
}

#[test]
fn test_links_come_back_as_typed() {
    assert_eq!(
        edit_lines("[x](https://example.org)"),
        vec!["[x](https://example.org)"]
    );
}

#[test]
fn test_escaped_text_stays_escaped() {
    assert_eq!(edit_lines(r"2\*3"), vec![r"2\*3"]);
    assert_eq!(edit_lines(r"\# not a heading"), vec![r"\# not a heading"]);
}

#[test]
fn test_mixed_message() {
    let md = "Release notes\n## Fixed\n- crash on *start*\n> quoted";
    assert_eq!(
        edit_lines(md),
        vec![
            "Release notes",
            "## Fixed",
            "- crash on *start*",
            "> quoted"
        ]
    );
}

#[test]
fn test_link_label_formatting_comes_back_as_typed() {
    assert_eq!(
        edit_lines("[**b**](https://x.org)"),
        vec!["[**b**](https://x.org)"]
    );
    assert_eq!(
        edit_lines("see [a _b_ c](https://x.org/p) now"),
        vec!["see [a _b_ c](https://x.org/p) now"]
    );
}

#[test]
fn test_escaped_closing_delimiter_comes_back_escaped() {
    assert_eq!(edit_lines(r"*a\*b*"), vec![r"*a\*b*"]);
    assert_eq!(edit_lines(r"`a\`b`"), vec![r"`a\`b`"]);
}

#[test]
fn test_edited_text_renders_like_the_original() {
    for md in [r"**a\**b**", "[**b**](https://x.org)", r"~~x\~~y~~ *z*"] {
        let edited = Document::new(edit(md)).plain_text();
        assert_eq!(markdown_to_html(&edited), markdown_to_html(md), "{md:?}");
    }
}
