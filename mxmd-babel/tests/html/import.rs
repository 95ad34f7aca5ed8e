//! Import tests for message HTML (HTML → editor blocks)

use mxmd_babel::ir::nodes::{
    Block, BlockQuote, CodeBlock, CodeLine, Emoticon, Heading, HeadingLevel, Inline, List,
    ListItem, Mark, Marks, Mention, Paragraph, QuoteLine,
};
use mxmd_babel::transforms::{
    html_to_editor_input, html_to_editor_input_with_options, plain_to_editor_input,
    ConvertOptions,
};

fn paragraphs(texts: &[&str]) -> Vec<Block> {
    texts
        .iter()
        .map(|text| Block::Paragraph(Paragraph::from_text(*text)))
        .collect()
}

fn bold(text: &str) -> Inline {
    Inline::marked(text, Marks::default().with(Mark::Bold))
}

#[test]
fn test_headings_are_clamped_to_three_levels() {
    assert_eq!(
        html_to_editor_input("<h5>Deep</h5>", false),
        vec![Block::Heading(Heading {
            level: HeadingLevel::new(3),
            children: vec![Inline::text("Deep")],
        })]
    );
}

#[test]
fn test_rich_formatting_becomes_marks() {
    assert_eq!(
        html_to_editor_input("<p><strong>Hi</strong> there</p>", false),
        vec![Block::Paragraph(Paragraph::new(vec![
            bold("Hi"),
            Inline::text(" there"),
        ]))]
    );
}

#[test]
fn test_user_permalink_becomes_mention() {
    let html = r#"<p>ping <a href="https://matrix.to/#/@alice:example.org">Alice</a></p>"#;
    assert_eq!(
        html_to_editor_input(html, true),
        vec![Block::Paragraph(Paragraph::new(vec![
            Inline::text("ping "),
            Inline::Mention(Mention {
                target_id: "@alice:example.org".to_string(),
                label: "Alice".to_string(),
                via_servers: vec![],
                event_id: None,
            }),
        ]))]
    );
}

#[test]
fn test_event_permalink_keeps_event_and_via() {
    let html = r#"<a href="https://matrix.to/#/!room:example.org/$ev?via=a.org">jump</a>"#;
    assert_eq!(
        html_to_editor_input(html, false),
        vec![Block::Paragraph(Paragraph::new(vec![Inline::Mention(
            Mention {
                target_id: "!room:example.org".to_string(),
                label: "jump".to_string(),
                via_servers: vec!["a.org".to_string()],
                event_id: Some("$ev".to_string()),
            }
        )]))]
    );
}

#[test]
fn test_other_links_become_literal_markdown() {
    let html = r#"<a href="https://example.org/x_y">my_site</a>"#;
    assert_eq!(
        html_to_editor_input(html, true),
        paragraphs(&[r"[my\_site](https://example.org/x_y)"])
    );
    assert_eq!(
        html_to_editor_input(html, false),
        paragraphs(&["[my_site](https://example.org/x_y)"])
    );
}

#[test]
fn test_permalink_base_is_configurable() {
    let options = ConvertOptions::default()
        .with_markdown(false)
        .with_permalink_base("https://chat.example.org");
    let html = concat!(
        r#"<a href="https://chat.example.org/#/@bob:example.org">Bob</a>"#,
        r#"<br><a href="https://matrix.to/#/@alice:example.org">Alice</a>"#
    );

    let blocks = html_to_editor_input_with_options(html, &options);
    assert_eq!(blocks.len(), 2);
    assert!(matches!(
        &blocks[0],
        Block::Paragraph(Paragraph { children }) if matches!(
            children.as_slice(),
            [Inline::Mention(Mention { target_id, .. })] if target_id == "@bob:example.org"
        )
    ));
    assert_eq!(
        blocks[1],
        Block::Paragraph(Paragraph::from_text(
            "[Alice](https://matrix.to/#/@alice:example.org)"
        ))
    );
}

#[test]
fn test_markdown_list_falls_back_to_prefixed_paragraphs() {
    let html = r#"<ol data-md="1."><li><p>one</p></li><li><p>two</p></li></ol>"#;
    assert_eq!(
        html_to_editor_input(html, true),
        paragraphs(&["1. one", "1. two"])
    );
}

#[test]
fn test_structural_lists() {
    assert_eq!(
        html_to_editor_input("<ul><li>a</li><li><b>b</b></li></ul>", false),
        vec![Block::UnorderedList(List {
            children: vec![
                ListItem {
                    children: vec![Inline::text("a")],
                },
                ListItem {
                    children: vec![bold("b")],
                },
            ],
        })]
    );
}

#[test]
fn test_structural_quote() {
    assert_eq!(
        html_to_editor_input("<blockquote><p>one</p><p>two</p></blockquote>", false),
        vec![Block::BlockQuote(BlockQuote {
            children: vec![
                QuoteLine {
                    children: vec![Inline::text("one")],
                },
                QuoteLine {
                    children: vec![Inline::text("two")],
                },
            ],
        })]
    );
}

#[test]
fn test_structural_code_block() {
    let html = "<pre><code class=\"language-rust\">let x = 1;\nlet y = *x;\n</code></pre>";
    assert_eq!(
        html_to_editor_input(html, true),
        vec![Block::CodeBlock(CodeBlock {
            children: vec![
                CodeLine {
                    text: "let x = 1;".to_string(),
                },
                CodeLine {
                    text: "let y = *x;".to_string(),
                },
            ],
        })]
    );
}

#[test]
fn test_emoticons() {
    let html = r#"<img data-mx-emoticon src="mxc://example.org/abc" alt=":wave:">"#;
    assert_eq!(
        html_to_editor_input(html, true),
        vec![Block::Paragraph(Paragraph::new(vec![Inline::Emoticon(
            Emoticon {
                src: "mxc://example.org/abc".to_string(),
                alt: ":wave:".to_string(),
            }
        )]))]
    );
    assert_eq!(
        html_to_editor_input(r#"<img data-mx-emoticon alt=":x:">"#, true),
        paragraphs(&[""])
    );
}

#[test]
fn test_scripts_and_replies_are_dropped() {
    assert_eq!(
        html_to_editor_input("<p>hi</p><script>alert(1)</script>", true),
        paragraphs(&["hi"])
    );
    assert_eq!(
        html_to_editor_input(
            "<mx-reply><blockquote>quoted</blockquote></mx-reply><p>answer</p>",
            true
        ),
        paragraphs(&["answer"])
    );
}

#[test]
fn test_empty_input_yields_one_empty_paragraph() {
    assert_eq!(html_to_editor_input("", true), paragraphs(&[""]));
    assert_eq!(plain_to_editor_input("", true), paragraphs(&[""]));
}

#[test]
fn test_plain_text_is_one_paragraph_per_line() {
    assert_eq!(
        plain_to_editor_input("# a\nb*c", true),
        paragraphs(&[r"\# a", r"b\*c"])
    );
    assert_eq!(
        plain_to_editor_input("# a\nb*c", false),
        paragraphs(&["# a", "b*c"])
    );
}
