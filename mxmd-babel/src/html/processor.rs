//! Text processors applied to HTML text on its way into the editor.

use crate::markdown::{escape_markdown_inline_sequences, escape_markdown_line_start};

/// Transforms text nodes while they are converted.
///
/// The converter calls `process_line_start_text` for the first text of a
/// fresh line and `process_text` for everything else.
pub trait TextProcessor {
    fn process_text(&self, text: &str) -> String;

    fn process_line_start_text(&self, text: &str) -> String {
        self.process_text(text)
    }
}

/// Leaves text untouched. Used when the editor is not in markdown mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl TextProcessor for Verbatim {
    fn process_text(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Backslash-escapes markdown sequences so literal text stays literal once the
/// editor content is parsed as markdown again.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownEscaper;

impl TextProcessor for MarkdownEscaper {
    fn process_text(&self, text: &str) -> String {
        escape_markdown_inline_sequences(text)
    }

    fn process_line_start_text(&self, text: &str) -> String {
        escape_markdown_line_start(text)
    }
}
