//! Markdown source format
//!
//! Markdown typed in the composer is rendered to HTML by the rule engines in
//! [`crate::markdown`] and then imported like any other message HTML. The
//! resulting tree is what the editor shows when the message is edited again:
//! in markdown mode the typed delimiters come back as text.
//!
//! # Lossy Conversions
//!
//! - Ordered list items all take the first item's marker (`1.`).
//! - A trailing newline at the end of the source is dropped.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use crate::markdown::markdown_to_html;
use crate::transforms::{html_to_editor_input_with_options, ConvertOptions};

/// Format implementation for composer markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Composer markdown, rendered to HTML and imported"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, options: &ConvertOptions) -> Result<Document, FormatError> {
        let html = markdown_to_html(source);
        tracing::debug!(bytes = html.len(), "rendered markdown");
        Ok(Document::new(html_to_editor_input_with_options(
            &html, options,
        )))
    }
}
