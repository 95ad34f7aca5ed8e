//! HTML source format
//!
//! Imports message HTML (`formatted_body`) into an editor document. See
//! [`crate::html`] for the element mapping.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use crate::transforms::{html_to_editor_input_with_options, ConvertOptions};

/// Format implementation for message HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Matrix message HTML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, options: &ConvertOptions) -> Result<Document, FormatError> {
        Ok(Document::new(html_to_editor_input_with_options(
            source, options,
        )))
    }
}
