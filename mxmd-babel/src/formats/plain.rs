//! Plain text source format

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use crate::transforms::{plain_to_editor_input_with_options, ConvertOptions};

/// Format implementation for plain message bodies, one paragraph per line
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormat;

impl Format for PlainFormat {
    fn name(&self) -> &str {
        "plain"
    }

    fn description(&self) -> &str {
        "Plain text message body"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, options: &ConvertOptions) -> Result<Document, FormatError> {
        Ok(Document::new(plain_to_editor_input_with_options(
            source, options,
        )))
    }
}
