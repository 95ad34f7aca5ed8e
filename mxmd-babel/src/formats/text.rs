//! Plain text output format

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation flattening a document to text, one line per
/// paragraph or line container
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Editor document flattened to text"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut text = doc.plain_text();
        text.push('\n');
        Ok(text)
    }
}
