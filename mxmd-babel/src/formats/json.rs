//! JSON output format
//!
//! Serializes the editor document as pretty-printed JSON. Nodes carry a
//! `type` tag; text leaves list only the marks that are set.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for JSON output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Editor document as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(format!("JSON encoding failed: {e}")))
    }
}
