//! Shared icon mapping for tree visualization
//!
//! This module provides a centralized icon mapping so every tree view of an
//! editor document uses the same symbols.

/// Get the Unicode icon for a given node type
///
/// Returns a single Unicode character that visually represents the node type.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Paragraph" => "¶",
        "Heading" => "§",
        "BlockQuote" => "\"",
        "CodeBlock" => "𝒱",
        "OrderedList" | "UnorderedList" => "☰",
        "ListItem" => "•",
        "QuoteLine" | "CodeLine" => "↵",
        "Text" => "◦",
        "Mention" => "@",
        "Emoticon" => "☺",
        _ => "○",
    }
}
