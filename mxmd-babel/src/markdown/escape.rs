//! Backslash escaping of markdown sequences.
//!
//! Text typed into the editor in markdown mode is escaped before it is shown
//! again, so literal `*` or a leading `# ` survive a round trip through the
//! rule engines. Block triggers are only recognised at the start of a line.

use once_cell::sync::Lazy;
use regex::Regex;

use super::inline::ESCAPE_RULE;

/// Characters that open or close an inline span.
pub const INLINE_SEQUENCE_CHARS: [char; 5] = ['*', '_', '~', '`', '|'];

/// Ordered list marker without its dot: digits, a roman numeral or a letter.
pub(crate) const LIST_MARKER: &str = r"(?:[0-9]{1,9}|[ivx]{1,4}|[IVX]{1,4}|[a-zA-Z])";

/// Line prefixes that start a block.
pub(crate) static BLOCK_TRIGGER: Lazy<String> =
    Lazy::new(|| format!(r"(?:#{{1,6}} |```|>|[-*] |{LIST_MARKER}\. )"));

static LEADING_TRIGGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{}", *BLOCK_TRIGGER)).expect("valid block trigger pattern")
});

static ESCAPED_LEADING_TRIGGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\\({})", *BLOCK_TRIGGER)).expect("valid escaped trigger pattern")
});

/// Backslash-escapes every inline sequence character.
pub fn escape_markdown_inline_sequences(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if INLINE_SEQUENCE_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Removes one backslash in front of each escaped inline sequence character.
pub fn unescape_markdown_inline_sequences(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(found) = (ESCAPE_RULE.find)(rest) {
        unescaped.push_str(&rest[..found.start]);
        unescaped.push_str(found.group(1));
        rest = &rest[found.end()..];
    }
    unescaped.push_str(rest);
    unescaped
}

/// Escapes a block trigger at the start of `text` and hands the remainder to
/// `process_rest`.
pub fn escape_markdown_block_sequences<F>(text: &str, process_rest: F) -> String
where
    F: Fn(&str) -> String,
{
    match LEADING_TRIGGER.find(text) {
        Some(trigger) => format!(
            "\\{}{}",
            trigger.as_str(),
            process_rest(&text[trigger.end()..])
        ),
        None => process_rest(text),
    }
}

/// Inverse of [`escape_markdown_block_sequences`].
pub fn unescape_markdown_block_sequences<F>(text: &str, process_rest: F) -> String
where
    F: Fn(&str) -> String,
{
    match split_escaped_block_trigger(text) {
        Some((trigger, rest)) => format!("{trigger}{}", process_rest(rest)),
        None => process_rest(text),
    }
}

/// Splits a line starting with an escaped block trigger into the trigger
/// (without its backslash) and the rest of the line.
pub(crate) fn split_escaped_block_trigger(line: &str) -> Option<(&str, &str)> {
    let caps = ESCAPED_LEADING_TRIGGER.captures(line)?;
    let trigger = caps.get(1)?;
    Some((trigger.as_str(), &line[trigger.end()..]))
}
