//! Rule tables shared by the block and inline engines.
//!
//! A rule is a pair of plain functions: `find` tests the rule against a text
//! window and `render` turns a successful match into HTML. Rules carry no
//! state; their priority is their position in the engine's table.

use regex::{Captures, Regex};

/// Renders a run of text as inline HTML.
pub type InlineParser = fn(&str) -> String;

/// A successful match of a rule against one text window.
///
/// `start` is relative to the text handed to that match attempt, never to the
/// enclosing document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'t> {
    pub matched: &'t str,
    pub start: usize,
    pub groups: Vec<Option<&'t str>>,
}

impl<'t> MatchResult<'t> {
    /// Builds a match from regex captures.
    ///
    /// Patterns emulating a look-ahead consume one extra character after the
    /// closing delimiter; they name the delimiter `close` and the match is cut
    /// at its end.
    pub(crate) fn from_captures(text: &'t str, caps: &Captures<'t>) -> Option<Self> {
        let whole = caps.get(0)?;
        let start = whole.start();
        let end = caps.name("close").map_or(whole.end(), |close| close.end());
        let groups = caps
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str()))
            .collect();

        Some(Self {
            matched: &text[start..end],
            start,
            groups,
        })
    }

    /// Offset just past the match.
    pub fn end(&self) -> usize {
        self.start + self.matched.len()
    }

    /// Capture group `index` (1-based), empty when it did not participate.
    pub fn group(&self, index: usize) -> &'t str {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i).copied().flatten())
            .unwrap_or("")
    }
}

/// A span-level rule.
pub struct InlineRule {
    pub name: &'static str,
    pub find: fn(&str) -> Option<MatchResult<'_>>,
    pub render: fn(&MatchResult<'_>, InlineParser) -> String,
}

/// A multi-line rule.
pub struct BlockRule {
    pub name: &'static str,
    pub find: fn(&str) -> Option<MatchResult<'_>>,
    pub render: fn(&MatchResult<'_>, Option<InlineParser>) -> String,
}

/// URL prefixes inside which markdown delimiters are never interpreted.
const URL_SCHEMES: [&str; 5] = ["http://", "https://", "ftp://", "mailto:", "magnet:"];

/// Finds the leftmost match of `regex` whose start passes the look-behind
/// guards: not preceded by an unescaped backslash and not inside a URL.
///
/// A refused candidate is retried from the next character, which is what a
/// look-behind assertion does during a regex scan.
pub(crate) fn find_guarded<'t>(text: &'t str, regex: &Regex) -> Option<MatchResult<'t>> {
    let mut from = 0;
    while from <= text.len() {
        let caps = regex.captures_at(text, from)?;
        let found = MatchResult::from_captures(text, &caps)?;
        if !is_escaped(text, found.start) && !inside_url(text, found.start) {
            return Some(found);
        }
        from = found.start + text[found.start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Finds the leftmost match of `regex` without look-behind guards.
pub(crate) fn find_plain<'t>(text: &'t str, regex: &Regex) -> Option<MatchResult<'t>> {
    let caps = regex.captures(text)?;
    MatchResult::from_captures(text, &caps)
}

/// Whether the character at `pos` is preceded by an odd run of backslashes.
fn is_escaped(text: &str, pos: usize) -> bool {
    let backslashes = text[..pos].bytes().rev().take_while(|b| *b == b'\\').count();
    backslashes % 2 == 1
}

/// Whether `pos` sits in a whitespace-free run that started with a URL scheme.
fn inside_url(text: &str, pos: usize) -> bool {
    let before = &text[..pos];
    let run_start = before
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let run = &before[run_start..];
    URL_SCHEMES.iter().any(|scheme| run.contains(scheme))
}
