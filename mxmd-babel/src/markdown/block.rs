//! Block-level markdown rules.
//!
//! Blocks are matched on whole lines. Whatever no rule claims falls back to
//! `<br/>`-joined lines, each handed to the inline parser.

use html_escape::{encode_double_quoted_attribute, encode_text};
use once_cell::sync::Lazy;
use regex::Regex;

use super::escape::{split_escaped_block_trigger, LIST_MARKER};
use super::rule::{find_plain, BlockRule, InlineParser, MatchResult};

static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^```(\S*)\n((?:.*\n)+?)``` *$\n?").expect("valid code block pattern")
});
static BLOCK_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(?:^>.*\n?)+").expect("valid block quote pattern"));
static ORDERED_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?m)(?:^{LIST_MARKER}\. .+\n?)+")).expect("valid ordered list pattern")
});
static UNORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(?:^[-*] .+\n?)+").expect("valid unordered list pattern"));
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#{1,6}) (.+)\n?").expect("valid heading pattern"));

static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^({LIST_MARKER})\. (.*)$")).expect("valid ordered item pattern")
});
static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([-*]) (.*)$").expect("valid unordered item pattern"));

/// Block rules in priority order; the first rule that matches wins.
pub(crate) static BLOCK_RULES: &[BlockRule] = &[
    BlockRule {
        name: "code_block",
        find: find_code_block,
        render: render_code_block,
    },
    BlockRule {
        name: "block_quote",
        find: find_block_quote,
        render: render_block_quote,
    },
    BlockRule {
        name: "ordered_list",
        find: find_ordered_list,
        render: render_ordered_list,
    },
    BlockRule {
        name: "unordered_list",
        find: find_unordered_list,
        render: render_unordered_list,
    },
    BlockRule {
        name: "heading",
        find: find_heading,
        render: render_heading,
    },
];

fn find_code_block(text: &str) -> Option<MatchResult<'_>> {
    find_plain(text, &CODE_BLOCK)
}

fn find_block_quote(text: &str) -> Option<MatchResult<'_>> {
    find_plain(text, &BLOCK_QUOTE)
}

fn find_ordered_list(text: &str) -> Option<MatchResult<'_>> {
    find_plain(text, &ORDERED_LIST)
}

fn find_unordered_list(text: &str) -> Option<MatchResult<'_>> {
    find_plain(text, &UNORDERED_LIST)
}

fn find_heading(text: &str) -> Option<MatchResult<'_>> {
    find_plain(text, &HEADING)
}

fn render_code_block(found: &MatchResult<'_>, _: Option<InlineParser>) -> String {
    let language = found.group(1);
    let class = if language.is_empty() {
        String::new()
    } else {
        format!(
            " class=\"language-{}\"",
            encode_double_quoted_attribute(language)
        )
    };
    format!(
        "<pre data-md=\"```\"><code{class}>{}</code></pre>",
        encode_text(found.group(2))
    )
}

fn render_block_quote(found: &MatchResult<'_>, parse_inline: Option<InlineParser>) -> String {
    let lines: String = block_lines(found.matched)
        .map(|line| {
            let content = line.strip_prefix('>').unwrap_or(line);
            let content = content.strip_prefix(' ').unwrap_or(content);
            format!("{}<br/>", inline(content, parse_inline))
        })
        .collect();
    format!("<blockquote data-md=\">\">{lines}</blockquote>")
}

fn render_ordered_list(found: &MatchResult<'_>, parse_inline: Option<InlineParser>) -> String {
    let mut first_marker: Option<&str> = None;
    let mut items = String::new();

    for line in block_lines(found.matched) {
        let Some(caps) = ORDERED_ITEM.captures(line) else {
            continue;
        };
        let marker = caps.get(1).map_or("", |m| m.as_str());
        let content = caps.get(2).map_or("", |m| m.as_str());
        first_marker.get_or_insert(marker);
        items.push_str(&list_item(content, parse_inline));
    }

    let marker = first_marker.unwrap_or("1");
    format!(
        "<ol data-md=\"{marker}.\"{}>{items}</ol>",
        ordered_list_attributes(marker)
    )
}

fn render_unordered_list(found: &MatchResult<'_>, parse_inline: Option<InlineParser>) -> String {
    let mut symbol: Option<&str> = None;
    let mut items = String::new();

    for line in block_lines(found.matched) {
        let Some(caps) = UNORDERED_ITEM.captures(line) else {
            continue;
        };
        symbol.get_or_insert(caps.get(1).map_or("-", |m| m.as_str()));
        items.push_str(&list_item(
            caps.get(2).map_or("", |m| m.as_str()),
            parse_inline,
        ));
    }

    format!(
        "<ul data-md=\"{}\">{items}</ul>",
        symbol.unwrap_or("-")
    )
}

fn render_heading(found: &MatchResult<'_>, parse_inline: Option<InlineParser>) -> String {
    let hashes = found.group(1);
    let level = hashes.len();
    format!(
        "<h{level} data-md=\"{hashes}\">{}</h{level}>",
        inline(found.group(2), parse_inline)
    )
}

fn list_item(content: &str, parse_inline: Option<InlineParser>) -> String {
    format!("<li><p>{}</p></li>", inline(content, parse_inline))
}

/// `start` and `type` attributes of an ordered list opened by `marker`.
fn ordered_list_attributes(marker: &str) -> String {
    let (start, kind) = if let Ok(number) = marker.parse::<u32>() {
        (number, None)
    } else if let Some(value) = roman_value(marker) {
        let kind = if marker.starts_with(|c: char| c.is_ascii_lowercase()) {
            "i"
        } else {
            "I"
        };
        (value, Some(kind))
    } else {
        let letter = marker.chars().next().unwrap_or('a');
        let index = u32::from(letter.to_ascii_lowercase()) - u32::from('a') + 1;
        let kind = if letter.is_ascii_lowercase() { "a" } else { "A" };
        (index, Some(kind))
    };

    let mut attributes = String::new();
    if start != 1 {
        attributes.push_str(&format!(" start=\"{start}\""));
    }
    if let Some(kind) = kind {
        attributes.push_str(&format!(" type=\"{kind}\""));
    }
    attributes
}

/// Value of a short roman numeral made of `i`, `v` and `x` in one case.
fn roman_value(marker: &str) -> Option<u32> {
    let digits: Option<Vec<u32>> = marker
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            'i' => Some(1),
            'v' => Some(5),
            'x' => Some(10),
            _ => None,
        })
        .collect();
    let digits = digits?;
    if digits.is_empty() {
        return None;
    }

    let mut total = 0;
    for (i, digit) in digits.iter().enumerate() {
        match digits.get(i + 1) {
            Some(next) if next > digit => total -= *digit as i64,
            _ => total += *digit as i64,
        }
    }
    u32::try_from(total).ok()
}

fn block_lines(matched: &str) -> impl Iterator<Item = &str> {
    matched.strip_suffix('\n').unwrap_or(matched).split('\n')
}

fn inline(text: &str, parse_inline: Option<InlineParser>) -> String {
    match parse_inline {
        Some(parse) => parse(text),
        None => encode_text(text).into_owned(),
    }
}

/// Renders text no block rule claimed: one `<br/>`-separated line each.
///
/// A line opening with an escaped block trigger keeps the trigger as literal
/// text and is never promoted to a block.
fn parse_lines(text: &str, parse_inline: Option<InlineParser>) -> String {
    text.split('\n')
        .map(|line| match split_escaped_block_trigger(line) {
            Some((trigger, rest)) => {
                format!("{}{}", encode_text(trigger), inline(rest, parse_inline))
            }
            None => inline(line, parse_inline),
        })
        .collect::<Vec<_>>()
        .join("<br/>")
}

/// Converts block markdown to HTML.
///
/// `parse_inline` renders the content of each line; without it line content
/// is emitted HTML-escaped.
pub fn parse_block_md(text: &str, parse_inline: Option<InlineParser>) -> String {
    let mut html = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        let selected = BLOCK_RULES
            .iter()
            .find_map(|rule| (rule.find)(rest).map(|found| (rule, found)));
        let Some((rule, found)) = selected else {
            html.push_str(&parse_lines(rest, parse_inline));
            break;
        };
        tracing::trace!(rule = rule.name, start = found.start, "block rule matched");

        html.push_str(&parse_block_md(&rest[..found.start], parse_inline));
        html.push_str(&(rule.render)(&found, parse_inline));
        rest = &rest[found.end()..];
    }

    html
}
