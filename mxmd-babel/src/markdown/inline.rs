//! Inline (span-level) markdown rules.
//!
//! Each formatting span renders to a tag carrying a `data-md` attribute with
//! the delimiter the user typed, so the HTML converter can restore it later.

use html_escape::{encode_double_quoted_attribute, encode_text};
use once_cell::sync::Lazy;
use regex::Regex;

use super::rule::{find_guarded, find_plain, InlineParser, InlineRule, MatchResult};

/// Span body: at least one character, never a newline. A backslash always
/// takes the next character with it, so an escaped delimiter cannot close.
const SPAN_BODY: &str = r"((?:\\.|[^\\\n])+?)";

static BOLD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\*\*{SPAN_BODY}(?P<close>\*\*)(?:[^*]|$)")).expect("valid bold pattern")
});
static ITALIC_STAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\*{SPAN_BODY}(?P<close>\*)(?:[^*]|$)")).expect("valid italic pattern")
});
static UNDERLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"__{SPAN_BODY}(?P<close>__)(?:[^_]|$)")).expect("valid underline pattern")
});
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"_{SPAN_BODY}(?P<close>_)(?:[^_]|$)")).expect("valid italic pattern")
});
static STRIKETHROUGH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"~~{SPAN_BODY}(?P<close>~~)(?:[^~]|$)")).expect("valid strike pattern")
});
static SPOILER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\|\|{SPAN_BODY}(?P<close>\|\|)(?:[^|]|$)"))
        .expect("valid spoiler pattern")
});
static CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"`{SPAN_BODY}(?P<close>`)(?:[^`]|$)")).expect("valid code pattern")
});
static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\(((?:https?|ftp)://[^\s()]+|(?:mailto|magnet):[^\s()]+)\)")
        .expect("valid link pattern")
});
static ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\([*_~`|])").expect("valid escape pattern"));

pub(crate) static CODE_RULE: InlineRule = InlineRule {
    name: "code",
    find: find_code,
    render: render_code,
};

pub(crate) const ESCAPE_RULE: InlineRule = InlineRule {
    name: "escape",
    find: find_escape,
    render: render_escape,
};

/// Rules competing for the leftmost match, in tie-break order.
pub(crate) static LEVELED_RULES: &[InlineRule] = &[
    InlineRule {
        name: "bold",
        find: find_bold,
        render: render_bold,
    },
    InlineRule {
        name: "italic",
        find: find_italic_star,
        render: render_italic_star,
    },
    InlineRule {
        name: "underline",
        find: find_underline,
        render: render_underline,
    },
    InlineRule {
        name: "italic",
        find: find_italic_underscore,
        render: render_italic_underscore,
    },
    InlineRule {
        name: "strikethrough",
        find: find_strikethrough,
        render: render_strikethrough,
    },
    InlineRule {
        name: "spoiler",
        find: find_spoiler,
        render: render_spoiler,
    },
    InlineRule {
        name: "link",
        find: find_link,
        render: render_link,
    },
    ESCAPE_RULE,
];

fn find_code(text: &str) -> Option<MatchResult<'_>> {
    find_guarded(text, &CODE)
}

fn find_bold(text: &str) -> Option<MatchResult<'_>> {
    find_guarded(text, &BOLD)
}

fn find_italic_star(text: &str) -> Option<MatchResult<'_>> {
    find_guarded(text, &ITALIC_STAR)
}

fn find_underline(text: &str) -> Option<MatchResult<'_>> {
    find_guarded(text, &UNDERLINE)
}

fn find_italic_underscore(text: &str) -> Option<MatchResult<'_>> {
    find_guarded(text, &ITALIC_UNDERSCORE)
}

fn find_strikethrough(text: &str) -> Option<MatchResult<'_>> {
    find_guarded(text, &STRIKETHROUGH)
}

fn find_spoiler(text: &str) -> Option<MatchResult<'_>> {
    find_guarded(text, &SPOILER)
}

fn find_link(text: &str) -> Option<MatchResult<'_>> {
    find_plain(text, &LINK)
}

fn find_escape(text: &str) -> Option<MatchResult<'_>> {
    find_plain(text, &ESCAPE)
}

fn render_code(found: &MatchResult<'_>, _: InlineParser) -> String {
    format!("<code data-md=\"`\">{}</code>", encode_text(found.group(1)))
}

fn render_bold(found: &MatchResult<'_>, parse: InlineParser) -> String {
    wrap("strong", "**", found, parse)
}

fn render_italic_star(found: &MatchResult<'_>, parse: InlineParser) -> String {
    wrap("i", "*", found, parse)
}

fn render_underline(found: &MatchResult<'_>, parse: InlineParser) -> String {
    wrap("u", "__", found, parse)
}

fn render_italic_underscore(found: &MatchResult<'_>, parse: InlineParser) -> String {
    wrap("i", "_", found, parse)
}

fn render_strikethrough(found: &MatchResult<'_>, parse: InlineParser) -> String {
    wrap("del", "~~", found, parse)
}

fn render_spoiler(found: &MatchResult<'_>, parse: InlineParser) -> String {
    format!(
        "<span data-mx-spoiler data-md=\"||\">{}</span>",
        parse(found.group(1))
    )
}

fn render_link(found: &MatchResult<'_>, parse: InlineParser) -> String {
    format!(
        "<a data-md href=\"{}\">{}</a>",
        encode_double_quoted_attribute(found.group(2)),
        parse(found.group(1))
    )
}

/// The escaped character itself, without its backslash.
fn render_escape(found: &MatchResult<'_>, _: InlineParser) -> String {
    encode_text(found.group(1)).into_owned()
}

fn wrap(tag: &str, delimiter: &str, found: &MatchResult<'_>, parse: InlineParser) -> String {
    format!(
        "<{tag} data-md=\"{delimiter}\">{}</{tag}>",
        parse(found.group(1))
    )
}

/// Picks the rule to apply to `text`: code first and exclusively, then the
/// leftmost match among the remaining rules.
fn select(text: &str) -> Option<(&'static InlineRule, MatchResult<'_>)> {
    if let Some(found) = (CODE_RULE.find)(text) {
        return Some((&CODE_RULE, found));
    }

    let mut winner: Option<(&'static InlineRule, MatchResult<'_>)> = None;
    for rule in LEVELED_RULES {
        if let Some(found) = (rule.find)(text) {
            let better = winner
                .as_ref()
                .map_or(true, |(_, best)| found.start < best.start);
            if better {
                winner = Some((rule, found));
            }
        }
    }
    winner
}

/// Converts inline markdown to HTML.
///
/// Literal text is HTML-escaped. Every formatting span keeps its delimiter in
/// a `data-md` attribute.
pub fn parse_inline_md(text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        let Some((rule, found)) = select(rest) else {
            html.push_str(&encode_text(rest));
            break;
        };
        tracing::trace!(rule = rule.name, start = found.start, "inline rule matched");

        html.push_str(&parse_inline_md(&rest[..found.start]));
        html.push_str(&(rule.render)(&found, parse_inline_md));
        rest = &rest[found.end()..];
    }

    html
}
