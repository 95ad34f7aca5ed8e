//! Markdown to HTML rule engines
//!
//! The composer's markdown dialect is small and line oriented. It is parsed by
//! two ordered rule tables rather than a CommonMark parser, so every construct
//! the user typed can be traced back from the HTML it produced.
//!
//! # Element Mapping Table
//!
//! | Markdown            | HTML                                          |
//! |---------------------|-----------------------------------------------|
//! | `**bold**`          | `<strong data-md="**">`                       |
//! | `*italic*`          | `<i data-md="*">`                             |
//! | `_italic_`          | `<i data-md="_">`                             |
//! | `__underline__`     | `<u data-md="__">`                            |
//! | `~~strike~~`        | `<del data-md="~~">`                          |
//! | `\|\|spoiler\|\|`   | `<span data-mx-spoiler data-md="\|\|">`       |
//! | `` `code` ``        | ``<code data-md="`">``                        |
//! | `[label](url)`      | `<a data-md href="url">`                      |
//! | `# heading`         | `<h1 data-md="#">` (up to six hashes)         |
//! | ```` ```lang ````   | ``<pre data-md="```"><code class="language-lang">`` |
//! | `> quote`           | `<blockquote data-md=">">`, lines end in `<br/>` |
//! | `1. item`           | `<ol data-md="1.">` with `start`/`type`       |
//! | `- item`            | `<ul data-md="-">`                            |
//!
//! The `data-md` attribute is the only state carried between the two
//! directions: the HTML importer uses it to restore the typed delimiters when
//! the editor is in markdown mode.
//!
//! # Matching
//!
//! Both engines split their input around a single match: the text before it is
//! parsed on its own, the match is rendered, and parsing continues after it.
//! Inline rules pick the leftmost match (code spans first and exclusively);
//! block rules pick the first rule in priority order that matches anywhere.
//! Both always terminate since every step consumes input.

pub mod block;
pub mod escape;
pub mod inline;
pub mod rule;

pub use block::parse_block_md;
pub use escape::{
    escape_markdown_block_sequences, escape_markdown_inline_sequences,
    unescape_markdown_block_sequences, unescape_markdown_inline_sequences,
};
pub use inline::parse_inline_md;

/// Renders markdown to HTML with both engines.
pub fn markdown_to_html(text: &str) -> String {
    parse_block_md(text, Some(parse_inline_md))
}

/// Escapes a line start: block trigger first, then inline sequences.
pub fn escape_markdown_line_start(text: &str) -> String {
    escape_markdown_block_sequences(text, escape_markdown_inline_sequences)
}

/// Inverse of [`escape_markdown_line_start`].
pub fn unescape_markdown_line_start(text: &str) -> String {
    unescape_markdown_block_sequences(text, unescape_markdown_inline_sequences)
}
