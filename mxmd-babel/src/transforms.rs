//! Conversion entry points for the composer
//!
//! These functions produce the initial editor value when a message is edited
//! or a draft is restored. Every entry point returns at least one block, so
//! the editor always receives a valid value.
//!
//! In markdown mode text is escaped on its way in, and everything the user
//! originally typed as markdown (recorded in `data-md` attributes) comes back
//! as literal markdown text.

use crate::common::links::{MatrixToResolver, DEFAULT_PERMALINK_BASE};
use crate::html::dom::parse_html;
use crate::html::processor::{MarkdownEscaper, TextProcessor, Verbatim};
use crate::html::to_editor::dom_to_editor_input;
use crate::ir::nodes::{Block, Paragraph};
use crate::markdown::escape_markdown_line_start;

/// Options shared by all conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Whether the editor treats its content as markdown.
    pub markdown: bool,
    /// Base URL of permalinks that become mentions.
    pub permalink_base: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            markdown: true,
            permalink_base: DEFAULT_PERMALINK_BASE.to_string(),
        }
    }
}

impl ConvertOptions {
    pub fn with_markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    pub fn with_permalink_base(mut self, base: impl Into<String>) -> Self {
        self.permalink_base = base.into();
        self
    }
}

/// Converts message HTML into editor blocks.
///
/// # Example
///
/// ```
/// use mxmd_babel::transforms::html_to_editor_input;
/// use mxmd_babel::ir::nodes::{Block, Paragraph};
///
/// let blocks = html_to_editor_input(r##"<h1 data-md="#">Title</h1>"##, true);
/// assert_eq!(blocks, vec![Block::Paragraph(Paragraph::from_text("# Title"))]);
/// ```
pub fn html_to_editor_input(html: &str, markdown: bool) -> Vec<Block> {
    html_to_editor_input_with_options(html, &ConvertOptions::default().with_markdown(markdown))
}

/// Converts message HTML into editor blocks with explicit options.
pub fn html_to_editor_input_with_options(html: &str, options: &ConvertOptions) -> Vec<Block> {
    let nodes = parse_html(html);
    let links = MatrixToResolver::new(options.permalink_base.as_str());
    let processor: &dyn TextProcessor = if options.markdown {
        &MarkdownEscaper
    } else {
        &Verbatim
    };
    tracing::debug!(markdown = options.markdown, nodes = nodes.len(), "converting html");

    ensure_block(dom_to_editor_input(&nodes, processor, &links))
}

/// Converts plain text into editor blocks, one paragraph per line.
///
/// # Example
///
/// ```
/// use mxmd_babel::transforms::plain_to_editor_input;
/// use mxmd_babel::ir::nodes::{Block, Paragraph};
///
/// let blocks = plain_to_editor_input("> not a quote", true);
/// assert_eq!(blocks, vec![Block::Paragraph(Paragraph::from_text(r"\> not a quote"))]);
/// ```
pub fn plain_to_editor_input(text: &str, markdown: bool) -> Vec<Block> {
    plain_to_editor_input_with_options(text, &ConvertOptions::default().with_markdown(markdown))
}

/// Converts plain text into editor blocks with explicit options.
pub fn plain_to_editor_input_with_options(text: &str, options: &ConvertOptions) -> Vec<Block> {
    let blocks = text
        .split('\n')
        .map(|line| {
            let line = if options.markdown {
                escape_markdown_line_start(line)
            } else {
                line.to_string()
            };
            Block::Paragraph(Paragraph::from_text(line))
        })
        .collect();
    ensure_block(blocks)
}

fn ensure_block(mut blocks: Vec<Block>) -> Vec<Block> {
    if blocks.is_empty() {
        blocks.push(Block::Paragraph(Paragraph::from_text("")));
    }
    blocks
}
