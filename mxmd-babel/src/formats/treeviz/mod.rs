//! Treeviz formatter for editor documents
//!
//! Treeviz is a visual representation of the document tree: one node per line,
//! nesting drawn with box connectors.
//!
//! So the format is :
//! <prefix><connector> <icon><space><label> (truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Document (3 blocks)
//! ├─ § h1 Release notes
//! │ └─ ◦ Release notes
//! ├─ ¶ Thanks Alice for the fix
//! │ ├─ ◦ Thanks
//! │ ├─ @ Alice → @alice:example.org
//! │ └─ ◦ for the fix [bold]
//! └─ ☰ 2 items
//!   ├─ • one
//!   │ └─ ◦ one
//!   └─ • two
//!     └─ ◦ two
//!
//! Icons
//!     Blocks:
//!         Document: ⧉
//!         Paragraph: ¶
//!         Heading: §
//!         BlockQuote: '"'
//!         CodeBlock: 𝒱
//!         OrderedList / UnorderedList: ☰
//!     Lines:
//!         ListItem: •
//!         QuoteLine / CodeLine: ↵
//!     Inlines:
//!         Text: ◦
//!         Mention: @
//!         Emoticon: ☺

use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{Block, Document, Inline};

const LABEL_WIDTH: usize = 30;

/// A node to print: icon key, label and children.
struct TreeNode {
    node_type: &'static str,
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(node_type: &'static str, label: String) -> Self {
        Self {
            node_type,
            label,
            children: Vec::new(),
        }
    }
}

fn truncate(label: &str) -> String {
    if label.chars().count() <= LABEL_WIDTH {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(LABEL_WIDTH - 1).collect();
        short.push('…');
        short
    }
}

fn inline_label(children: &[Inline]) -> String {
    children
        .iter()
        .map(|inline| match inline {
            Inline::Text(text) => text.text.as_str(),
            Inline::Mention(mention) => mention.label.as_str(),
            Inline::Emoticon(emoticon) => emoticon.alt.as_str(),
        })
        .collect()
}

fn inline_node(inline: &Inline) -> TreeNode {
    let label = match inline {
        Inline::Text(text) if text.marks.is_empty() => truncate(&text.text),
        Inline::Text(text) => format!(
            "{} [{}]",
            truncate(&text.text),
            text.marks.names().join(", ")
        ),
        Inline::Mention(mention) => {
            format!("{} → {}", truncate(&mention.label), mention.target_id)
        }
        Inline::Emoticon(emoticon) => format!("{} ({})", truncate(&emoticon.alt), emoticon.src),
    };
    TreeNode::leaf(inline.node_type(), label)
}

fn line_node(node_type: &'static str, children: &[Inline]) -> TreeNode {
    TreeNode {
        node_type,
        label: truncate(&inline_label(children)),
        children: children.iter().map(inline_node).collect(),
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn block_node(block: &Block) -> TreeNode {
    let node_type = block.node_type();
    match block {
        Block::Paragraph(paragraph) => line_node(node_type, &paragraph.children),
        Block::Heading(heading) => TreeNode {
            node_type,
            label: format!(
                "h{} {}",
                heading.level.get(),
                truncate(&inline_label(&heading.children))
            ),
            children: heading.children.iter().map(inline_node).collect(),
        },
        Block::BlockQuote(quote) => TreeNode {
            node_type,
            label: plural(quote.children.len(), "line"),
            children: quote
                .children
                .iter()
                .map(|line| line_node("QuoteLine", &line.children))
                .collect(),
        },
        Block::CodeBlock(code) => TreeNode {
            node_type,
            label: plural(code.children.len(), "line"),
            children: code
                .children
                .iter()
                .map(|line| TreeNode::leaf("CodeLine", truncate(&line.text)))
                .collect(),
        },
        Block::OrderedList(list) | Block::UnorderedList(list) => TreeNode {
            node_type,
            label: plural(list.children.len(), "item"),
            children: list
                .children
                .iter()
                .map(|item| line_node("ListItem", &item.children))
                .collect(),
        },
    }
}

fn format_node(node: &TreeNode, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.node_type),
        node.label
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&node.children, &child_prefix, output);
}

fn format_children(children: &[TreeNode], prefix: &str, output: &mut String) {
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i == child_count - 1, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!(
        "{} Document ({})\n",
        get_icon("Document"),
        plural(doc.blocks.len(), "block")
    );
    let nodes: Vec<TreeNode> = doc.blocks.iter().map(block_node).collect();
    format_children(&nodes, "", &mut output);
    output
}

/// Format implementation for treeviz format
#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
