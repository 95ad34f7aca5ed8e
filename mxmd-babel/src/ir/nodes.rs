//! Core data structures for the editor document tree.
//!
//! A [`Document`] is a flat sequence of [`Block`]s. Blocks hold inline content
//! directly (paragraphs, headings) or through line containers (quote lines,
//! code lines, list items). Blocks never nest inside inline content.

use serde::Serialize;

/// The root of a converted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Flattens the tree to text, one line per paragraph or line container.
    ///
    /// Mentions contribute their label, emoticons their alt text.
    pub fn plain_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(paragraph) => lines.push(inline_text(&paragraph.children)),
                Block::Heading(heading) => lines.push(inline_text(&heading.children)),
                Block::BlockQuote(quote) => lines.extend(
                    quote
                        .children
                        .iter()
                        .map(|line| inline_text(&line.children)),
                ),
                Block::CodeBlock(code) => {
                    lines.extend(code.children.iter().map(|line| line.text.clone()))
                }
                Block::OrderedList(list) | Block::UnorderedList(list) => lines.extend(
                    list.children
                        .iter()
                        .map(|item| inline_text(&item.children)),
                ),
            }
        }
        lines.join("\n")
    }
}

fn inline_text(children: &[Inline]) -> String {
    children
        .iter()
        .map(|inline| match inline {
            Inline::Text(text) => text.text.as_str(),
            Inline::Mention(mention) => mention.label.as_str(),
            Inline::Emoticon(emoticon) => emoticon.alt.as_str(),
        })
        .collect()
}

/// A block-level node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    BlockQuote(BlockQuote),
    CodeBlock(CodeBlock),
    OrderedList(List),
    UnorderedList(List),
}

impl Block {
    /// Name of the node kind, used by the tree visualizers.
    pub fn node_type(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "Paragraph",
            Block::Heading(_) => "Heading",
            Block::BlockQuote(_) => "BlockQuote",
            Block::CodeBlock(_) => "CodeBlock",
            Block::OrderedList(_) => "OrderedList",
            Block::UnorderedList(_) => "UnorderedList",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paragraph {
    pub children: Vec<Inline>,
}

impl Paragraph {
    pub fn new(children: Vec<Inline>) -> Self {
        Self { children }
    }

    /// A paragraph holding a single unformatted text leaf.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Inline::text(text)])
    }
}

/// Heading size supported by the editor.
///
/// Only three sizes are modelled; deeper levels are clamped to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MAX: u8 = 3;

    pub fn new(level: u8) -> Self {
        Self(level.clamp(1, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub children: Vec<Inline>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockQuote {
    pub children: Vec<QuoteLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteLine {
    pub children: Vec<Inline>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CodeBlock {
    pub children: Vec<CodeLine>,
}

/// A single line of a code block. Code lines carry unformatted text only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CodeLine {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct List {
    pub children: Vec<ListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListItem {
    pub children: Vec<Inline>,
}

/// Inline content of a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text(Text),
    Mention(Mention),
    Emoticon(Emoticon),
}

impl Inline {
    /// An unformatted text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(Text {
            text: text.into(),
            marks: Marks::default(),
        })
    }

    /// A text leaf carrying the given marks.
    pub fn marked(text: impl Into<String>, marks: Marks) -> Self {
        Inline::Text(Text {
            text: text.into(),
            marks,
        })
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            Inline::Text(_) => "Text",
            Inline::Mention(_) => "Mention",
            Inline::Emoticon(_) => "Emoticon",
        }
    }
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
    #[serde(flatten)]
    pub marks: Marks,
}

/// Formatting marks of a text leaf. Unset marks are omitted when serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Marks {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub code: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Marks {
    /// Returns a copy with `mark` switched on.
    pub fn with(mut self, mark: Mark) -> Self {
        match mark {
            Mark::Bold => self.bold = true,
            Mark::Italic => self.italic = true,
            Mark::Underline => self.underline = true,
            Mark::Strikethrough => self.strikethrough = true,
            Mark::Code => self.code = true,
            Mark::Spoiler => self.spoiler = true,
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Marks::default()
    }

    /// Names of the marks that are set, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.bold, "bold"),
            (self.italic, "italic"),
            (self.underline, "underline"),
            (self.strikethrough, "strikethrough"),
            (self.code, "code"),
            (self.spoiler, "spoiler"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// A single formatting mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Spoiler,
}

/// A resolved reference to a user, room or room event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mention {
    pub target_id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub via_servers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

/// A custom emoji image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emoticon {
    pub src: String,
    pub alt: String,
}
