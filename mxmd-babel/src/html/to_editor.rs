//! HTML to editor document conversion.
//!
//! The walker keeps a current line of inline content and flushes it into a
//! block whenever structure demands it (a `<br>`, a paragraph end, a block
//! element). Formatting marks travel down the recursion as context, so a line
//! can be flushed in the middle of a formatted span.
//!
//! Elements carrying a `data-md` attribute were rendered from markdown typed
//! in the composer. They are turned back into the literal text the user typed
//! instead of structure: `<h2 data-md="##">` becomes the paragraph `## title`.

use crate::common::links::LinkResolver;
use crate::html::dom::{HtmlElement, HtmlNode};
use crate::html::processor::TextProcessor;
use crate::ir::nodes::{
    Block, BlockQuote, CodeBlock, CodeLine, Emoticon, Heading, HeadingLevel, Inline, List,
    ListItem, Mark, Marks, Paragraph, QuoteLine, Text,
};

/// Converts lowered HTML into editor blocks.
pub fn dom_to_editor_input(
    nodes: &[HtmlNode],
    processor: &dyn TextProcessor,
    links: &dyn LinkResolver,
) -> Vec<Block> {
    let mut converter = Converter::new(Mode::Blocks, processor, links);
    converter.visit_all(nodes, Context::default());
    converter.finish();
    converter.blocks
}

/// What the walker produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Top level: a sequence of blocks.
    Blocks,
    /// Inside a quote or list: a flat sequence of lines. Nested blocks only
    /// start new lines.
    Lines,
}

/// Inherited formatting state.
#[derive(Debug, Clone, Copy, Default)]
struct Context {
    marks: Marks,
    /// Inside `<code>` or `<pre>`: text is never processed.
    raw: bool,
}

impl Context {
    fn with_mark(self, mark: Mark) -> Self {
        Self {
            marks: self.marks.with(mark),
            raw: self.raw || mark == Mark::Code,
        }
    }

    fn raw(self) -> Self {
        Self { raw: true, ..self }
    }
}

struct Converter<'a> {
    mode: Mode,
    processor: &'a dyn TextProcessor,
    links: &'a dyn LinkResolver,
    blocks: Vec<Block>,
    lines: Vec<Vec<Inline>>,
    line: Vec<Inline>,
    fresh_line: bool,
}

impl<'a> Converter<'a> {
    fn new(mode: Mode, processor: &'a dyn TextProcessor, links: &'a dyn LinkResolver) -> Self {
        Self {
            mode,
            processor,
            links,
            blocks: Vec::new(),
            lines: Vec::new(),
            line: Vec::new(),
            fresh_line: true,
        }
    }

    fn visit_all(&mut self, nodes: &[HtmlNode], ctx: Context) {
        for node in nodes {
            match node {
                HtmlNode::Text(text) => self.text(text, ctx),
                HtmlNode::Element(element) => self.element(element, ctx),
            }
        }
    }

    fn text(&mut self, text: &str, ctx: Context) {
        if self.fresh_line && text.contains('\n') && text.trim().is_empty() {
            return;
        }
        let processed = if ctx.raw {
            text.to_string()
        } else if self.fresh_line && self.mode == Mode::Blocks {
            self.processor.process_line_start_text(text)
        } else {
            self.processor.process_text(text)
        };
        self.push(Inline::marked(processed, ctx.marks));
    }

    /// Pushes text that is not subject to processing, such as a restored
    /// markdown delimiter.
    fn literal(&mut self, text: &str, ctx: Context) {
        self.push(Inline::marked(text, ctx.marks));
    }

    fn push(&mut self, inline: Inline) {
        self.line.push(inline);
        self.fresh_line = false;
    }

    fn element(&mut self, element: &HtmlElement, ctx: Context) {
        match element.tag.as_str() {
            "br" => {
                self.push(Inline::text(""));
                self.end_line();
            }
            "b" | "strong" => self.formatted(element, ctx, Mark::Bold),
            "i" | "em" => self.formatted(element, ctx, Mark::Italic),
            "u" => self.formatted(element, ctx, Mark::Underline),
            "s" | "del" | "strike" => self.formatted(element, ctx, Mark::Strikethrough),
            "code" => self.formatted(element, ctx, Mark::Code),
            "span" if element.has_attr("data-mx-spoiler") => {
                self.formatted(element, ctx, Mark::Spoiler)
            }
            "img" => self.image(element),
            "a" => self.link(element, ctx),
            "p" | "div" | "li" if self.mode == Mode::Lines => self.line_group(element, ctx),
            "p" => self.paragraph(element, ctx),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => self.heading(element, ctx),
            "blockquote" => self.block_quote(element, ctx),
            "ol" => self.list(element, ctx, true),
            "ul" => self.list(element, ctx, false),
            "pre" => self.preformatted(element, ctx),
            _ => self.visit_all(&element.children, ctx),
        }
    }

    fn formatted(&mut self, element: &HtmlElement, ctx: Context, mark: Mark) {
        match &element.source_delimiter {
            Some(delimiter) => {
                let inner = if mark == Mark::Code { ctx.raw() } else { ctx };
                self.literal(delimiter, ctx);
                self.visit_all(&element.children, inner);
                self.literal(delimiter, ctx);
            }
            None => self.visit_all(&element.children, ctx.with_mark(mark)),
        }
    }

    fn image(&mut self, element: &HtmlElement) {
        if !element.has_attr("data-mx-emoticon") {
            tracing::debug!("dropping image that is not an emoticon");
            return;
        }
        let Some(src) = element.attr("src") else {
            tracing::debug!("dropping emoticon without src");
            return;
        };
        let alt = element
            .attr("alt")
            .or_else(|| element.attr("title"))
            .unwrap_or("");
        self.push(Inline::Emoticon(Emoticon {
            src: src.to_string(),
            alt: alt.to_string(),
        }));
    }

    fn link(&mut self, element: &HtmlElement, ctx: Context) {
        let Some(href) = element.attr("href") else {
            self.visit_all(&element.children, ctx);
            return;
        };
        if let Some(link) = self.links.resolve(href) {
            self.push(Inline::Mention(link.into_mention(&element.text_content())));
            return;
        }

        tracing::debug!(href, "keeping link as literal text");
        self.literal("[", ctx);
        self.visit_all(&element.children, ctx);
        self.literal(&format!("]({href})"), ctx);
    }

    fn paragraph(&mut self, element: &HtmlElement, ctx: Context) {
        self.flush();
        self.visit_all(&element.children, ctx);
        let children = self.take_line();
        self.blocks.push(Block::Paragraph(Paragraph::new(children)));
    }

    fn heading(&mut self, element: &HtmlElement, ctx: Context) {
        if self.mode == Mode::Lines {
            self.line_group(element, ctx);
            return;
        }
        self.flush();

        if let Some(hashes) = &element.source_delimiter {
            self.literal(&format!("{hashes} "), Context::default());
            self.visit_all(&element.children, ctx);
            let children = self.take_line();
            self.blocks.push(Block::Paragraph(Paragraph::new(children)));
            return;
        }

        let depth = element.tag[1..].parse::<u8>().unwrap_or(1);
        if depth > HeadingLevel::MAX {
            tracing::debug!(depth, "clamping heading level");
        }
        self.visit_all(&element.children, ctx);
        let children = self.take_line();
        self.blocks.push(Block::Heading(Heading {
            level: HeadingLevel::new(depth),
            children,
        }));
    }

    fn block_quote(&mut self, element: &HtmlElement, ctx: Context) {
        if self.mode == Mode::Lines {
            self.line_group(element, ctx);
            return;
        }
        self.flush();
        let lines = self.collect_lines(element, ctx);

        match &element.source_delimiter {
            Some(delimiter) => {
                for line in lines {
                    let prefix = if is_blank(&line) {
                        delimiter.clone()
                    } else {
                        format!("{delimiter} ")
                    };
                    self.push_literal_line(&prefix, line);
                }
            }
            None if lines.is_empty() => {}
            None => self.blocks.push(Block::BlockQuote(BlockQuote {
                children: lines
                    .into_iter()
                    .map(|children| QuoteLine { children })
                    .collect(),
            })),
        }
    }

    fn list(&mut self, element: &HtmlElement, ctx: Context, ordered: bool) {
        if self.mode == Mode::Lines {
            self.line_group(element, ctx);
            return;
        }
        self.flush();
        let lines = self.collect_lines(element, ctx);

        match &element.source_delimiter {
            Some(delimiter) => {
                let prefix = list_prefix(delimiter);
                for line in lines {
                    self.push_literal_line(&prefix, line);
                }
            }
            None if lines.is_empty() => {}
            None => {
                let list = List {
                    children: lines
                        .into_iter()
                        .map(|children| ListItem { children })
                        .collect(),
                };
                self.blocks.push(if ordered {
                    Block::OrderedList(list)
                } else {
                    Block::UnorderedList(list)
                });
            }
        }
    }

    fn preformatted(&mut self, element: &HtmlElement, ctx: Context) {
        let text = element.text_content();
        let text = text.strip_suffix('\n').unwrap_or(&text);

        if self.mode == Mode::Lines {
            self.end_line_if_open();
            for line in text.split('\n') {
                self.literal(line, ctx.raw());
                self.end_line();
            }
            return;
        }
        self.flush();

        match &element.source_delimiter {
            Some(fence) => {
                let language = element
                    .find_descendant("code")
                    .and_then(|code| code.attr("class"))
                    .and_then(|class| {
                        class
                            .split_whitespace()
                            .find_map(|name| name.strip_prefix("language-"))
                    })
                    .unwrap_or("");
                self.blocks
                    .push(Block::Paragraph(Paragraph::from_text(format!("{fence}{language}"))));
                for line in text.split('\n') {
                    self.blocks.push(Block::Paragraph(Paragraph::from_text(line)));
                }
                self.blocks
                    .push(Block::Paragraph(Paragraph::from_text(fence.as_str())));
            }
            None => self.blocks.push(Block::CodeBlock(CodeBlock {
                children: text
                    .split('\n')
                    .map(|line| CodeLine {
                        text: line.to_string(),
                    })
                    .collect(),
            })),
        }
    }

    /// Inside a quote or list: the element's content goes on lines of its own.
    fn line_group(&mut self, element: &HtmlElement, ctx: Context) {
        self.end_line_if_open();
        self.visit_all(&element.children, ctx);
        self.end_line_if_open();
    }

    /// Converts the children of a quote or list into lines.
    fn collect_lines(&self, element: &HtmlElement, ctx: Context) -> Vec<Vec<Inline>> {
        let mut grouper = Converter::new(Mode::Lines, self.processor, self.links);
        grouper.visit_all(&element.children, ctx);
        grouper.end_line_if_open();
        grouper.lines
    }

    fn push_literal_line(&mut self, prefix: &str, line: Vec<Inline>) {
        let mut children = vec![Inline::text(prefix)];
        children.extend(line);
        self.blocks
            .push(Block::Paragraph(Paragraph::new(normalize_line(children))));
    }

    /// Ends the current line even when it is empty.
    fn end_line(&mut self) {
        let children = self.take_line();
        match self.mode {
            Mode::Blocks => self.blocks.push(Block::Paragraph(Paragraph::new(children))),
            Mode::Lines => self.lines.push(children),
        }
    }

    fn end_line_if_open(&mut self) {
        if !self.line.is_empty() {
            self.end_line();
        }
        self.fresh_line = true;
    }

    /// Emits pending inline content as a paragraph before a block starts.
    fn flush(&mut self) {
        self.end_line_if_open();
    }

    fn finish(&mut self) {
        self.flush();
    }

    fn take_line(&mut self) -> Vec<Inline> {
        self.fresh_line = true;
        normalize_line(std::mem::take(&mut self.line))
    }
}

/// Line prefix for items of a list rendered from markdown.
fn list_prefix(delimiter: &str) -> String {
    match delimiter {
        "-" | "*" => format!("{delimiter} "),
        marker if marker.ends_with('.') => format!("{marker} "),
        marker => format!("{marker}. "),
    }
}

fn is_blank(line: &[Inline]) -> bool {
    line.iter()
        .all(|inline| matches!(inline, Inline::Text(text) if text.text.is_empty()))
}

/// Merges adjacent text leaves with identical marks and drops empty leaves,
/// keeping a single empty leaf when nothing else remains.
fn normalize_line(children: Vec<Inline>) -> Vec<Inline> {
    let mut line: Vec<Inline> = Vec::with_capacity(children.len());
    for inline in children {
        match inline {
            Inline::Text(text) if text.text.is_empty() => {}
            Inline::Text(text) => match line.last_mut() {
                Some(Inline::Text(previous)) if previous.marks == text.marks => {
                    previous.text.push_str(&text.text);
                }
                _ => line.push(Inline::Text(text)),
            },
            other => line.push(other),
        }
    }
    if line.is_empty() {
        line.push(Inline::Text(Text {
            text: String::new(),
            marks: Marks::default(),
        }));
    }
    line
}
