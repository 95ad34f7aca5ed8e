//! Lowering of parsed HTML into a small owned tree.
//!
//! html5ever builds a full reference-counted DOM; the converter only needs
//! tags, attributes and text, so the body is copied into [`HtmlNode`]s once.
//! Comments, doctypes and non-content subtrees are dropped along the way.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Subtrees that never carry message content.
const DROPPED_TAGS: [&str; 6] = ["script", "style", "template", "head", "title", "mx-reply"];

/// The attribute holding the markdown delimiter an element was rendered from.
pub const SOURCE_DELIMITER_ATTR: &str = "data-md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Text(String),
    Element(HtmlElement),
}

/// An element of the lowered tree.
///
/// `source_delimiter` is the element's `data-md` attribute, kept apart from
/// the other attributes: `Some` means the element came from typed markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlElement {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub source_delimiter: Option<String>,
    pub children: Vec<HtmlNode>,
}

impl HtmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if name == SOURCE_DELIMITER_ATTR {
            self.source_delimiter = Some(value.into());
        } else {
            self.attrs.push((name, value.into()));
        }
        self
    }

    pub fn with_child(mut self, child: HtmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(HtmlNode::Text(text.into()))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(key, _)| key == name)
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(&self.children, &mut text);
        text
    }

    /// First descendant element with the given tag.
    pub fn find_descendant(&self, tag: &str) -> Option<&HtmlElement> {
        self.children.iter().find_map(|child| match child {
            HtmlNode::Element(element) if element.tag == tag => Some(element),
            HtmlNode::Element(element) => element.find_descendant(tag),
            HtmlNode::Text(_) => None,
        })
    }
}

impl From<HtmlElement> for HtmlNode {
    fn from(element: HtmlElement) -> Self {
        HtmlNode::Element(element)
    }
}

fn collect_text(nodes: &[HtmlNode], out: &mut String) {
    for node in nodes {
        match node {
            HtmlNode::Text(text) => out.push_str(text),
            HtmlNode::Element(element) => collect_text(&element.children, out),
        }
    }
}

/// Parses an HTML fragment and returns the content of its body.
pub fn parse_html(html: &str) -> Vec<HtmlNode> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    match find_body(&dom.document) {
        Some(body) => lower_children(&body),
        None => Vec::new(),
    }
}

fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { ref name, .. } = handle.data {
        if &*name.local == "body" {
            return Some(handle.clone());
        }
    }
    handle.children.borrow().iter().find_map(find_body)
}

fn lower_children(handle: &Handle) -> Vec<HtmlNode> {
    handle.children.borrow().iter().filter_map(lower).collect()
}

fn lower(handle: &Handle) -> Option<HtmlNode> {
    match handle.data {
        NodeData::Text { ref contents } => Some(HtmlNode::Text(contents.borrow().to_string())),
        NodeData::Element {
            ref name,
            ref attrs,
            ..
        } => {
            let tag = name.local.to_ascii_lowercase().to_string();
            if DROPPED_TAGS.contains(&tag.as_str()) {
                tracing::debug!(tag = %tag, "dropping non-content subtree");
                return None;
            }
            let element = attrs
                .borrow()
                .iter()
                .fold(HtmlElement::new(tag), |element, attr| {
                    element.with_attr(attr.name.local.to_string(), attr.value.to_string())
                });
            Some(HtmlNode::Element(HtmlElement {
                children: lower_children(handle),
                ..element
            }))
        }
        _ => None,
    }
}
