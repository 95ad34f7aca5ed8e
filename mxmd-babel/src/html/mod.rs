//! HTML import into the editor document
//!
//! Message HTML is parsed with `html5ever`, lowered to a small owned tree
//! ([`dom`]) and walked by the converter ([`to_editor`]) into editor blocks.
//!
//! # Element Mapping Table
//!
//! | HTML                                   | Editor node                         | With `data-md`                    |
//! |----------------------------------------|-------------------------------------|-----------------------------------|
//! | `p`                                    | Paragraph                           |                                   |
//! | `h1`..`h6`                             | Heading (level clamped to 3)        | Paragraph `## text`               |
//! | `blockquote`                           | BlockQuote of QuoteLines            | one Paragraph `> line` per line   |
//! | `ol` / `ul`                            | OrderedList / UnorderedList         | one Paragraph `1. item` per item  |
//! | `pre`                                  | CodeBlock of CodeLines              | fence, body lines, fence          |
//! | `b` `strong` `i` `em` `u` `s` `del` `strike` `code` `span[data-mx-spoiler]` | marks on text | delimiters around text |
//! | `a[href]` to a permalink               | Mention                             |                                   |
//! | `a[href]` elsewhere                    | text `[label](href)`                |                                   |
//! | `img[data-mx-emoticon]`                | Emoticon                            |                                   |
//! | `br`                                   | line end                            |                                   |
//!
//! Other elements are transparent: their children are converted in place.

pub mod dom;
pub mod processor;
pub mod to_editor;

pub use dom::{parse_html, HtmlElement, HtmlNode};
pub use processor::{MarkdownEscaper, TextProcessor, Verbatim};
pub use to_editor::dom_to_editor_input;
