//! Format implementations
//!
//! Source formats turn composer input into an editor document; output formats
//! render a document for inspection.

pub mod html;
pub mod icons;
pub mod json;
pub mod markdown;
pub mod plain;
pub mod text;
pub mod treeviz;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use plain::PlainFormat;
pub use text::TextFormat;
pub use treeviz::TreevizFormat;
