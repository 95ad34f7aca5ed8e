//! Markdown, HTML and editor document interop for a Matrix message composer
//!
//!     This crate converts between the three shapes a message takes while it is being written:
//!     the markdown the user types, the HTML that is sent (`formatted_body`), and the block/inline
//!     tree a rich-text editor holds.
//!
//!     TLDR:
//!         - Markdown → HTML goes through two ordered rule tables (./markdown), never a CommonMark parser.
//!         - Every span or block rendered from markdown carries a `data-md` attribute with the typed delimiter.
//!         - HTML → editor tree (./html) reads `data-md` back, so editing a message shows what was typed.
//!         - In markdown mode literal text is backslash-escaped on the way into the editor.
//!
//! Architecture
//!
//!     The conversions are pure functions: no I/O, no shared mutable state. Compiled regexes are
//!     process-wide statics. This is a pure lib, that is, it powers the mxmd cli but is shell
//!     agnostic: no code should be written that supposes a shell environment, be it to std print,
//!     env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── transforms.rs           # Entry points: html/plain → editor input
//!     ├── markdown                # Rule engines and escaping
//!     │   ├── rule.rs             # Rule tables and look-around helpers
//!     │   ├── inline.rs
//!     │   ├── block.rs
//!     │   └── escape.rs
//!     ├── html                    # HTML → editor tree
//!     │   ├── dom.rs              # html5ever output lowered to an owned tree
//!     │   ├── processor.rs        # Text processors (verbatim / markdown escaping)
//!     │   └── to_editor.rs        # The converter
//!     ├── common
//!     │   └── links.rs            # Deep-link resolution
//!     ├── formats                 # Format implementations
//!     ├── ir                      # Editor document tree
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait. Source formats parse into
//!     an editor document, output formats serialize one. See the trait def [./format.rs ]
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod transforms;

pub mod common;
pub mod html;
pub mod ir;
pub mod markdown;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
pub use transforms::{
    html_to_editor_input, html_to_editor_input_with_options, plain_to_editor_input,
    plain_to_editor_input_with_options, ConvertOptions,
};
