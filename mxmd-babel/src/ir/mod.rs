//! Intermediate Representation (IR) of an editor document.
//!
//! This module defines the block/inline tree handed to the rich-text editor
//! after an HTML or plain-text conversion. The tree is plain data: it is built
//! fresh by every conversion and owned by the caller afterwards.

pub mod nodes;
