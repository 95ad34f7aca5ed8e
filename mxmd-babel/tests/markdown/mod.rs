//! Markdown rule engine tests
//!
//! Markdown → message HTML, and the escaping that keeps literal text literal.

mod escaping;
mod rendering;
