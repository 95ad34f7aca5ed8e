//! HTML import tests
//!
//! Message HTML → editor blocks, including the round trip from typed markdown.

mod import;
mod round_trip;
