//! Structured text reading and writing
//!
//! The data format is line oriented: each line is a list of tokens separated
//! by spaces or tabs, with `"` or backtick quoting and `#` comments. A line
//! indented deeper than the one above it becomes a child of that line, so a
//! file reads as a tree of token records.

mod node;
mod reader;
mod writer;

pub use node::*;
pub use reader::*;
pub use writer::*;
