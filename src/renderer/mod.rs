//! Header rendering
//!
//! Turns the generated line model into file contents.

mod header;

pub use header::{render_header, HeaderLine, CONTINUATION};
