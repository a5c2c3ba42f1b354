//! Line-level parsing of the template
//!
//! Splits the template into lines, lines into literal and code tokens, and
//! rewrites placeholder words inside tokens.

pub mod lexer;
pub mod placeholder;
pub mod source;

pub use lexer::{tokenize, Token, TokenKind, Tokens};
pub use placeholder::{substitute, CodeWord, LiteralWord};
pub use source::{lines, SourceLine, Span};
