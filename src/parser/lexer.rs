//! Line tokenizer separating string literals from code
//!
//! The scanner walks a line character by character, tracking whether it is
//! inside a double-quoted literal and whether the previous character was a
//! backslash escape. Tokens borrow from the line and concatenate back to it
//! exactly.

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Double-quoted literal, quotes included
    StringLiteral,
    /// Anything between literals
    Code,
}

/// A contiguous span of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn literal(text: &'a str) -> Self {
        Self {
            kind: TokenKind::StringLiteral,
            text,
        }
    }

    pub fn code(text: &'a str) -> Self {
        Self {
            kind: TokenKind::Code,
            text,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind == TokenKind::StringLiteral
    }
}

/// Iterator over the tokens of one line
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line: &'a str,
    pos: usize,
}

/// Tokenize a single line
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens { line, pos: 0 }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.line[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let kind = if rest.starts_with('"') {
            TokenKind::StringLiteral
        } else {
            TokenKind::Code
        };
        let len = scan(rest, kind);
        self.pos += len;

        Some(Token {
            kind,
            text: &rest[..len],
        })
    }
}

/// Length in bytes of the token of `kind` starting at the head of `rest`
fn scan(rest: &str, kind: TokenKind) -> usize {
    let mut in_literal = false;
    let mut escaped = false;

    for (idx, ch) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' if in_literal => return idx + 1,
            '"' if idx == 0 && kind == TokenKind::StringLiteral => in_literal = true,
            // An unescaped quote ends a code run
            '"' => return idx,
            _ => {}
        }
    }

    // Unterminated literal runs to the end of the line
    rest.len()
}
