//! Template source lines

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// One physical line of the template, terminator included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// Byte offset of the line start in the template
    pub offset: usize,
    /// Raw text including the line terminator, if any
    pub raw: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Line text without its terminator
    pub fn content(&self) -> &'a str {
        let text = self.raw.strip_suffix('\n').unwrap_or(self.raw);
        text.strip_suffix('\r').unwrap_or(text)
    }

    /// The terminator (`"\n"`, `"\r\n"` or `""` on an unterminated last line)
    pub fn ending(&self) -> &'a str {
        &self.raw[self.content().len()..]
    }

    /// Byte span of the line content, used for error reports
    pub fn span(&self) -> Span {
        self.offset..self.offset + self.content().len()
    }
}

/// Split a template into ordered lines, keeping terminators
pub fn lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut offset = 0;
    source
        .split_inclusive('\n')
        .enumerate()
        .map(|(idx, raw)| {
            let line = SourceLine {
                number: idx + 1,
                offset,
                raw,
            };
            offset += raw.len();
            line
        })
        .collect()
}
