//! Output header lines and their rendering

use std::fmt;

/// Line-continuation marker appended to macro body lines
pub const CONTINUATION: char = '\\';

/// One physical line of the generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    /// Line content without continuation marker or terminator
    pub text: String,
    /// Whether the line ends with a continuation marker
    pub continued: bool,
    /// Line terminator
    pub ending: String,
}

impl HeaderLine {
    /// A line reproduced exactly as read
    pub fn verbatim(text: &str, ending: &str) -> Self {
        Self {
            text: text.to_string(),
            continued: false,
            ending: ending.to_string(),
        }
    }

    /// A macro body line, continued onto the next one
    pub fn continued(text: impl Into<String>, ending: &str) -> Self {
        let ending = if ending.is_empty() { "\n" } else { ending };
        Self {
            text: text.into(),
            continued: true,
            ending: ending.to_string(),
        }
    }
}

impl fmt::Display for HeaderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if self.continued {
            write!(f, "{}", CONTINUATION)?;
        }
        f.write_str(&self.ending)
    }
}

/// Render header lines into the final file contents
pub fn render_header(lines: &[HeaderLine]) -> String {
    let capacity = lines.iter().map(|l| l.text.len() + l.ending.len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        out.push_str(&line.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_line() {
        let line = HeaderLine::verbatim("#include <stdio.h>", "\r\n");
        assert_eq!(line.to_string(), "#include <stdio.h>\r\n");
    }

    #[test]
    fn test_continued_line() {
        let line = HeaderLine::continued("struct Struct_Name_;", "\n");
        assert_eq!(line.to_string(), "struct Struct_Name_;\\\n");
    }

    #[test]
    fn test_continued_line_gets_newline() {
        let line = HeaderLine::continued("}", "");
        assert_eq!(line.to_string(), "}\\\n");
    }

    #[test]
    fn test_render_header() {
        let lines = vec![
            HeaderLine::continued("#define M()", "\n"),
            HeaderLine::verbatim("int x;", "\n"),
            HeaderLine::verbatim("", ""),
        ];
        assert_eq!(render_header(&lines), "#define M()\\\nint x;\n");
    }
}
