//! Scaffold line stripping

use crate::parser::source::SourceLine;

/// Whether `line` exists only so the template compiles standalone
///
/// Comparison ignores surrounding whitespace and the line terminator.
pub fn is_scaffold(line: &SourceLine<'_>, scaffold: &[String]) -> bool {
    let content = line.content().trim();
    scaffold.iter().any(|s| s.trim() == content)
}
