//! Macro blocks: the regions of the template that become macro bodies

use std::fmt;

use crate::parser::source::{SourceLine, Span};
use crate::profile::{MacroNames, Markers};
use crate::renderer::HeaderLine;

/// Parameters of both generated macros, in order
pub const MACRO_PARAMETERS: [&str; 6] = [
    "Struct_Name_",
    "Functions_Prefix_",
    "Custom_Key_Type_",
    "Custom_Value_Type_",
    "Custom_Hash_Func_",
    "Custom_Comparison_Func_",
];

/// Which macro a block turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Type and prototype declarations
    Declare,
    /// Function definitions
    Define,
}

impl BlockKind {
    pub fn macro_name<'a>(&self, macros: &'a MacroNames) -> &'a str {
        match self {
            Self::Declare => &macros.declare,
            Self::Define => &macros.define,
        }
    }

    pub fn start_marker<'a>(&self, markers: &'a Markers) -> &'a str {
        match self {
            Self::Declare => &markers.declarations_start,
            Self::Define => &markers.definitions_start,
        }
    }

    pub fn stop_marker<'a>(&self, markers: &'a Markers) -> &'a str {
        match self {
            Self::Declare => &markers.declarations_stop,
            Self::Define => &markers.definitions_stop,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declare => write!(f, "declarations"),
            Self::Define => write!(f, "definitions"),
        }
    }
}

/// A region marker found on a template line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start(BlockKind),
    Stop(BlockKind),
}

impl Marker {
    /// Recognize a marker anywhere in the line
    pub fn classify(line: &SourceLine<'_>, markers: &Markers) -> Option<Self> {
        let content = line.content();
        [BlockKind::Declare, BlockKind::Define]
            .into_iter()
            .find_map(|kind| {
                if content.contains(kind.start_marker(markers)) {
                    Some(Marker::Start(kind))
                } else if content.contains(kind.stop_marker(markers)) {
                    Some(Marker::Stop(kind))
                } else {
                    None
                }
            })
    }
}

/// `#define NAME(params...)` line opening a macro
pub fn signature(macro_name: &str) -> String {
    format!("#define {}({})", macro_name, MACRO_PARAMETERS.join(", "))
}

/// An open block accumulating its transformed lines
#[derive(Debug, Clone)]
pub struct MacroBlock {
    pub kind: BlockKind,
    pub macro_name: String,
    /// Line number of the start marker
    pub opened_at: usize,
    /// Span of the start marker
    pub span: Span,
    /// Signature followed by the body, all continued
    lines: Vec<HeaderLine>,
}

/// What a sealed block produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSummary {
    pub kind: BlockKind,
    pub macro_name: String,
    pub opened_at: usize,
    pub closed_at: usize,
    pub body_lines: usize,
}

impl MacroBlock {
    /// Open a block at its start marker line
    pub fn open(kind: BlockKind, macro_name: &str, marker: &SourceLine<'_>) -> Self {
        Self {
            kind,
            macro_name: macro_name.to_string(),
            opened_at: marker.number,
            span: marker.span(),
            lines: vec![HeaderLine::continued(signature(macro_name), "\n")],
        }
    }

    pub fn push(&mut self, line: HeaderLine) {
        self.lines.push(line);
    }

    /// Body lines pushed so far, signature excluded
    pub fn body(&self) -> &[HeaderLine] {
        &self.lines[1..]
    }

    /// Close the block; its last line loses the continuation marker
    pub fn seal(mut self, closed_at: usize) -> (Vec<HeaderLine>, BlockSummary) {
        if let Some(last) = self.lines.last_mut() {
            last.continued = false;
        }
        let summary = BlockSummary {
            kind: self.kind,
            macro_name: self.macro_name,
            opened_at: self.opened_at,
            closed_at,
            body_lines: self.lines.len() - 1,
        };
        (self.lines, summary)
    }
}
