//! Error types for template structure

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::generator::BlockKind;
use crate::parser::source::Span;

/// Malformed macro regions in a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// Stop marker with no open block
    #[error("line {line}: {kind} stop marker outside of any block")]
    UnexpectedStop {
        kind: BlockKind,
        line: usize,
        span: Span,
    },

    /// Start marker while a block is already open
    #[error("line {line}: {found} start marker inside the {open} block opened on line {opened_at}")]
    NestedStart {
        open: BlockKind,
        opened_at: usize,
        found: BlockKind,
        line: usize,
        span: Span,
    },

    /// Stop marker for the other kind of block
    #[error("line {line}: {found} stop marker closes the {open} block opened on line {opened_at}")]
    MismatchedStop {
        open: BlockKind,
        opened_at: usize,
        found: BlockKind,
        line: usize,
        span: Span,
    },

    /// End of template reached with a block still open
    #[error("{kind} block opened on line {opened_at} is never closed")]
    Unterminated {
        kind: BlockKind,
        opened_at: usize,
        span: Span,
    },
}

impl StructureError {
    /// Source span of the offending marker
    pub fn span(&self) -> &Span {
        match self {
            Self::UnexpectedStop { span, .. }
            | Self::NestedStart { span, .. }
            | Self::MismatchedStop { span, .. }
            | Self::Unterminated { span, .. } => span,
        }
    }

    fn label(&self) -> String {
        match self {
            Self::UnexpectedStop { .. } => "no block is open here".to_string(),
            Self::NestedStart { open, .. } => format!("{} block still open", open),
            Self::MismatchedStop { open, .. } => format!("expected the {} stop marker", open),
            Self::Unterminated { .. } => "block starts here".to_string(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let span = self.span().clone();

        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.label())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
