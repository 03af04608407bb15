/// Errors raised when applying [`Edit`](crate::Edit)s to a text.
///
/// Computing edits never fails; these only show up when edits are applied to a
/// text other than the one they were computed from.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("edit targets line {line}, but the document has {line_count} lines")]
    LineOutOfRange { line: usize, line_count: usize },

    #[error("edit for line {line} expects {expected} bytes of text, found {actual}")]
    StaleRange {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("edits overlap or are out of order at line {line}")]
    OverlappingEdits { line: usize },
}

impl Error {
    /// Line the error refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::LineOutOfRange { line, .. }
            | Self::StaleRange { line, .. }
            | Self::OverlappingEdits { line } => *line,
        }
    }
}
