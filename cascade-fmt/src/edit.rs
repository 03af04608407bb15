use serde::Serialize;

use crate::{Error, LineRange, LineSource, SourceText};

/// Replace the whole text of one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edit {
    pub range: LineRange,
    pub replacement: String,
}

impl Edit {
    #[must_use]
    pub fn new(range: LineRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }
}

/// Apply `edits` to the text they were computed from.
///
/// Edits must be in ascending line order with at most one edit per line, which is
/// what the formatter produces. Line terminators are carried over untouched.
///
/// # Errors
///
/// Returns [`Error::LineOutOfRange`] if an edit names a line past the end of
/// `source`, [`Error::StaleRange`] if the line's length no longer matches the
/// edit, and [`Error::OverlappingEdits`] if two edits share a line or are out of
/// order. Nothing is applied when any edit is rejected.
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, Error> {
    let text = SourceText::new(source);
    validate(&text, edits)?;

    let mut output = String::with_capacity(source.len());
    let mut pending = edits.iter().peekable();
    for line in text.lines() {
        let edit = pending.next_if(|edit| edit.range.line == line.range.line);
        output.push_str(edit.map_or(line.text, |edit| edit.replacement.as_str()));
        output.push_str(text.terminator(line.range.line).unwrap_or_default());
    }
    Ok(output)
}

fn validate(text: &SourceText<'_>, edits: &[Edit]) -> Result<(), Error> {
    let mut previous: Option<usize> = None;
    for edit in edits {
        let line = edit.range.line;
        if previous.is_some_and(|previous| line <= previous) {
            return Err(Error::OverlappingEdits { line });
        }
        previous = Some(line);

        let current = text.line(line).ok_or(Error::LineOutOfRange {
            line,
            line_count: text.line_count(),
        })?;
        if current.range.len != edit.range.len {
            return Err(Error::StaleRange {
                line,
                expected: edit.range.len,
                actual: current.range.len,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_replaces_only_named_lines() -> Result<(), Error> {
        let source = "foo  \nbar\n  \nbaz\t";
        let edits = vec![
            Edit::new(LineRange::new(0, 5), "foo"),
            Edit::new(LineRange::new(2, 2), ""),
            Edit::new(LineRange::new(3, 4), "baz"),
        ];
        assert_eq!(apply_edits(source, &edits)?, "foo\nbar\n\nbaz");
        Ok(())
    }

    #[test]
    fn test_apply_preserves_terminators() -> Result<(), Error> {
        let source = "a \r\nb\t\rc\n";
        let edits = vec![
            Edit::new(LineRange::new(0, 2), "a"),
            Edit::new(LineRange::new(1, 2), "b"),
        ];
        assert_eq!(apply_edits(source, &edits)?, "a\r\nb\rc\n");
        Ok(())
    }

    #[test]
    fn test_apply_nothing_is_identity() -> Result<(), Error> {
        let source = "unchanged\r\ntext\n";
        assert_eq!(apply_edits(source, &[])?, source);
        Ok(())
    }

    #[test]
    fn test_apply_rejects_line_past_end() {
        let edits = vec![Edit::new(LineRange::new(3, 1), "")];
        assert_eq!(
            apply_edits("a\nb", &edits),
            Err(Error::LineOutOfRange {
                line: 3,
                line_count: 2,
            })
        );
    }

    #[test]
    fn test_apply_rejects_stale_edit() {
        let edits = vec![Edit::new(LineRange::new(0, 5), "foo")];
        assert_eq!(
            apply_edits("foo \n", &edits),
            Err(Error::StaleRange {
                line: 0,
                expected: 5,
                actual: 4,
            })
        );
    }

    #[rstest::rstest]
    #[case::duplicate(0, 0)]
    #[case::descending(1, 0)]
    fn test_apply_rejects_overlapping_edits(#[case] first: usize, #[case] second: usize) {
        let edits = vec![
            Edit::new(LineRange::new(first, 2), "a"),
            Edit::new(LineRange::new(second, 2), "b"),
        ];
        let result = apply_edits("a \nb ", &edits);
        assert_eq!(result, Err(Error::OverlappingEdits { line: second }));
        assert_eq!(result.err().map(|error| error.line()), Some(second));
    }
}
