//! Trailing-whitespace trimming

use crate::{Edit, LineSource, SourceText};

/// Whether `c` counts as trailing whitespace.
///
/// This is the Unicode `White_Space` set without NEL (U+0085), plus the byte order
/// mark (U+FEFF), which is the class editors' regex engines use for `\s`.
#[must_use]
pub fn is_trailing_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// The text of one line with its trailing whitespace removed.
///
/// Leading and interior whitespace is kept as is.
#[must_use]
pub fn trim_line(text: &str) -> &str {
    text.trim_end_matches(is_trailing_whitespace)
}

/// Compute one [`Edit`] per line that ends in whitespace.
///
/// Lines that are already clean get no edit at all. Edits come out in document
/// order, one per line at most.
#[must_use]
pub fn trim_trailing_whitespace<D: LineSource + ?Sized>(document: &D) -> Vec<Edit> {
    let edits: Vec<Edit> = document
        .lines()
        .filter_map(|line| {
            let trimmed = trim_line(line.text);
            (trimmed.len() != line.text.len()).then(|| Edit::new(line.range, trimmed))
        })
        .collect();

    tracing::trace!(
        lines = document.line_count(),
        edits = edits.len(),
        "trimmed trailing whitespace"
    );
    edits
}

/// Trim every line of `text`, keeping each line's terminator.
#[must_use]
pub fn format_text(text: &str) -> String {
    let source = SourceText::new(text);
    let mut output = String::with_capacity(text.len());
    for line in source.lines() {
        output.push_str(trim_line(line.text));
        output.push_str(source.terminator(line.range.line).unwrap_or_default());
    }
    output
}

/// Something that can produce formatting edits for a whole document.
pub trait FormattingProvider {
    fn provide_edits<D: LineSource + ?Sized>(&self, document: &D) -> Vec<Edit>;
}

/// The `cascade` document formatter: trailing whitespace goes, nothing else
/// changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespaceTrimmer;

impl FormattingProvider for TrailingWhitespaceTrimmer {
    fn provide_edits<D: LineSource + ?Sized>(&self, document: &D) -> Vec<Edit> {
        trim_trailing_whitespace(document)
    }
}
