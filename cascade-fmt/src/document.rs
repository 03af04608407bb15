//! Line-oriented view of a document

use serde::Serialize;

/// Identifies the whole text of one line.
///
/// The range always starts at the beginning of the line and covers `len` bytes,
/// which is the line's text without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LineRange {
    /// Zero-based line number
    pub line: usize,
    /// Length of the line's text in bytes
    pub len: usize,
}

impl LineRange {
    #[must_use]
    pub fn new(line: usize, len: usize) -> Self {
        Self { line, len }
    }
}

/// One line of a document: where it is and what it says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub range: LineRange,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    #[must_use]
    pub fn new(line: usize, text: &'a str) -> Self {
        Self {
            range: LineRange::new(line, text.len()),
            text,
        }
    }
}

/// A document as an ordered sequence of lines.
///
/// Implementors own the text; the formatter only ever borrows it for the length of
/// one request.
pub trait LineSource {
    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// The line at `index`, or `None` if the document has no such line.
    fn line(&self, index: usize) -> Option<Line<'_>>;

    /// Iterate every line in document order.
    fn lines(&self) -> Lines<'_, Self> {
        Lines {
            source: self,
            next: 0,
        }
    }
}

/// Iterator over the lines of a [`LineSource`].
#[derive(Debug)]
pub struct Lines<'a, D: ?Sized> {
    source: &'a D,
    next: usize,
}

impl<'a, D: LineSource + ?Sized> Iterator for Lines<'a, D> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.source.line(self.next)?;
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.line_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineSpan {
    /// Byte offset of the first character of the line
    start: usize,
    /// Byte offset one past the last character, terminator excluded
    end: usize,
    /// Byte offset one past the terminator
    next: usize,
}

/// A borrowed text split into lines the way editors split them.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. Text that ends with a terminator
/// has a trailing empty line, and empty text is a single empty line.
#[derive(Debug, Clone)]
pub struct SourceText<'a> {
    text: &'a str,
    spans: Vec<LineSpan>,
}

impl<'a> SourceText<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut spans = Vec::new();
        let mut start = 0;
        let mut bytes = text.bytes().enumerate().peekable();

        while let Some((index, byte)) = bytes.next() {
            let terminator_len = match byte {
                b'\n' => 1,
                b'\r' => {
                    if bytes.next_if(|&(_, next)| next == b'\n').is_some() {
                        2
                    } else {
                        1
                    }
                }
                _ => continue,
            };
            spans.push(LineSpan {
                start,
                end: index,
                next: index + terminator_len,
            });
            start = index + terminator_len;
        }
        spans.push(LineSpan {
            start,
            end: text.len(),
            next: text.len(),
        });

        Self { text, spans }
    }

    /// The full text this view was built from.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte offset at which line `index` starts.
    #[must_use]
    pub fn line_offset(&self, index: usize) -> Option<usize> {
        self.spans.get(index).map(|span| span.start)
    }

    /// The terminator that ends line `index`.
    ///
    /// Returns an empty string for the last line, and `None` if there is no such
    /// line.
    #[must_use]
    pub fn terminator(&self, index: usize) -> Option<&'a str> {
        let span = self.spans.get(index)?;
        self.text.get(span.end..span.next)
    }
}

impl LineSource for SourceText<'_> {
    fn line_count(&self) -> usize {
        self.spans.len()
    }

    fn line(&self, index: usize) -> Option<Line<'_>> {
        let span = self.spans.get(index)?;
        let text = self.text.get(span.start..span.end)?;
        Some(Line::new(index, text))
    }
}

impl<S: AsRef<str>> LineSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Line<'_>> {
        self.get(index).map(|text| Line::new(index, text.as_ref()))
    }
}

impl<S: AsRef<str>, const N: usize> LineSource for [S; N] {
    fn line_count(&self) -> usize {
        N
    }

    fn line(&self, index: usize) -> Option<Line<'_>> {
        self.as_slice().line(index)
    }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Line<'_>> {
        self.as_slice().line(index)
    }
}
