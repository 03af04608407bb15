//! Type conversions between cascade-fmt and LSP types

use cascade_fmt::{Edit, Line};
use tower_lsp::lsp_types::{Position, Range, TextEdit};

/// Convert usize to u32 for LSP types, saturating at `u32::MAX`.
///
/// LSP uses u32 for line/column numbers while the formatter uses usize.
fn to_lsp_u32(val: usize) -> u32 {
    val.try_into().unwrap_or(u32::MAX)
}

/// Length of `text` in UTF-16 code units, the unit LSP columns are counted in.
#[must_use]
pub fn utf16_len(text: &str) -> u32 {
    to_lsp_u32(text.chars().map(char::len_utf16).sum())
}

/// The LSP range spanning the whole text of `line`, terminator excluded.
#[must_use]
pub fn line_to_range(line: &Line<'_>) -> Range {
    let number = to_lsp_u32(line.range.line);
    Range {
        start: Position {
            line: number,
            character: 0,
        },
        end: Position {
            line: number,
            character: utf16_len(line.text),
        },
    }
}

/// Convert a formatter edit into an LSP `TextEdit`.
///
/// `line` is the line the edit was computed from; its text is needed to express
/// the edit's end column in UTF-16.
#[must_use]
pub fn edit_to_text_edit(line: &Line<'_>, edit: Edit) -> TextEdit {
    TextEdit {
        range: line_to_range(line),
        new_text: edit.replacement,
    }
}
