//! Formatter invariants that hold for any document

use proptest::prelude::*;

use crate::{
    LineSource, SourceText, apply_edits, format_text, is_trailing_whitespace,
    trim_trailing_whitespace,
};

use super::generators::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    /// Exactly the lines that end in whitespace get an edit.
    #[test]
    fn only_dirty_lines_get_an_edit(lines in lines()) {
        let edits = trim_trailing_whitespace(&lines);
        for edit in &edits {
            let original = lines.get(edit.range.line).map(String::as_str).unwrap_or_default();
            prop_assert!(original.ends_with(is_trailing_whitespace));
        }

        let dirty = lines
            .iter()
            .filter(|line| line.ends_with(is_trailing_whitespace))
            .count();
        prop_assert_eq!(edits.len(), dirty);
    }

    /// Every replacement is the original line with only a whitespace suffix removed.
    #[test]
    fn replacement_is_clean_prefix(lines in lines()) {
        for edit in trim_trailing_whitespace(&lines) {
            let original = lines.get(edit.range.line).map(String::as_str).unwrap_or_default();
            prop_assert!(!edit.replacement.ends_with(is_trailing_whitespace));
            prop_assert!(original.starts_with(edit.replacement.as_str()));
            prop_assert_eq!(edit.range.len, original.len());

            let removed = original.get(edit.replacement.len()..).unwrap_or_default();
            prop_assert!(!removed.is_empty());
            prop_assert!(removed.chars().all(is_trailing_whitespace));
        }
    }

    /// At most one edit per line, in ascending line order.
    #[test]
    fn edits_are_ordered_and_unique(lines in lines()) {
        let edits = trim_trailing_whitespace(&lines);
        prop_assert!(edits.len() <= lines.line_count());
        let ascending = edits.windows(2).all(|pair| match pair {
            [first, second] => first.range.line < second.range.line,
            _ => true,
        });
        prop_assert!(ascending);
    }

    /// Formatting the formatted output changes nothing.
    ///
    /// Line count can only shrink: emptying a line between a lone `\r` and a
    /// `\n` turns the pair into a single CRLF.
    #[test]
    fn formatting_is_idempotent(text in document()) {
        let edits = trim_trailing_whitespace(&SourceText::new(&text));
        let formatted = apply_edits(&text, &edits)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert!(trim_trailing_whitespace(&SourceText::new(&formatted)).is_empty());
        prop_assert_eq!(&formatted, &format_text(&text));
        let before = SourceText::new(&text).line_count();
        let after = SourceText::new(&formatted).line_count();
        prop_assert!(after <= before);
    }

    /// The trimmer is total: no input makes it panic.
    #[test]
    fn trimmer_never_panics(text in any_text()) {
        let source = SourceText::new(&text);
        let edits = trim_trailing_whitespace(&source);
        prop_assert!(apply_edits(&text, &edits).is_ok());
    }
}
