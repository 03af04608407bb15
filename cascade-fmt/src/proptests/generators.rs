//! Input generators for property-based testing
#![allow(clippy::expect_used)]
use proptest::prelude::*;

/// Whitespace characters a line may end with, including the less common ones.
fn whitespace_char() -> impl Strategy<Value = char> {
    prop_oneof![
        Just(' '),
        Just('\t'),
        Just('\u{b}'),
        Just('\u{c}'),
        Just('\u{a0}'),
        Just('\u{2003}'),
        Just('\u{3000}'),
        Just('\u{feff}'),
    ]
}

/// A single line: some text followed by a (possibly empty) run of whitespace.
pub fn line() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(whitespace_char(), 0..3),
        prop::string::string_regex(r"[a-zA-Z0-9 \t{}();=éö]{0,20}")
            .expect("Failed to create line body strategy"),
        prop::collection::vec(whitespace_char(), 0..4),
    )
        .prop_map(|(leading, body, trailing)| {
            leading
                .into_iter()
                .chain(body.chars())
                .chain(trailing)
                .collect()
        })
}

/// A document as separate lines.
pub fn lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line(), 0..30)
}

/// A document as one text, with every kind of line terminator mixed in.
pub fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (line(), prop_oneof![Just("\n"), Just("\r\n"), Just("\r")]),
        0..30,
    )
    .prop_map(|chunks| {
        chunks
            .into_iter()
            .map(|(line, terminator)| line + terminator)
            .collect()
    })
}

/// Any string at all, to make sure nothing panics.
pub fn any_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("(?s).*").expect("Failed to create any string strategy")
}
