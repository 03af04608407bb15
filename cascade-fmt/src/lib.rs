//! Trailing-whitespace formatter for `cascade` documents.
//!
//! The formatter looks at a document one line at a time. Every line that ends in
//! whitespace gets an [`Edit`] replacing its text with the same text minus that
//! whitespace; every other line is left alone. Nothing else about the document is
//! inspected: there is no grammar and no configuration.
//!
//! Documents are anything implementing [`LineSource`]. [`SourceText`] indexes a
//! `&str` the way an editor does (`\n`, `\r\n` and `\r` all end a line), and slices
//! of strings are treated as one line per element.
//!
//! ```
//! use cascade_fmt::{Edit, LineRange, SourceText, trim_trailing_whitespace};
//!
//! let text = SourceText::new("let x = 1;  \nlet y = 2;\n");
//! let edits = trim_trailing_whitespace(&text);
//!
//! assert_eq!(edits, vec![Edit::new(LineRange::new(0, 12), "let x = 1;")]);
//! ```

mod document;
mod edit;
mod error;
mod trim;

#[cfg(test)]
mod proptests;

pub use document::{Line, LineRange, LineSource, Lines, SourceText};
pub use edit::{Edit, apply_edits};
pub use error::Error;
pub use trim::{
    FormattingProvider, TrailingWhitespaceTrimmer, format_text, is_trailing_whitespace,
    trim_line, trim_trailing_whitespace,
};

/// Language identifier the formatter is registered for.
pub const LANGUAGE_ID: &str = "cascade";

/// File extension of `cascade` sources.
pub const FILE_EXTENSION: &str = "cascade";
