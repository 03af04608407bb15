use std::{io, path::PathBuf};

use cascade_fmt::{Edit, SourceText};
use miette::{Diagnostic, LabeledSpan, NamedSource};

#[derive(Debug, Diagnostic, thiserror::Error)]
pub(crate) enum Error {
    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(cascade::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(cascade::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin")]
    #[diagnostic(code(cascade::stdin))]
    Stdin(#[source] io::Error),

    #[error("failed to write stdout")]
    #[diagnostic(code(cascade::stdout))]
    Stdout(#[source] io::Error),

    #[error("{} is not valid UTF-8", .path.display())]
    #[diagnostic(code(cascade::encoding))]
    Encoding { path: PathBuf },

    #[error("could not apply formatting edits to {}", .path.display())]
    #[diagnostic(code(cascade::apply))]
    Apply {
        path: PathBuf,
        #[source]
        source: cascade_fmt::Error,
    },

    #[error("failed to write report")]
    #[diagnostic(code(cascade::report))]
    Report(#[from] serde_json::Error),

    #[error("nothing to format")]
    #[diagnostic(
        code(cascade::no_input),
        help("pass one or more files or directories, or use --stdin")
    )]
    NoInput,

    #[error("no `.cascade` files found under the given paths")]
    #[diagnostic(
        code(cascade::no_files),
        help("directories are searched recursively for files ending in `.cascade`")
    )]
    NoCascadeFiles,

    #[error("{count} file(s) would be reformatted")]
    #[diagnostic(
        code(cascade::check),
        help("run `cascade format` without --check to apply the changes")
    )]
    CheckFailed { count: usize },

    #[error("{count} file(s) could not be formatted")]
    #[diagnostic(code(cascade::failed))]
    Failed { count: usize },
}

/// Trailing whitespace found in one file, with every offending line labelled
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("trailing whitespace in {path}")]
#[diagnostic(code(cascade::trailing_whitespace), severity(Warning))]
pub(crate) struct TrailingWhitespace {
    path: String,

    #[help]
    advice: String,

    #[source_code]
    src: NamedSource<String>,

    #[label(collection)]
    spans: Vec<LabeledSpan>,
}

impl TrailingWhitespace {
    pub(crate) fn new(path: String, source: &str, edits: &[Edit]) -> Self {
        let text = SourceText::new(source);
        let spans = edits
            .iter()
            .filter_map(|edit| {
                let start = text.line_offset(edit.range.line)? + edit.replacement.len();
                let len = edit.range.len.saturating_sub(edit.replacement.len());
                Some(LabeledSpan::new_with_span(
                    Some("trailing whitespace".to_string()),
                    (start, len),
                ))
            })
            .collect();

        Self {
            src: NamedSource::new(path.clone(), source.to_string()),
            path,
            advice: format!("{} line(s) would change", edits.len()),
            spans,
        }
    }

    #[cfg(test)]
    pub(crate) fn spans(&self) -> &[LabeledSpan] {
        &self.spans
    }
}

pub(crate) fn display<E: Diagnostic + Send + Sync + 'static>(error: E) {
    eprintln!("{:?}", miette::Report::new(error));
}
