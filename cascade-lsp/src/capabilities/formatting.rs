//! Document Formatting: strip trailing whitespace from every line

use cascade_fmt::{FormattingProvider, LineSource, SourceText, TrailingWhitespaceTrimmer};
use tower_lsp::lsp_types::{TextEdit, Url};

use crate::convert;
use crate::state::{DocumentState, Workspace};

/// Answer a formatting request for `uri`.
///
/// Returns `None` when the document is not open or is not a `cascade` document,
/// so the editor leaves it to other formatters.
#[must_use]
pub fn formatting_edits(workspace: &Workspace, uri: &Url) -> Option<Vec<TextEdit>> {
    let doc = workspace.get_document(uri)?;
    if !doc.is_cascade(uri) {
        tracing::debug!(%uri, language_id = %doc.language_id, "not a cascade document, skipping");
        return None;
    }

    let edits = format_document(&doc);
    tracing::debug!(%uri, version = doc.version, edits = edits.len(), "formatted document");
    Some(edits)
}

/// Compute the formatting edits for a document's current text.
///
/// Each edit replaces one whole line; clean lines get no edit.
#[must_use]
pub fn format_document(doc: &DocumentState) -> Vec<TextEdit> {
    let source = SourceText::new(&doc.text);
    TrailingWhitespaceTrimmer
        .provide_edits(&source)
        .into_iter()
        .filter_map(|edit| {
            let line = source.line(edit.range.line)?;
            Some(convert::edit_to_text_edit(&line, edit))
        })
        .collect()
}
