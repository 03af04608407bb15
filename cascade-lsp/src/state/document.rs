//! Single document state management

use cascade_fmt::{FILE_EXTENSION, LANGUAGE_ID};
use tower_lsp::lsp_types::Url;

/// The editor's view of one open document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    /// Full text as last synced from the editor
    pub text: String,
    /// Version from the editor (for sync validation)
    pub version: i32,
    /// Language identifier the editor opened the document with
    pub language_id: String,
}

impl DocumentState {
    #[must_use]
    pub fn new(text: String, version: i32, language_id: String) -> Self {
        Self {
            text,
            version,
            language_id,
        }
    }

    /// Whether the formatter applies to this document.
    ///
    /// Editors that have no `cascade` language registered open the files as plain
    /// text, so a `.cascade` extension is accepted too.
    #[must_use]
    pub fn is_cascade(&self, uri: &Url) -> bool {
        self.language_id == LANGUAGE_ID
            || uri
                .path()
                .rsplit_once('.')
                .is_some_and(|(_, extension)| extension == FILE_EXTENSION)
    }
}
