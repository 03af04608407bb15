//! Workspace-level state management

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::Ref;
use tower_lsp::lsp_types::Url;

use crate::state::DocumentState;

/// Workspace-level state management
pub struct Workspace {
    /// Open documents: URI -> `DocumentState`
    documents: DashMap<Url, DocumentState>,
}

impl Workspace {
    /// Create a new workspace
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Track a newly opened document
    pub fn open_document(&self, uri: Url, language_id: String, text: String, version: i32) {
        self.documents
            .insert(uri, DocumentState::new(text, version, language_id));
    }

    /// Replace a document's text on change.
    ///
    /// Changes for a document that was never opened are tracked with an empty
    /// language id, so only its file extension can mark it as `cascade`.
    pub fn update_document(&self, uri: Url, text: String, version: i32) {
        match self.documents.entry(uri) {
            Entry::Occupied(mut entry) => {
                let doc = entry.get_mut();
                doc.text = text;
                doc.version = version;
            }
            Entry::Vacant(entry) => {
                entry.insert(DocumentState::new(text, version, String::new()));
            }
        }
    }

    /// Get a reference to a document's state
    #[must_use]
    pub fn get_document(&self, uri: &Url) -> Option<Ref<'_, Url, DocumentState>> {
        self.documents.get(uri)
    }

    /// Remove a document from the workspace
    pub fn remove_document(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Number of open documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    type Error = Box<dyn std::error::Error>;

    #[test]
    fn test_open_change_close() -> Result<(), Error> {
        let workspace = Workspace::new();
        let uri = Url::parse("file:///project/main.cascade")?;

        workspace.open_document(uri.clone(), "cascade".to_string(), "a ".to_string(), 1);
        workspace.update_document(uri.clone(), "b\t".to_string(), 2);

        let doc = workspace.get_document(&uri).map(|doc| doc.clone());
        assert_eq!(
            doc,
            Some(DocumentState::new("b\t".to_string(), 2, "cascade".to_string()))
        );

        workspace.remove_document(&uri);
        assert!(workspace.get_document(&uri).is_none());
        assert!(workspace.is_empty());
        Ok(())
    }

    #[test]
    fn test_change_without_open_is_tracked() -> Result<(), Error> {
        let workspace = Workspace::new();
        let uri = Url::parse("file:///project/late.cascade")?;

        workspace.update_document(uri.clone(), "late ".to_string(), 7);

        let language_id = workspace
            .get_document(&uri)
            .map(|doc| (doc.language_id.clone(), doc.version));
        assert_eq!(language_id, Some((String::new(), 7)));
        assert_eq!(workspace.len(), 1);
        Ok(())
    }
}
