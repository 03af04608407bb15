//! LSP capability implementations

pub mod formatting;
