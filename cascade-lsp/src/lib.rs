//! cascade-lsp library
//!
//! Provides the LSP backend that formats `cascade` documents.

pub mod backend;
pub mod capabilities;
pub mod convert;
pub mod state;

pub use backend::Backend;
