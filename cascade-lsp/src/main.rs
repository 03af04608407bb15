//! cascade-lsp: Language Server Protocol formatter for `cascade` documents
//!
//! The server answers `textDocument/formatting` for open `cascade` documents by
//! stripping trailing whitespace from every line.

use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

use cascade_lsp::Backend;

#[tokio::main]
async fn main() {
    // Logs go to stderr since stdout is for LSP
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting cascade-lsp server");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
