use std::io;

use clap::{Parser, Subcommand};

mod error;
mod subcommands;

/// Formatter for `cascade` sources
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Strip trailing whitespace from `cascade` files
    Format(subcommands::format::Args),
}

fn setup_logging() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let filter = EnvFilter::try_from_env("CASCADE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::IsTerminal::is_terminal(&io::stderr()))
        .with_filter(filter);

    tracing_subscriber::registry().with(layer).init();
}

fn main() -> miette::Result<()> {
    setup_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Format(args) => subcommands::format::run(&args)?,
    }
    Ok(())
}
