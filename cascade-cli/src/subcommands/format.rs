use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use cascade_fmt::{Edit, FILE_EXTENSION, SourceText, apply_edits, trim_trailing_whitespace};
use clap::{Args as ClapArgs, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{self, Error, TrailingWhitespace};

/// How files that would change are reported in check mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    /// Annotated source snippets on stderr
    Human,
    /// A JSON array of files and their edits on stdout
    Json,
}

/// Strip trailing whitespace from `cascade` files
#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Files or directories to format
    ///
    /// Directories are searched recursively for `.cascade` files.
    #[arg(conflicts_with = "stdin")]
    pub files: Vec<PathBuf>,

    /// Report files that would change instead of rewriting them
    #[arg(long)]
    pub check: bool,

    /// Read a document from stdin and write the formatted text to stdout
    #[arg(long, conflicts_with = "files")]
    pub stdin: bool,

    /// Output format for check mode
    #[arg(long, value_enum, default_value_t = MessageFormat::Human, requires = "check")]
    pub message_format: MessageFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Write,
    Check,
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Unchanged,
    Reformatted { lines: usize },
    WouldChange { source: String, edits: Vec<Edit> },
}

#[derive(Debug, Serialize)]
struct FileReport<'a> {
    path: &'a Path,
    edits: &'a [Edit],
}

pub fn run(args: &Args) -> Result<(), Error> {
    let mode = if args.check { Mode::Check } else { Mode::Write };

    if args.stdin {
        let changed = format_stream(io::stdin().lock(), io::stdout().lock(), mode)?;
        return if changed && mode == Mode::Check {
            Err(Error::CheckFailed { count: 1 })
        } else {
            Ok(())
        };
    }

    if args.files.is_empty() {
        return Err(Error::NoInput);
    }
    let files = collect_files(&args.files)?;
    if files.is_empty() {
        return Err(Error::NoCascadeFiles);
    }
    tracing::debug!(count = files.len(), ?mode, "formatting files");

    let results: Vec<(PathBuf, Result<Outcome, Error>)> = files
        .into_par_iter()
        .map(|path| {
            let result = format_file(&path, mode);
            (path, result)
        })
        .collect();

    report(args.message_format, results)
}

#[tracing::instrument(skip(results))]
fn report(
    message_format: MessageFormat,
    results: Vec<(PathBuf, Result<Outcome, Error>)>,
) -> Result<(), Error> {
    let mut failed = 0;
    let mut would_change = Vec::new();

    for (path, result) in results {
        match result {
            Ok(Outcome::Unchanged) => {
                tracing::debug!(path = %path.display(), "already formatted");
            }
            Ok(Outcome::Reformatted { lines }) => {
                tracing::info!(path = %path.display(), lines, "reformatted");
            }
            Ok(Outcome::WouldChange { source, edits }) => would_change.push((path, source, edits)),
            Err(e) => {
                failed += 1;
                error::display(e);
            }
        }
    }

    if !would_change.is_empty() {
        match message_format {
            MessageFormat::Human => {
                for (path, source, edits) in &would_change {
                    error::display(TrailingWhitespace::new(
                        path.display().to_string(),
                        source,
                        edits,
                    ));
                }
            }
            MessageFormat::Json => {
                let reports: Vec<FileReport<'_>> = would_change
                    .iter()
                    .map(|(path, _, edits)| FileReport { path, edits })
                    .collect();
                let mut stdout = io::stdout().lock();
                serde_json::to_writer_pretty(&mut stdout, &reports)?;
                writeln!(stdout).map_err(Error::Stdout)?;
            }
        }
    }

    if failed > 0 {
        return Err(Error::Failed { count: failed });
    }
    if !would_change.is_empty() {
        return Err(Error::CheckFailed {
            count: would_change.len(),
        });
    }
    Ok(())
}

/// Expand directories into the `.cascade` files below them, sorted by path.
fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            walk_dir(path, &mut found)?;
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), Error> {
    let read_error = |source| Error::Read {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == FILE_EXTENSION) {
            files.push(path);
        }
    }
    Ok(())
}

#[tracing::instrument(level = "debug")]
fn format_file(path: &Path, mode: Mode) -> Result<Outcome, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })?;

    let edits = trim_trailing_whitespace(&SourceText::new(&source));
    if edits.is_empty() {
        return Ok(Outcome::Unchanged);
    }

    match mode {
        Mode::Check => Ok(Outcome::WouldChange { source, edits }),
        Mode::Write => {
            let formatted = apply_edits(&source, &edits).map_err(|source| Error::Apply {
                path: path.to_path_buf(),
                source,
            })?;
            fs::write(path, formatted).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Outcome::Reformatted { lines: edits.len() })
        }
    }
}

/// Format a whole document from `reader` into `writer`.
///
/// In check mode nothing is written. Returns whether the document changed.
fn format_stream<R: Read, W: Write>(mut reader: R, mut writer: W, mode: Mode) -> Result<bool, Error> {
    let mut source = String::new();
    reader.read_to_string(&mut source).map_err(Error::Stdin)?;

    let formatted = cascade_fmt::format_text(&source);
    let changed = formatted != source;
    if mode == Mode::Write {
        writer.write_all(formatted.as_bytes()).map_err(Error::Stdout)?;
        writer.flush().map_err(Error::Stdout)?;
    }
    Ok(changed)
}
