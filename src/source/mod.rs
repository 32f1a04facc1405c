//! Document input sources.
//!
//! A document is read from a file path or from piped stdin, then split into
//! entries one line at a time by [`crate::parser::parse_document`].

use crate::model::error::InputError;
use crate::model::{AppError, Entry};
use crate::parser::{parse_document_with, EmphasisTags};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Where the document comes from.
#[derive(Debug)]
pub enum InputSource {
    /// A file on disk.
    File(FileSource),
    /// Piped stdin.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Short name for the status bar.
    pub fn label(&self) -> String {
        match self {
            InputSource::File(file) => file.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }

    /// Directory that relative image and frame paths resolve against.
    pub fn base_dir(&self) -> PathBuf {
        match self {
            InputSource::File(file) => file.base_dir(),
            InputSource::Stdin(_) => PathBuf::from("."),
        }
    }

    /// Full document text.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if stdin cannot be read.
    pub fn read_text(&mut self) -> Result<String, InputError> {
        match self {
            InputSource::File(file) => Ok(file.contents().to_string()),
            InputSource::Stdin(stdin) => stdin.read_all(),
        }
    }
}

/// Pick the input source.
///
/// A path wins; without one, stdin is used if it is piped.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` for a missing file and
/// `InputError::NoInput` when there is no path and stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

/// A parsed document ready to be listed.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Classified entries in document order.
    pub entries: Vec<Entry>,
    /// Directory for resolving resource paths.
    pub base_dir: PathBuf,
    /// Source name for display.
    pub label: String,
}

/// Read and classify a document from `source`.
///
/// # Errors
///
/// Returns `AppError::InputRead` if reading fails and `AppError::Document`
/// for the first malformed line.
pub fn load_document(source: &mut InputSource, tags: &EmphasisTags) -> Result<Document, AppError> {
    let text = source.read_text()?;
    load_from_reader_text(&text, source.base_dir(), source.label(), tags)
}

/// Read and classify a document from any reader.
///
/// # Errors
///
/// See [`load_document`].
pub fn load_from_reader<R: Read>(
    reader: R,
    base_dir: PathBuf,
    label: impl Into<String>,
    tags: &EmphasisTags,
) -> Result<Document, AppError> {
    let text = StdinSource::from_reader(reader).read_all()?;
    load_from_reader_text(&text, base_dir, label.into(), tags)
}

fn load_from_reader_text(
    text: &str,
    base_dir: PathBuf,
    label: String,
    tags: &EmphasisTags,
) -> Result<Document, AppError> {
    let entries = parse_document_with(text, tags)?;
    info!(source = %label, entries = entries.len(), "document loaded");
    Ok(Document {
        entries,
        base_dir,
        label,
    })
}
