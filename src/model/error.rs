//! Error types for richlist.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the viewer binary
//!   - [`DocumentError`] - A document line failed to classify (wraps [`MarkupError`])
//!   - [`InputError`] - Document file/stdin reading failures
//!   - [`HostError`] - Host capability failures during a paint
//!   - `std::io::Error` - Terminal failures
//! - [`ResourceMissingError`] - Image or frame source not found
//!
//! # Error Recovery Strategy
//!
//! Markup errors are raised at classification time and never deferred into a
//! partially painted frame. Missing resources are **non-fatal**: the renderer
//! logs them, paints a placeholder with the same extent and continues. Every
//! other host failure propagates unrecovered; the host loop simply retries on
//! the next frame.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed tag payload, raised by [`crate::parser::classify`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// `[img]` without a matching `[/img]`.
    #[error("unterminated [img] block: missing [/img] in {raw:?}")]
    UnterminatedImage {
        /// The entry text after emphasis translation.
        raw: String,
    },

    /// `[video]` without a matching `[/video]`.
    #[error("unterminated [video] block: missing [/video] in {raw:?}")]
    UnterminatedVideo {
        /// The entry text after emphasis translation.
        raw: String,
    },

    /// A `WIDTHxHEIGHTxFPS` token that is not a non-negative integer.
    #[error("invalid video dimension {token:?} at position {position}")]
    InvalidDimension {
        /// The offending token.
        token: String,
        /// Zero-based token position (0 = width, 1 = height, 2 = fps).
        position: usize,
    },

    /// A frame rate of zero.
    #[error("video frame rate must be at least 1")]
    ZeroFrameRate,
}

/// A document line that failed to classify.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct DocumentError {
    /// One-based line number.
    pub line: usize,
    /// Underlying markup error.
    #[source]
    pub source: MarkupError,
}

/// Kind of resource a lookup failed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Image referenced by an `[img]` entry.
    Image,
    /// Frame sequence referenced by a `[video]` entry.
    Frames,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Image => f.write_str("image"),
            ResourceKind::Frames => f.write_str("frame sequence"),
        }
    }
}

/// Image or frame source not found.
///
/// Recovered locally: the listing substitutes a placeholder and continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} not found: {path}")]
pub struct ResourceMissingError {
    /// What was being looked up.
    pub kind: ResourceKind,
    /// Path as written in the markup.
    pub path: String,
}

impl ResourceMissingError {
    /// Missing image.
    pub fn image(path: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::Image,
            path: path.into(),
        }
    }

    /// Missing frame sequence.
    pub fn frames(path: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::Frames,
            path: path.into(),
        }
    }
}

/// Failure reported by a host capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A resource could not be found. The renderer recovers from this one.
    #[error(transparent)]
    ResourceMissing(#[from] ResourceMissingError),

    /// Any other backend failure. Propagated unrecovered.
    #[error("host backend error: {0}")]
    Backend(String),
}

/// Errors encountered when reading a document from a file or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document file does not exist.
    #[error("Document not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// No file given and stdin is a terminal.
    #[error("No input: provide a document path or pipe markup to stdin")]
    NoInput,

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the document.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// The document contains malformed markup.
    #[error("Malformed document: {0}")]
    Document(#[from] DocumentError),

    /// A host capability failed while painting.
    #[error("Render failed: {0}")]
    Host(#[from] HostError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn unterminated_image_display_mentions_closing_tag() {
        let err = MarkupError::UnterminatedImage {
            raw: "[img]icons/x".to_string(),
        };
        assert!(err.to_string().contains("[/img]"));
    }

    #[test]
    fn invalid_dimension_display_includes_token_and_position() {
        let err = MarkupError::InvalidDimension {
            token: "wide".to_string(),
            position: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"wide\""), "got: {msg}");
        assert!(msg.contains("position 0"), "got: {msg}");
    }

    #[test]
    fn document_error_prefixes_line_and_keeps_source() {
        let err = DocumentError {
            line: 7,
            source: MarkupError::ZeroFrameRate,
        };
        assert!(err.to_string().starts_with("line 7:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn resource_missing_converts_into_host_error() {
        let host: HostError = ResourceMissingError::image("icons/gone").into();
        assert_eq!(host.to_string(), "image not found: icons/gone");
    }

    #[test]
    fn app_error_from_document_error() {
        let app: AppError = DocumentError {
            line: 1,
            source: MarkupError::ZeroFrameRate,
        }
        .into();
        assert!(matches!(app, AppError::Document(_)));
    }

    #[test]
    fn app_error_from_io_error() {
        let app: AppError = std::io::Error::other("tty gone").into();
        assert!(matches!(app, AppError::Terminal(_)));
        assert!(app.to_string().contains("tty gone"));
    }

    #[test]
    fn input_error_nested_io_keeps_message() {
        let input: InputError = std::io::Error::other("disk").into();
        let app: AppError = input.into();
        assert!(app.to_string().contains("disk"));
    }
}
