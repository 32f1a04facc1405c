//! Markup parser for listing entries.
//!
//! This module provides pure parsing functions for converting raw entry text
//! into classified [`Entry`] values. Emphasis markup is translated first, tag
//! classification second.

use crate::model::{DocumentError, Entry, MarkupError, VideoSpec, DEFAULT_VIDEO_FPS, DEFAULT_VIDEO_SIZE};

// Tag prefixes, in dispatch priority order
const TAG_TITLE: &str = "[title]";
const TAG_IMAGE_OPEN: &str = "[img]";
const TAG_IMAGE_CLOSE: &str = "[/img]";
const TAG_GAP: &str = "[gap]";
const TAG_SUBTITLE: &str = "[subtitle]";
const TAG_VIDEO_OPEN: &str = "[video]";
const TAG_VIDEO_CLOSE: &str = "[/video]";
const TAG_BULLET: &str = "[-]";

// Inline emphasis
const EMPHASIS_OPEN: &str = "[b]";
const EMPHASIS_CLOSE: &str = "[/b]";

const DIMENSION_SEPARATOR: char = 'x';

/// Host bold formatting tags that `[b]` / `[/b]` translate into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmphasisTags {
    /// Replaces `[b]`.
    pub open: String,
    /// Replaces `[/b]`.
    pub close: String,
}

impl Default for EmphasisTags {
    fn default() -> Self {
        Self {
            open: "<b>".to_string(),
            close: "</b>".to_string(),
        }
    }
}

/// Translate `[b]...[/b]` into the host's bold tags.
pub fn translate_emphasis(raw: &str, tags: &EmphasisTags) -> String {
    raw.replace(EMPHASIS_OPEN, &tags.open)
        .replace(EMPHASIS_CLOSE, &tags.close)
}

/// Classify a raw entry using the default `<b>` / `</b>` bold tags.
///
/// Total over well-formed input: anything without a recognized prefix is
/// [`Entry::Plain`].
///
/// # Errors
///
/// Returns [`MarkupError`] for an unterminated `[img]` or `[video]` block or
/// for an invalid video dimension suffix.
///
/// # Examples
///
/// ```
/// use richlist::model::{Entry, VideoSpec};
/// use richlist::parser::classify;
///
/// assert_eq!(classify("[title]Hello").unwrap(), Entry::Title("Hello".into()));
/// assert_eq!(
///     classify("[video]clips/a[/video]320x240x15").unwrap(),
///     Entry::Video(VideoSpec::new("clips/a", 320, 240, 15))
/// );
/// assert!(classify("[img]unterminated").is_err());
/// ```
pub fn classify(raw: &str) -> Result<Entry, MarkupError> {
    classify_with(raw, &EmphasisTags::default())
}

/// Classify a raw entry, translating emphasis into the given bold tags first.
///
/// # Errors
///
/// See [`classify`].
pub fn classify_with(raw: &str, tags: &EmphasisTags) -> Result<Entry, MarkupError> {
    let item = translate_emphasis(raw, tags);

    if let Some(text) = item.strip_prefix(TAG_TITLE) {
        return Ok(Entry::Title(text.to_string()));
    }

    if let Some(body) = item.strip_prefix(TAG_IMAGE_OPEN) {
        let (path, caption) = split_block(body, TAG_IMAGE_CLOSE)
            .ok_or_else(|| MarkupError::UnterminatedImage { raw: item.clone() })?;
        return Ok(Entry::Image {
            path: path.to_string(),
            caption: caption.to_string(),
        });
    }

    if item.starts_with(TAG_GAP) {
        return Ok(Entry::Gap);
    }

    if let Some(text) = item.strip_prefix(TAG_SUBTITLE) {
        return Ok(Entry::Subtitle(text.to_string()));
    }

    if let Some(body) = item.strip_prefix(TAG_VIDEO_OPEN) {
        let (source, suffix) = split_block(body, TAG_VIDEO_CLOSE)
            .ok_or_else(|| MarkupError::UnterminatedVideo { raw: item.clone() })?;
        let (width, height, fps) = parse_video_dimensions(suffix)?;
        return Ok(Entry::Video(VideoSpec::new(source, width, height, fps)));
    }

    if let Some(text) = item.strip_prefix(TAG_BULLET) {
        return Ok(Entry::Bullet(text.to_string()));
    }

    Ok(Entry::Plain(item))
}

/// Split `body` at the first `close` tag into (payload, remainder).
fn split_block<'a>(body: &'a str, close: &str) -> Option<(&'a str, &'a str)> {
    let end = body.find(close)?;
    Some((&body[..end], &body[end + close.len()..]))
}

/// Parse a `WIDTHxHEIGHTxFPS` suffix.
///
/// - empty suffix or a single token: 100x100 at 10 fps
/// - two tokens: given size at 10 fps
/// - three or more tokens: given size and fps; tokens past the third are
///   validated but otherwise ignored
///
/// # Errors
///
/// Every token must be a non-negative integer, and the frame rate must be at
/// least 1.
pub fn parse_video_dimensions(suffix: &str) -> Result<(u32, u32, u32), MarkupError> {
    let suffix = suffix.trim();
    if suffix.is_empty() {
        return Ok((DEFAULT_VIDEO_SIZE, DEFAULT_VIDEO_SIZE, DEFAULT_VIDEO_FPS));
    }

    let values = suffix
        .split(DIMENSION_SEPARATOR)
        .enumerate()
        .map(|(position, token)| {
            token
                .trim()
                .parse::<u32>()
                .map_err(|_| MarkupError::InvalidDimension {
                    token: token.to_string(),
                    position,
                })
        })
        .collect::<Result<Vec<u32>, MarkupError>>()?;

    let (width, height) = match values.as_slice() {
        [width, height, ..] => (*width, *height),
        _ => (DEFAULT_VIDEO_SIZE, DEFAULT_VIDEO_SIZE),
    };
    let fps = values.get(2).copied().unwrap_or(DEFAULT_VIDEO_FPS);
    if fps == 0 {
        return Err(MarkupError::ZeroFrameRate);
    }

    Ok((width, height, fps))
}

/// Parse a document with one entry per line.
///
/// Trailing `\r` is stripped; blank lines become empty paragraphs.
///
/// # Errors
///
/// Returns the first malformed line, with its one-based line number.
pub fn parse_document(text: &str) -> Result<Vec<Entry>, DocumentError> {
    parse_document_with(text, &EmphasisTags::default())
}

/// [`parse_document`] with custom bold tags.
///
/// # Errors
///
/// See [`parse_document`].
pub fn parse_document_with(text: &str, tags: &EmphasisTags) -> Result<Vec<Entry>, DocumentError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| {
            let line_text = line.strip_suffix('\r').unwrap_or(line);
            classify_with(line_text, tags).map_err(|source| DocumentError {
                line: index + 1,
                source,
            })
        })
        .collect()
}
