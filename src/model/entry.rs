//! Classified listing entries.
//!
//! An [`Entry`] is produced once by [`crate::parser::classify`]; the measure
//! and render passes only ever match on the variant, never on raw prefixes.

/// Default placeholder size for a frame sequence with no dimension suffix.
pub const DEFAULT_VIDEO_SIZE: u32 = 100;

/// Default playback rate for a frame sequence with fewer than three dimension tokens.
pub const DEFAULT_VIDEO_FPS: u32 = 10;

/// One markup-tagged unit of list content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Section header: title font, followed by a separator line and gap.
    Title(String),
    /// Image reference plus caption text, laid out as one combined label.
    Image {
        /// Image resource path as written between `[img]` and `[/img]`.
        path: String,
        /// Caption following the closing tag.
        caption: String,
    },
    /// Separator line with fixed vertical padding.
    Gap,
    /// Smaller header without separator.
    Subtitle(String),
    /// Fixed-size frame-sequence placeholder.
    Video(VideoSpec),
    /// Indented text preceded by the margin glyph.
    Bullet(String),
    /// Default flowed paragraph.
    Plain(String),
}

impl Entry {
    /// Short variant name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Title(_) => "title",
            Entry::Image { .. } => "image",
            Entry::Gap => "gap",
            Entry::Subtitle(_) => "subtitle",
            Entry::Video(_) => "video",
            Entry::Bullet(_) => "bullet",
            Entry::Plain(_) => "plain",
        }
    }

    /// Text payload painted as a label, if the variant has one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Entry::Title(text)
            | Entry::Subtitle(text)
            | Entry::Bullet(text)
            | Entry::Plain(text) => Some(text),
            Entry::Image { caption, .. } => Some(caption),
            Entry::Gap | Entry::Video(_) => None,
        }
    }
}

/// Frame-sequence source with its declared placeholder size and playback rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSpec {
    /// Path to the frame sequence.
    pub source: String,
    /// Declared width in host units.
    pub width: u32,
    /// Declared height in host units.
    pub height: u32,
    /// Frames per second, always at least 1.
    pub fps: u32,
}

impl VideoSpec {
    /// Create a spec with explicit dimensions.
    pub fn new(source: impl Into<String>, width: u32, height: u32, fps: u32) -> Self {
        Self {
            source: source.into(),
            width,
            height,
            fps,
        }
    }

    /// Spec with the default 100x100 size at 10 fps.
    pub fn with_defaults(source: impl Into<String>) -> Self {
        Self::new(source, DEFAULT_VIDEO_SIZE, DEFAULT_VIDEO_SIZE, DEFAULT_VIDEO_FPS)
    }
}
