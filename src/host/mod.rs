//! Host capabilities the listing is drawn through.
//!
//! The measure and render passes never talk to a concrete backend. They are
//! generic over these traits; `crate::view` implements them for a ratatui
//! buffer, and tests implement them with a recording fake.
//!
//! All calls are synchronous. A host whose native API is asynchronous must
//! block inside these methods so that a frame is measured and painted in one
//! uninterrupted pass.

use crate::model::{Color, FontKind, HostError, Rect, ScrollOffset};

/// Opaque image resource returned by [`ImageLookup::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    path: String,
    placeholder: bool,
}

impl ImageHandle {
    /// Handle for a resolved image.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            placeholder: false,
        }
    }

    /// Stand-in for an image that could not be found.
    pub fn placeholder(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            placeholder: true,
        }
    }

    /// Path the handle was resolved from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this is a missing-image stand-in.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

/// Font-aware layout measurement.
pub trait TextMetrics {
    /// Height of `text` wrapped at `wrap_width` in `font`.
    fn text_height(&self, text: &str, wrap_width: f32, font: FontKind) -> f32;

    /// Unwrapped width of `text` in `font`.
    fn text_width(&self, text: &str, font: FontKind) -> f32;

    /// Height of an icon-plus-caption label wrapped at `wrap_width`.
    fn content_height(&self, image: &ImageHandle, text: &str, wrap_width: f32, font: FontKind)
        -> f32;
}

/// Image resource lookup.
pub trait ImageLookup {
    /// Resolve `path`, or `None` when the image does not exist.
    fn find(&self, path: &str) -> Option<ImageHandle>;
}

/// Painting primitives and the current paint color.
pub trait Canvas {
    /// Paint a (possibly wrapped) text label inside `rect`.
    fn label(&mut self, rect: Rect, text: &str, font: FontKind) -> Result<(), HostError>;

    /// Paint an icon followed by a caption inside `rect`.
    fn image_label(
        &mut self,
        rect: Rect,
        image: &ImageHandle,
        text: &str,
        font: FontKind,
    ) -> Result<(), HostError>;

    /// Paint a horizontal line of `width` starting at `(x, y)`.
    fn horizontal_line(&mut self, x: f32, y: f32, width: f32) -> Result<(), HostError>;

    /// Paint a placeholder box for content that could not be loaded.
    fn placeholder(&mut self, rect: Rect, label: &str) -> Result<(), HostError>;

    /// Current paint color.
    fn color(&self) -> Color;

    /// Replace the current paint color.
    fn set_color(&mut self, color: Color);
}

/// Frame-sequence playback. Decoding and player lifecycle belong to the host.
pub trait FramePlayer {
    /// Paint the current frame of `source` at `fps` into `rect`.
    ///
    /// Returns [`HostError::ResourceMissing`] when the source does not exist.
    fn play_frames(&mut self, source: &str, fps: u32, rect: Rect) -> Result<(), HostError>;
}

/// Clipped, scrollable drawing regions.
pub trait ScrollRegion {
    /// Open a region showing `content` through `viewport` at `offset`.
    ///
    /// The host may clamp `offset`; the clamped value is written back.
    /// Paints until the matching [`ScrollRegion::end_scroll`] are in content
    /// coordinates and clipped to `viewport`.
    fn begin_scroll(
        &mut self,
        viewport: Rect,
        offset: &mut ScrollOffset,
        content: Rect,
    ) -> Result<(), HostError>;

    /// Close the innermost region and restore the previous clip.
    fn end_scroll(&mut self) -> Result<(), HostError>;
}

/// Everything the measure pass needs.
pub trait Measure: TextMetrics + ImageLookup {}

impl<T: TextMetrics + ImageLookup + ?Sized> Measure for T {}

/// Everything the render pass needs.
pub trait Surface: TextMetrics + ImageLookup + Canvas + FramePlayer {}

impl<T: TextMetrics + ImageLookup + Canvas + FramePlayer + ?Sized> Surface for T {}
