//! Recording host for unit tests.
//!
//! Implements every host capability with deterministic metrics and records
//! each paint call, so tests can assert on what was painted where.

use crate::host::{Canvas, FramePlayer, ImageHandle, ImageLookup, ScrollRegion, TextMetrics};
use crate::model::{Color, FontKind, HostError, Rect, ResourceMissingError, ScrollOffset};
use std::collections::HashSet;

/// Width reserved for the icon in an image label.
pub const ICON_WIDTH: f32 = 24.0;
/// Height of a resolved icon.
pub const ICON_HEIGHT: f32 = 24.0;
/// Height of a placeholder icon.
pub const PLACEHOLDER_ICON_HEIGHT: f32 = 16.0;

/// One recorded host call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// `Canvas::label`
    Label {
        rect: Rect,
        text: String,
        font: FontKind,
        color: Color,
    },
    /// `Canvas::image_label`
    ImageLabel {
        rect: Rect,
        image: ImageHandle,
        text: String,
    },
    /// `Canvas::horizontal_line`
    Line {
        x: f32,
        y: f32,
        width: f32,
        color: Color,
    },
    /// `Canvas::placeholder`
    Placeholder { rect: Rect, label: String },
    /// `FramePlayer::play_frames`
    Frames { source: String, fps: u32, rect: Rect },
    /// `ScrollRegion::begin_scroll`
    BeginScroll {
        viewport: Rect,
        offset: ScrollOffset,
        content: Rect,
    },
    /// `ScrollRegion::end_scroll`
    EndScroll,
}

/// Deterministic host that records paint calls.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub ops: Vec<PaintOp>,
    pub color: Color,
    pub images: HashSet<String>,
    pub frames: HashSet<String>,
    pub fail_labels: bool,
    pub open_regions: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, path: &str) -> Self {
        self.images.insert(path.to_string());
        self
    }

    pub fn with_frames(mut self, source: &str) -> Self {
        self.frames.insert(source.to_string());
        self
    }

    pub fn line_height(font: FontKind) -> f32 {
        match font {
            FontKind::Tiny => 10.0,
            FontKind::Small => 14.0,
            FontKind::Medium => 20.0,
        }
    }

    pub fn char_width(font: FontKind) -> f32 {
        match font {
            FontKind::Tiny => 5.0,
            FontKind::Small => 7.0,
            FontKind::Medium => 10.0,
        }
    }

    pub fn labels(&self) -> Vec<(Rect, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Label { rect, text, .. } => Some((*rect, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(f32, f32, f32, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Line { x, y, width, color } => Some((*x, *y, *width, *color)),
                _ => None,
            })
            .collect()
    }
}

impl TextMetrics for RecordingHost {
    fn text_height(&self, text: &str, wrap_width: f32, font: FontKind) -> f32 {
        let chars = text.chars().count().max(1) as f32;
        let per_line = (wrap_width / Self::char_width(font)).floor().max(1.0);
        (chars / per_line).ceil() * Self::line_height(font)
    }

    fn text_width(&self, text: &str, font: FontKind) -> f32 {
        text.chars().count() as f32 * Self::char_width(font)
    }

    fn content_height(
        &self,
        image: &ImageHandle,
        text: &str,
        wrap_width: f32,
        font: FontKind,
    ) -> f32 {
        let icon = if image.is_placeholder() {
            PLACEHOLDER_ICON_HEIGHT
        } else {
            ICON_HEIGHT
        };
        icon.max(self.text_height(text, wrap_width - ICON_WIDTH, font))
    }
}

impl ImageLookup for RecordingHost {
    fn find(&self, path: &str) -> Option<ImageHandle> {
        self.images.contains(path).then(|| ImageHandle::new(path))
    }
}

impl Canvas for RecordingHost {
    fn label(&mut self, rect: Rect, text: &str, font: FontKind) -> Result<(), HostError> {
        if self.fail_labels {
            return Err(HostError::Backend("label failed".to_string()));
        }
        self.ops.push(PaintOp::Label {
            rect,
            text: text.to_string(),
            font,
            color: self.color,
        });
        Ok(())
    }

    fn image_label(
        &mut self,
        rect: Rect,
        image: &ImageHandle,
        text: &str,
        _font: FontKind,
    ) -> Result<(), HostError> {
        self.ops.push(PaintOp::ImageLabel {
            rect,
            image: image.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn horizontal_line(&mut self, x: f32, y: f32, width: f32) -> Result<(), HostError> {
        self.ops.push(PaintOp::Line {
            x,
            y,
            width,
            color: self.color,
        });
        Ok(())
    }

    fn placeholder(&mut self, rect: Rect, label: &str) -> Result<(), HostError> {
        self.ops.push(PaintOp::Placeholder {
            rect,
            label: label.to_string(),
        });
        Ok(())
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl FramePlayer for RecordingHost {
    fn play_frames(&mut self, source: &str, fps: u32, rect: Rect) -> Result<(), HostError> {
        if !self.frames.contains(source) {
            return Err(ResourceMissingError::frames(source).into());
        }
        self.ops.push(PaintOp::Frames {
            source: source.to_string(),
            fps,
            rect,
        });
        Ok(())
    }
}

impl ScrollRegion for RecordingHost {
    fn begin_scroll(
        &mut self,
        viewport: Rect,
        offset: &mut ScrollOffset,
        content: Rect,
    ) -> Result<(), HostError> {
        *offset = offset.clamped(viewport, content);
        self.ops.push(PaintOp::BeginScroll {
            viewport,
            offset: *offset,
            content,
        });
        self.open_regions += 1;
        Ok(())
    }

    fn end_scroll(&mut self) -> Result<(), HostError> {
        self.ops.push(PaintOp::EndScroll);
        self.open_regions = self.open_regions.saturating_sub(1);
        Ok(())
    }
}
