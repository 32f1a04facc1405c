//! Terminal host: paints listing calls into a ratatui buffer.

use super::constants::{ICON_WIDTH, IMAGE_GLYPH, LINE_GLYPH, MISSING_IMAGE_GLYPH};
use super::metrics::{cells, TerminalMetrics};
use super::resources::{FrameLibrary, ImageCatalog};
use super::rich_text::{StyledChar, StyledLine};
use super::styles::ListingPalette;
use crate::host::{Canvas, FramePlayer, ImageHandle, ImageLookup, ScrollRegion, TextMetrics};
use crate::model::{Color, FontKind, HostError, Rect, ScrollOffset};
use crate::parser::EmphasisTags;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellArea;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget};
use std::path::Path;
use tracing::trace;

/// Metrics and resources for the terminal. Everything the measure pass needs.
#[derive(Debug)]
pub struct TerminalHost {
    metrics: TerminalMetrics,
    images: ImageCatalog,
    frames: FrameLibrary,
    palette: ListingPalette,
}

impl TerminalHost {
    /// Host resolving resources against `base_dir`.
    pub fn new(base_dir: &Path, tags: EmphasisTags, palette: ListingPalette) -> Self {
        Self {
            metrics: TerminalMetrics::new(tags),
            images: ImageCatalog::new(base_dir),
            frames: FrameLibrary::new(base_dir),
            palette,
        }
    }

    /// Text metrics.
    pub fn metrics(&self) -> &TerminalMetrics {
        &self.metrics
    }

    /// Frame sequences, for advancing the playback clock.
    pub fn frames_mut(&mut self) -> &mut FrameLibrary {
        &mut self.frames
    }

    /// Style palette.
    pub fn palette(&self) -> ListingPalette {
        self.palette
    }
}

impl TextMetrics for TerminalHost {
    fn text_height(&self, text: &str, wrap_width: f32, font: FontKind) -> f32 {
        self.metrics.text_height(text, wrap_width, font)
    }

    fn text_width(&self, text: &str, font: FontKind) -> f32 {
        self.metrics.text_width(text, font)
    }

    fn content_height(
        &self,
        image: &ImageHandle,
        text: &str,
        wrap_width: f32,
        font: FontKind,
    ) -> f32 {
        self.metrics.content_height(image, text, wrap_width, font)
    }
}

impl ImageLookup for TerminalHost {
    fn find(&self, path: &str) -> Option<ImageHandle> {
        self.images.find(path)
    }
}

/// Half-open cell rectangle that may extend past the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Clip {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Clip {
    fn from_area(area: CellArea) -> Self {
        Self {
            left: i32::from(area.x),
            top: i32::from(area.y),
            right: i32::from(area.x) + i32::from(area.width),
            bottom: i32::from(area.y) + i32::from(area.height),
        }
    }

    fn intersect(self, other: Clip) -> Self {
        Self {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right).max(self.left.max(other.left)),
            bottom: self.bottom.min(other.bottom).max(self.top.max(other.top)),
        }
    }

    fn contains_span(&self, col: i32, row: i32, width: i32) -> bool {
        row >= self.top && row < self.bottom && col >= self.left && col + width <= self.right
    }

    fn to_area(self) -> CellArea {
        let clamp = |v: i32| u16::try_from(v.max(0)).unwrap_or(u16::MAX);
        let left = clamp(self.left);
        let top = clamp(self.top);
        CellArea::new(
            left,
            top,
            clamp(self.right).saturating_sub(left),
            clamp(self.bottom).saturating_sub(top),
        )
    }
}

/// An open scroll region: where content `(0, 0)` lands on screen and what
/// may be painted.
#[derive(Debug, Clone, Copy)]
struct Region {
    clip: Clip,
    origin_x: f32,
    origin_y: f32,
}

/// Painting surface over one frame's buffer.
pub struct TerminalSurface<'a> {
    host: &'a mut TerminalHost,
    buffer: &'a mut Buffer,
    color: Color,
    base: Region,
    regions: Vec<Region>,
}

impl<'a> TerminalSurface<'a> {
    /// Surface painting into `area` of `buffer`.
    pub fn new(host: &'a mut TerminalHost, buffer: &'a mut Buffer, area: CellArea) -> Self {
        let clip = Clip::from_area(area).intersect(Clip::from_area(buffer.area));
        Self {
            host,
            buffer,
            color: Color::WHITE,
            base: Region {
                clip,
                origin_x: f32::from(area.x),
                origin_y: f32::from(area.y),
            },
            regions: Vec::new(),
        }
    }

    /// Number of scroll regions currently open.
    pub fn open_regions(&self) -> usize {
        self.regions.len()
    }

    fn current(&self) -> Region {
        self.regions.last().copied().unwrap_or(self.base)
    }

    fn to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        let region = self.current();
        (
            (region.origin_x + x).floor() as i32,
            (region.origin_y + y).floor() as i32,
        )
    }

    fn put(&mut self, col: i32, row: i32, symbol: StyledChar, style: Style) {
        let width = symbol.width() as i32;
        if width == 0 || !self.current().clip.contains_span(col, row, width) {
            return;
        }
        let (Ok(x), Ok(y)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        let style = if symbol.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        };
        if let Some(cell) = self.buffer.cell_mut((x, y)) {
            cell.set_char(symbol.ch).set_style(style);
        }
        for trailing in 1..width {
            if let Some(cell) = self.buffer.cell_mut((x.saturating_add(trailing as u16), y)) {
                cell.reset();
            }
        }
    }

    fn put_line(&mut self, col: i32, row: i32, line: &[StyledChar], style: Style, max_cols: usize) {
        let mut used = 0usize;
        for symbol in line {
            let width = symbol.width();
            if used + width > max_cols {
                break;
            }
            self.put(col + used as i32, row, *symbol, style);
            used += width;
        }
    }

    fn put_lines(&mut self, col: i32, row: i32, lines: &[StyledLine], style: Style, max_cols: usize) {
        for (index, line) in lines.iter().enumerate() {
            self.put_line(col, row + index as i32, line, style, max_cols);
        }
    }

    fn put_str(&mut self, col: i32, row: i32, text: &str, style: Style, max_cols: usize) {
        let line: Vec<StyledChar> = text
            .chars()
            .map(|ch| StyledChar { ch, bold: false })
            .collect();
        self.put_line(col, row, &line, style, max_cols);
    }

    fn draw_scrollbar(&mut self, viewport: Clip, content: Rect, viewport_rect: Rect, offset: ScrollOffset) {
        let bar_cols = cells(viewport_rect.width - content.width);
        if bar_cols == 0 || content.height <= viewport_rect.height {
            return;
        }
        let bar = Clip {
            left: viewport.right - bar_cols as i32,
            ..viewport
        }
        .intersect(viewport)
        .intersect(Clip::from_area(self.buffer.area))
        .to_area();
        if bar.width == 0 || bar.height == 0 {
            return;
        }

        let range = (content.height - viewport_rect.height).max(0.0);
        let mut state = ScrollbarState::new(range.ceil() as usize + 1)
            .position(offset.y.max(0.0).round() as usize)
            .viewport_content_length(cells(viewport_rect.height));
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .render(bar, &mut *self.buffer, &mut state);
    }
}

impl TextMetrics for TerminalSurface<'_> {
    fn text_height(&self, text: &str, wrap_width: f32, font: FontKind) -> f32 {
        self.host.text_height(text, wrap_width, font)
    }

    fn text_width(&self, text: &str, font: FontKind) -> f32 {
        self.host.text_width(text, font)
    }

    fn content_height(
        &self,
        image: &ImageHandle,
        text: &str,
        wrap_width: f32,
        font: FontKind,
    ) -> f32 {
        self.host.content_height(image, text, wrap_width, font)
    }
}

impl ImageLookup for TerminalSurface<'_> {
    fn find(&self, path: &str) -> Option<ImageHandle> {
        self.host.find(path)
    }
}

impl Canvas for TerminalSurface<'_> {
    fn label(&mut self, rect: Rect, text: &str, font: FontKind) -> Result<(), HostError> {
        let lines = self.host.metrics().wrap(text, rect.width);
        let (col, row) = self.to_cell(rect.x, rect.y);
        let style = self.host.palette().text(font, self.color);
        self.put_lines(col, row, &lines, style, cells(rect.width));
        Ok(())
    }

    fn image_label(
        &mut self,
        rect: Rect,
        image: &ImageHandle,
        text: &str,
        font: FontKind,
    ) -> Result<(), HostError> {
        let (col, row) = self.to_cell(rect.x, rect.y);
        let palette = self.host.palette();
        let (glyph, icon_style) = if image.is_placeholder() {
            (MISSING_IMAGE_GLYPH, palette.placeholder())
        } else {
            (IMAGE_GLYPH, palette.paint(self.color))
        };
        if cells(rect.width) > 0 {
            self.put(col, row, StyledChar { ch: glyph, bold: false }, icon_style);
        }

        let caption_width = rect.width - ICON_WIDTH;
        let lines = self.host.metrics().wrap(text, caption_width);
        let style = palette.text(font, self.color);
        self.put_lines(col + ICON_WIDTH as i32, row, &lines, style, cells(caption_width));
        Ok(())
    }

    fn horizontal_line(&mut self, x: f32, y: f32, width: f32) -> Result<(), HostError> {
        let (col, row) = self.to_cell(x, y);
        let style = self.host.palette().paint(self.color);
        for step in 0..cells(width) {
            self.put_str(col + step as i32, row, LINE_GLYPH, style, 1);
        }
        Ok(())
    }

    fn placeholder(&mut self, rect: Rect, label: &str) -> Result<(), HostError> {
        let (left, top) = self.to_cell(rect.x, rect.y);
        let width = cells(rect.width) as i32;
        let height = cells(rect.height) as i32;
        if width == 0 || height == 0 {
            return Ok(());
        }
        let style = self.host.palette().placeholder();
        let right = left + width - 1;
        let bottom = top + height - 1;

        for col in left..=right {
            let (top_glyph, bottom_glyph) = if col == left {
                ("┌", "└")
            } else if col == right {
                ("┐", "┘")
            } else {
                ("─", "─")
            };
            self.put_str(col, top, top_glyph, style, 1);
            if bottom > top {
                self.put_str(col, bottom, bottom_glyph, style, 1);
            }
        }
        for row in top + 1..bottom {
            self.put_str(left, row, "│", style, 1);
            if right > left {
                self.put_str(right, row, "│", style, 1);
            }
        }

        if height > 2 && width > 2 {
            let inner = (width - 2) as usize;
            self.put_str(left + 1, top + 1, label, style, inner);
        }
        Ok(())
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl FramePlayer for TerminalSurface<'_> {
    fn play_frames(&mut self, source: &str, fps: u32, rect: Rect) -> Result<(), HostError> {
        let frame = self.host.frames_mut().frame_at(source, fps)?.clone();
        let (col, row) = self.to_cell(rect.x, rect.y);
        let style = self.host.palette().paint(self.color);
        let max_cols = cells(rect.width);
        for (index, text) in frame.iter().take(cells(rect.height)).enumerate() {
            self.put_str(col, row + index as i32, text, style, max_cols);
        }
        Ok(())
    }
}

impl ScrollRegion for TerminalSurface<'_> {
    fn begin_scroll(
        &mut self,
        viewport: Rect,
        offset: &mut ScrollOffset,
        content: Rect,
    ) -> Result<(), HostError> {
        *offset = offset.clamped(viewport, content);
        let parent = self.current();

        let left = (parent.origin_x + viewport.x).floor() as i32;
        let top = (parent.origin_y + viewport.y).floor() as i32;
        let clip = Clip {
            left,
            top,
            right: left + cells(viewport.width) as i32,
            bottom: top + cells(viewport.height) as i32,
        }
        .intersect(parent.clip);

        self.draw_scrollbar(clip, content, viewport, *offset);

        let bar_cols = cells(viewport.width - content.width) as i32;
        let content_clip = Clip {
            right: (clip.right - bar_cols).max(clip.left),
            ..clip
        };
        trace!(?offset, depth = self.regions.len() + 1, "scroll region opened");
        self.regions.push(Region {
            clip: content_clip,
            origin_x: left as f32 - offset.x,
            origin_y: top as f32 - offset.y,
        });
        Ok(())
    }

    fn end_scroll(&mut self) -> Result<(), HostError> {
        self.regions
            .pop()
            .map(|_| ())
            .ok_or_else(|| HostError::Backend("end_scroll without an open region".to_string()))
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
