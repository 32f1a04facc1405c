//! Layout state threaded through a single measure or render pass.

use crate::model::{FontKind, ListingStyle, Rect};

/// Running layout state for one pass over the entries.
///
/// Created fresh for every pass; nothing survives between passes or frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    /// Left edge of the text column.
    pub x: f32,
    /// Usable width of the text column.
    pub width: f32,
    /// Viewport height the pass was started with.
    pub height: f32,
    /// Top of the next entry.
    pub cursor_y: f32,
    /// Font of the entry being laid out.
    pub font: FontKind,
    /// Gap after each text row.
    pub spacing: f32,
    /// Height of a separator band.
    pub gap_height: f32,
}

impl LayoutContext {
    /// Start a pass at the top of `view`.
    pub fn new(view: Rect, style: &ListingStyle) -> Self {
        Self {
            x: view.x,
            width: view.width,
            height: view.height,
            cursor_y: view.y,
            font: style.item_font,
            spacing: style.spacing,
            gap_height: style.gap_height,
        }
    }

    /// Move the cursor down by `dy`.
    pub fn advance(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    /// Row of `height` at the cursor spanning the column width.
    pub fn row(&self, height: f32) -> Rect {
        Rect::new(self.x, self.cursor_y, self.width, height)
    }

    /// Column shifted right by `margin` and narrowed to match.
    ///
    /// The cursor is shared by value; callers advance the outer context.
    pub fn indented(&self, margin: f32) -> Self {
        Self {
            x: self.x + margin,
            width: (self.width - margin).max(0.0),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_view_top_with_item_font() {
        let style = ListingStyle::default();
        let ctx = LayoutContext::new(Rect::new(4.0, 10.0, 200.0, 50.0), &style);
        assert_eq!(ctx.cursor_y, 10.0);
        assert_eq!(ctx.x, 4.0);
        assert_eq!(ctx.width, 200.0);
        assert_eq!(ctx.font, FontKind::Small);
        assert_eq!(ctx.gap_height, 12.0);
    }

    #[test]
    fn indented_narrows_without_touching_original() {
        let style = ListingStyle::default();
        let ctx = LayoutContext::new(Rect::new(0.0, 0.0, 100.0, 50.0), &style);
        let inner = ctx.indented(21.0);
        assert_eq!(inner.x, 21.0);
        assert_eq!(inner.width, 79.0);
        assert_eq!(ctx.width, 100.0);
    }

    #[test]
    fn indented_never_goes_negative() {
        let style = ListingStyle::default();
        let ctx = LayoutContext::new(Rect::new(0.0, 0.0, 10.0, 50.0), &style);
        assert_eq!(ctx.indented(30.0).width, 0.0);
    }
}
