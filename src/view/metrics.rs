//! Cell-based text metrics.

use super::constants::ICON_WIDTH;
use super::rich_text::{self, StyledLine};
use crate::host::{ImageHandle, TextMetrics};
use crate::model::FontKind;
use crate::parser::EmphasisTags;

/// Text metrics for a character grid: one row per wrapped line, every font.
#[derive(Debug, Clone, Default)]
pub struct TerminalMetrics {
    tags: EmphasisTags,
}

impl TerminalMetrics {
    /// Metrics that strip the given bold tags before measuring.
    pub fn new(tags: EmphasisTags) -> Self {
        Self { tags }
    }

    /// Bold tags recognized in label text.
    pub fn tags(&self) -> &EmphasisTags {
        &self.tags
    }

    /// Wrap `text` at `wrap_width` cells.
    pub fn wrap(&self, text: &str, wrap_width: f32) -> Vec<StyledLine> {
        let chars = rich_text::parse(text, &self.tags);
        rich_text::wrap(&chars, cells(wrap_width))
    }
}

/// Whole cells available in `width`.
pub(crate) fn cells(width: f32) -> usize {
    if width.is_finite() && width > 0.0 {
        width.floor() as usize
    } else {
        0
    }
}

impl TextMetrics for TerminalMetrics {
    fn text_height(&self, text: &str, wrap_width: f32, _font: FontKind) -> f32 {
        self.wrap(text, wrap_width).len() as f32
    }

    fn text_width(&self, text: &str, _font: FontKind) -> f32 {
        rich_text::width(&rich_text::parse(text, &self.tags)) as f32
    }

    fn content_height(
        &self,
        _image: &ImageHandle,
        text: &str,
        wrap_width: f32,
        font: FontKind,
    ) -> f32 {
        self.text_height(text, wrap_width - ICON_WIDTH, font).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_wrapped_row_count() {
        let metrics = TerminalMetrics::default();
        assert_eq!(metrics.text_height("one two three", 7.0, FontKind::Small), 2.0);
        assert_eq!(metrics.text_height("", 7.0, FontKind::Medium), 1.0);
    }

    #[test]
    fn width_ignores_bold_tags() {
        let metrics = TerminalMetrics::default();
        assert_eq!(metrics.text_width("<b>ab</b>c", FontKind::Small), 3.0);
    }

    #[test]
    fn fractional_width_rounds_down() {
        let metrics = TerminalMetrics::default();
        assert_eq!(metrics.text_height("abcd", 3.9, FontKind::Small), 2.0);
    }

    #[test]
    fn caption_wraps_beside_icon() {
        let metrics = TerminalMetrics::default();
        let image = ImageHandle::new("icons/a");
        assert_eq!(metrics.content_height(&image, "abcdef", 6.0 + ICON_WIDTH, FontKind::Small), 1.0);
        assert_eq!(metrics.content_height(&image, "abcdefg", 6.0 + ICON_WIDTH, FontKind::Small), 2.0);
    }

    #[test]
    fn nan_width_wraps_per_character() {
        assert_eq!(cells(f32::NAN), 0);
        assert_eq!(cells(-3.0), 0);
    }
}
