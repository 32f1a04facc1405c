//! Listing style constants.

use crate::host::TextMetrics;
use serde::Deserialize;

/// Host font size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontKind {
    /// Smallest font.
    Tiny,
    /// Body text.
    Small,
    /// Header text.
    Medium,
}

/// Style constants for a listing.
///
/// Configured once at construction. Reassigning `margin_text` must go through
/// [`ListingStyle::with_margin_text`] so that `margin_width` stays in sync.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingStyle {
    /// Gap added after every text row.
    pub spacing: f32,
    /// Height of a separator band.
    pub gap_height: f32,
    /// Glyph painted in front of bullet items.
    pub margin_text: String,
    /// Measured width of `margin_text` in the item font.
    pub margin_width: f32,
    /// Width reserved for the vertical scrollbar inside the viewport.
    pub scrollbar_width: f32,
    /// Font for titles.
    pub title_font: FontKind,
    /// Font for all other text.
    pub item_font: FontKind,
}

/// Default margin glyph.
pub const DEFAULT_MARGIN_TEXT: &str = " - ";

impl Default for ListingStyle {
    /// Pixel-host defaults. `margin_width` is an estimate until re-measured
    /// with [`ListingStyle::with_margin_text`].
    fn default() -> Self {
        Self {
            spacing: 2.0,
            gap_height: 12.0,
            margin_text: DEFAULT_MARGIN_TEXT.to_string(),
            margin_width: 12.0,
            scrollbar_width: 16.0,
            title_font: FontKind::Medium,
            item_font: FontKind::Small,
        }
    }
}

impl ListingStyle {
    /// Replace the margin glyph and re-measure its width in the item font.
    pub fn with_margin_text<M>(mut self, text: impl Into<String>, metrics: &M) -> Self
    where
        M: TextMetrics + ?Sized,
    {
        self.margin_text = text.into();
        self.margin_width = metrics.text_width(&self.margin_text, self.item_font);
        self
    }

    /// Re-measure the current margin glyph.
    pub fn measured<M>(self, metrics: &M) -> Self
    where
        M: TextMetrics + ?Sized,
    {
        let text = self.margin_text.clone();
        self.with_margin_text(text, metrics)
    }
}
