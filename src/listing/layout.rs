//! Entry measurement.
//!
//! [`layout_entry`] is THE per-variant height rule. The measure pass sums its
//! extents; the render pass advances its cursor by the very same extents, so
//! the scroll region is always sized to exactly what gets painted.

use crate::host::{ImageHandle, ImageLookup, Measure, TextMetrics};
use crate::model::{Entry, ListingStyle, ResourceMissingError};
use tracing::{debug, trace};

/// Layout of a single entry at a given column width.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryLayout {
    /// Total vertical advance of the entry, never negative.
    pub extent: f32,
    /// Height of the painted row: text or icon+caption height, the declared
    /// height for video, zero for a gap.
    pub row_height: f32,
    /// Resolved image for image entries (a placeholder when missing).
    pub image: Option<ImageHandle>,
    /// Set when the image lookup missed.
    pub missing: Option<ResourceMissingError>,
}

impl EntryLayout {
    fn rows(row_height: f32, extent: f32) -> Self {
        Self {
            extent: extent.max(0.0),
            row_height,
            image: None,
            missing: None,
        }
    }
}

/// Width of the text column of a bullet item.
pub fn bullet_width(width: f32, style: &ListingStyle) -> f32 {
    (width - style.margin_width).max(0.0)
}

/// Resolve an image, reporting a miss instead of failing.
pub fn resolve_image<L>(lookup: &L, path: &str) -> Result<ImageHandle, ResourceMissingError>
where
    L: ImageLookup + ?Sized,
{
    lookup
        .find(path)
        .ok_or_else(|| ResourceMissingError::image(path))
}

/// Lay out one entry at column `width`.
///
/// | Variant  | Extent                                              |
/// |----------|-----------------------------------------------------|
/// | Title    | text height (title font) + spacing + gap height     |
/// | Image    | combined icon + caption height (item font)          |
/// | Gap      | gap height                                          |
/// | Subtitle | text height (item font) + spacing                   |
/// | Video    | declared height                                     |
/// | Bullet   | text height at `width - margin_width` + spacing     |
/// | Plain    | text height (item font) + spacing                   |
pub fn layout_entry<H>(entry: &Entry, width: f32, style: &ListingStyle, host: &H) -> EntryLayout
where
    H: Measure + ?Sized,
{
    match entry {
        Entry::Title(text) => {
            let row = host.text_height(text, width, style.title_font);
            EntryLayout::rows(row, row + style.spacing + style.gap_height)
        }
        Entry::Image { path, caption } => {
            let (image, missing) = match resolve_image(host, path) {
                Ok(image) => (image, None),
                Err(miss) => (ImageHandle::placeholder(path.as_str()), Some(miss)),
            };
            let row = host.content_height(&image, caption, width, style.item_font);
            EntryLayout {
                extent: row.max(0.0),
                row_height: row,
                image: Some(image),
                missing,
            }
        }
        Entry::Gap => EntryLayout::rows(0.0, style.gap_height),
        Entry::Subtitle(text) | Entry::Plain(text) => {
            let row = host.text_height(text, width, style.item_font);
            EntryLayout::rows(row, row + style.spacing)
        }
        Entry::Video(spec) => {
            let declared = spec.height as f32;
            EntryLayout::rows(declared, declared)
        }
        Entry::Bullet(text) => {
            let row = host.text_height(text, bullet_width(width, style), style.item_font);
            EntryLayout::rows(row, row + style.spacing)
        }
    }
}

/// Height contribution of one entry.
pub fn entry_extent<H>(entry: &Entry, width: f32, style: &ListingStyle, host: &H) -> f32
where
    H: Measure + ?Sized,
{
    layout_entry(entry, width, style, host).extent
}

/// Total content height of `entries` at column `width`.
///
/// Deterministic, never negative, and non-decreasing as entries are appended.
pub fn measure<H>(entries: &[Entry], width: f32, style: &ListingStyle, host: &H) -> f32
where
    H: Measure + ?Sized,
{
    let mut height = 0.0_f32;
    for entry in entries {
        let extent = entry_extent(entry, width, style, host);
        trace!(kind = entry.kind(), extent, "measured entry");
        height += extent;
    }
    debug!(entries = entries.len(), width, height, "measured listing");
    height
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
