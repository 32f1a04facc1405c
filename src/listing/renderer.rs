//! Entry painting.
//!
//! Every entry is laid out with [`layout_entry`], painted relative to the
//! cursor, and then the cursor advances by exactly the measured extent. The
//! running total returned by [`render`] is accumulated in the same order as
//! [`super::layout::measure`], so the two agree bit for bit.

use super::context::LayoutContext;
use super::layout::{bullet_width, layout_entry, EntryLayout};
use crate::host::{Canvas, FramePlayer, Surface};
use crate::model::{Color, Entry, HostError, ListingStyle, Rect, VideoSpec};
use std::ops::{Deref, DerefMut};
use tracing::{trace, warn};

/// Opacity applied to the paint color for separator lines.
pub const SEPARATOR_ALPHA: f32 = 0.4;

/// Paint color override that restores the previous color when dropped.
pub struct ColorScope<'c, C: Canvas + ?Sized> {
    canvas: &'c mut C,
    saved: Color,
}

impl<'c, C: Canvas + ?Sized> ColorScope<'c, C> {
    /// Push `color` as the paint color.
    pub fn push(canvas: &'c mut C, color: Color) -> Self {
        let saved = canvas.color();
        canvas.set_color(color);
        Self { canvas, saved }
    }

    /// Push the current color with its alpha scaled by `factor`.
    pub fn faded(canvas: &'c mut C, factor: f32) -> Self {
        let color = canvas.color().faded(factor);
        Self::push(canvas, color)
    }
}

impl<C: Canvas + ?Sized> Deref for ColorScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for ColorScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for ColorScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.set_color(self.saved);
    }
}

/// Paint `entries` top to bottom starting at `view`.
///
/// Returns the total cursor advance, equal to
/// `measure(entries, view.width, style, host)`.
///
/// # Errors
///
/// Propagates any host failure other than a missing resource. Missing images
/// and frame sequences are replaced by placeholders.
pub fn render<H>(entries: &[Entry], view: Rect, style: &ListingStyle, host: &mut H) -> Result<f32, HostError>
where
    H: Surface + ?Sized,
{
    let mut ctx = LayoutContext::new(view, style);
    let mut advanced = 0.0_f32;
    for entry in entries {
        advanced += paint_entry(entry, &mut ctx, style, host)?;
    }
    Ok(advanced)
}

/// Paint one entry at the cursor and advance past it.
///
/// Returns the extent the cursor moved by.
///
/// # Errors
///
/// See [`render`].
pub fn paint_entry<H>(
    entry: &Entry,
    ctx: &mut LayoutContext,
    style: &ListingStyle,
    host: &mut H,
) -> Result<f32, HostError>
where
    H: Surface + ?Sized,
{
    let layout = layout_entry(entry, ctx.width, style, &*host);
    trace!(kind = entry.kind(), y = ctx.cursor_y, extent = layout.extent, "painting entry");

    match entry {
        Entry::Title(text) => {
            ctx.font = style.title_font;
            host.label(ctx.row(layout.row_height), text, ctx.font)?;
            let band_top = ctx.cursor_y + layout.row_height + ctx.spacing;
            paint_separator(ctx, band_top, host)?;
        }
        Entry::Image { caption, .. } => {
            ctx.font = style.item_font;
            paint_image(ctx, &layout, caption, host)?;
        }
        Entry::Gap => {
            paint_separator(ctx, ctx.cursor_y, host)?;
        }
        Entry::Subtitle(text) | Entry::Plain(text) => {
            ctx.font = style.item_font;
            host.label(ctx.row(layout.row_height), text, ctx.font)?;
        }
        Entry::Video(spec) => {
            paint_video(ctx, spec, host)?;
        }
        Entry::Bullet(text) => {
            ctx.font = style.item_font;
            let margin = style.margin_width;
            let glyph = Rect::new(ctx.x, ctx.cursor_y, margin, layout.row_height);
            host.label(glyph, &style.margin_text, ctx.font)?;
            let column = ctx.indented(margin);
            debug_assert_eq!(column.width, bullet_width(ctx.width, style));
            host.label(column.row(layout.row_height), text, ctx.font)?;
        }
    }

    ctx.advance(layout.extent);
    Ok(layout.extent)
}

/// Separator line centered in the gap band starting at `band_top`.
fn paint_separator<H>(ctx: &LayoutContext, band_top: f32, host: &mut H) -> Result<(), HostError>
where
    H: Surface + ?Sized,
{
    let y = band_top + ctx.gap_height * 0.5;
    let mut faded = ColorScope::faded(host, SEPARATOR_ALPHA);
    faded.horizontal_line(ctx.x, y, ctx.width)
}

fn paint_image<H>(
    ctx: &LayoutContext,
    layout: &EntryLayout,
    caption: &str,
    host: &mut H,
) -> Result<(), HostError>
where
    H: Surface + ?Sized,
{
    if let Some(miss) = &layout.missing {
        warn!(path = %miss.path, "image not found, painting placeholder");
    }
    match &layout.image {
        Some(image) => host.image_label(ctx.row(layout.row_height), image, caption, ctx.font),
        None => host.label(ctx.row(layout.row_height), caption, ctx.font),
    }
}

/// Frame sequence centered in the column at its declared size.
fn paint_video<H>(ctx: &LayoutContext, spec: &VideoSpec, host: &mut H) -> Result<(), HostError>
where
    H: Surface + ?Sized,
{
    let width = spec.width as f32;
    let height = spec.height as f32;
    let rect = Rect::new(ctx.x + (ctx.width - width) / 2.0, ctx.cursor_y, width, height);

    match host.play_frames(&spec.source, spec.fps, rect) {
        Ok(()) => Ok(()),
        Err(HostError::ResourceMissing(miss)) => {
            warn!(source = %miss.path, "frame sequence not found, painting placeholder");
            host.placeholder(rect, &format!("missing: {}", spec.source))
        }
        Err(other) => Err(other),
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
