//! Rich listing: measure, then paint inside a scroll session.
//!
//! Per frame the caller runs [`RichListing::pre_render`] (measure) and then
//! [`RichListing::on_gui`] or [`RichListing::on_gui_with_offset`] (paint).
//! Both must be given the same entries and style.

pub mod context;
pub mod layout;
pub mod renderer;
pub mod scroll;

pub use context::LayoutContext;
pub use layout::{entry_extent, layout_entry, measure, EntryLayout};
pub use renderer::{paint_entry, render, ColorScope, SEPARATOR_ALPHA};
pub use scroll::{ScrollSession, ScrollState};

use crate::host::{Measure, ScrollRegion, Surface};
use crate::model::{Entry, HostError, ListingStyle, Rect, ScrollOffset};
use tracing::debug;

/// A scrollable listing of classified entries.
#[derive(Debug, Clone, Default)]
pub struct RichListing {
    style: ListingStyle,
    scroll: ScrollState,
    viewport: Rect,
    content: Rect,
}

impl RichListing {
    /// Listing with the given style and the offset at the top.
    pub fn new(style: ListingStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Style constants.
    pub fn style(&self) -> &ListingStyle {
        &self.style
    }

    /// Replace the style. Takes effect at the next `pre_render`.
    pub fn set_style(&mut self, style: ListingStyle) {
        self.style = style;
    }

    /// Owned scroll state.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Mutable owned scroll state.
    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    /// Viewport from the last `pre_render`.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Content rectangle from the last `pre_render`.
    pub fn content(&self) -> Rect {
        self.content
    }

    /// Measure `entries` for a viewport of `bounds`.
    ///
    /// The content column is the viewport width minus the scrollbar width.
    /// Returns the content height.
    pub fn pre_render<H>(&mut self, bounds: Rect, entries: &[Entry], host: &H) -> f32
    where
        H: Measure + ?Sized,
    {
        let width = (bounds.width - self.style.scrollbar_width).max(0.0);
        let height = measure(entries, width, &self.style, host);
        self.viewport = bounds;
        self.content = Rect::new(0.0, 0.0, width, height);
        debug!(width, height, "listing prepared");
        height
    }

    /// Paint `entries` using the owned scroll offset.
    ///
    /// Returns the total cursor advance.
    ///
    /// # Errors
    ///
    /// Propagates host failures; the scroll region is closed either way.
    pub fn on_gui<H>(&mut self, host: &mut H, entries: &[Entry]) -> Result<f32, HostError>
    where
        H: Surface + ScrollRegion + ?Sized,
    {
        let mut offset = self.scroll.offset();
        let advanced = self.on_gui_with_offset(host, entries, &mut offset)?;
        self.scroll.set_offset(offset);
        Ok(advanced)
    }

    /// Paint `entries` using a caller-supplied offset; the clamped offset is
    /// written back.
    ///
    /// # Errors
    ///
    /// See [`RichListing::on_gui`].
    pub fn on_gui_with_offset<H>(
        &self,
        host: &mut H,
        entries: &[Entry],
        offset: &mut ScrollOffset,
    ) -> Result<f32, HostError>
    where
        H: Surface + ScrollRegion + ?Sized,
    {
        let mut frame = self.start(host, offset)?;
        for entry in entries {
            frame.append(entry)?;
        }
        frame.end()
    }

    /// Open the scroll region and return a frame to append entries to.
    ///
    /// # Errors
    ///
    /// Propagates the host's failure to open the region.
    pub fn start<'l, 'h, H>(
        &'l self,
        host: &'h mut H,
        offset: &mut ScrollOffset,
    ) -> Result<ListingFrame<'l, 'h, H>, HostError>
    where
        H: Surface + ScrollRegion + ?Sized,
    {
        let session = ScrollSession::open(host, self.viewport, self.content, offset)?;
        Ok(ListingFrame {
            session,
            ctx: LayoutContext::new(self.content, &self.style),
            style: &self.style,
            advanced: 0.0,
        })
    }
}

/// A listing frame in progress: an open scroll region plus the cursor.
pub struct ListingFrame<'l, 'h, H: Surface + ScrollRegion + ?Sized> {
    session: ScrollSession<'h, H>,
    ctx: LayoutContext,
    style: &'l ListingStyle,
    advanced: f32,
}

impl<H: Surface + ScrollRegion + ?Sized> ListingFrame<'_, '_, H> {
    /// Paint one entry at the cursor.
    ///
    /// # Errors
    ///
    /// Propagates host failures other than missing resources.
    pub fn append(&mut self, entry: &Entry) -> Result<f32, HostError> {
        let extent = paint_entry(entry, &mut self.ctx, self.style, &mut *self.session)?;
        self.advanced += extent;
        Ok(extent)
    }

    /// Cursor position of the next entry.
    pub fn cursor_y(&self) -> f32 {
        self.ctx.cursor_y
    }

    /// Close the region and return the total advance.
    ///
    /// # Errors
    ///
    /// Propagates the host's failure to close the region.
    pub fn end(self) -> Result<f32, HostError> {
        self.session.close()?;
        Ok(self.advanced)
    }
}
