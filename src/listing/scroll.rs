//! Scroll session: a clipped, scrollable region that closes itself.
//!
//! [`ScrollSession`] is a scoped handle. Dropping it (early return, `?`,
//! panic unwinding) closes the host region, so the previous clip is always
//! restored. [`ScrollSession::close`] does the same but reports the error.

use crate::host::ScrollRegion;
use crate::model::{HostError, Rect, ScrollOffset};
use std::ops::{Deref, DerefMut};
use tracing::warn;

/// Scroll offset owned across frames by one listing instance.
///
/// Never reset automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    offset: ScrollOffset,
}

impl ScrollState {
    /// Start at the given offset.
    pub fn new(offset: ScrollOffset) -> Self {
        Self { offset }
    }

    /// Current offset.
    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Mutable access for hosts that adjust the offset in place.
    pub fn offset_mut(&mut self) -> &mut ScrollOffset {
        &mut self.offset
    }

    /// Replace the offset.
    pub fn set_offset(&mut self, offset: ScrollOffset) {
        self.offset = offset;
    }

    /// Move vertically by `dy`, clamped to the scrollable range of
    /// `content` seen through `viewport`.
    pub fn scroll_by(&mut self, dy: f32, viewport: Rect, content: Rect) {
        self.offset.y += dy;
        self.offset = self.offset.clamped(viewport, content);
    }

    /// Jump to the top.
    pub fn scroll_to_top(&mut self) {
        self.offset.y = 0.0;
    }

    /// Jump to the last full viewport of content.
    pub fn scroll_to_bottom(&mut self, viewport: Rect, content: Rect) {
        self.offset.y = (content.height - viewport.height).max(0.0);
    }

    /// Open a session using the owned offset.
    ///
    /// # Errors
    ///
    /// Propagates the host's failure to open the region.
    pub fn open_session<'h, H>(
        &mut self,
        host: &'h mut H,
        viewport: Rect,
        content: Rect,
    ) -> Result<ScrollSession<'h, H>, HostError>
    where
        H: ScrollRegion + ?Sized,
    {
        ScrollSession::open(host, viewport, content, &mut self.offset)
    }
}

/// An open scrollable region on a host.
///
/// Dereferences to the host so painting goes through the session.
pub struct ScrollSession<'h, H: ScrollRegion + ?Sized> {
    host: &'h mut H,
    viewport: Rect,
    content: Rect,
    open: bool,
}

impl<'h, H: ScrollRegion + ?Sized> ScrollSession<'h, H> {
    /// Open a region with a caller-supplied offset.
    ///
    /// The host's clamped offset is written back through `offset`, which lets
    /// several panels share one offset.
    ///
    /// # Errors
    ///
    /// Propagates the host's failure to open the region; nothing is left open.
    pub fn open(
        host: &'h mut H,
        viewport: Rect,
        content: Rect,
        offset: &mut ScrollOffset,
    ) -> Result<Self, HostError> {
        host.begin_scroll(viewport, offset, content)?;
        Ok(Self {
            host,
            viewport,
            content,
            open: true,
        })
    }

    /// Outer rectangle of the region.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Inner content rectangle.
    pub fn content(&self) -> Rect {
        self.content
    }

    /// Close the region.
    ///
    /// # Errors
    ///
    /// Propagates the host's failure to close the region.
    pub fn close(mut self) -> Result<(), HostError> {
        self.open = false;
        self.host.end_scroll()
    }
}

impl<H: ScrollRegion + ?Sized> Deref for ScrollSession<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: ScrollRegion + ?Sized> DerefMut for ScrollSession<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: ScrollRegion + ?Sized> Drop for ScrollSession<'_, H> {
    fn drop(&mut self) {
        if self.open {
            if let Err(err) = self.host.end_scroll() {
                warn!(error = %err, "failed to close scroll region");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{PaintOp, RecordingHost};

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 50.0)
    }

    fn content() -> Rect {
        Rect::new(0.0, 0.0, 84.0, 200.0)
    }

    #[test]
    fn close_ends_region_once() {
        let mut host = RecordingHost::new();
        let mut offset = ScrollOffset::default();
        let session = ScrollSession::open(&mut host, viewport(), content(), &mut offset).unwrap();
        session.close().unwrap();

        let ends = host.ops.iter().filter(|op| **op == PaintOp::EndScroll).count();
        assert_eq!(ends, 1);
        assert_eq!(host.open_regions, 0);
    }

    #[test]
    fn drop_closes_region_on_early_exit() {
        fn paint_then_fail(host: &mut RecordingHost) -> Result<(), HostError> {
            let mut offset = ScrollOffset::default();
            let _session = ScrollSession::open(host, viewport(), content(), &mut offset)?;
            Err(HostError::Backend("boom".to_string()))
        }

        let mut host = RecordingHost::new();
        assert!(paint_then_fail(&mut host).is_err());
        assert_eq!(host.open_regions, 0);
        assert_eq!(host.ops.last(), Some(&PaintOp::EndScroll));
    }

    #[test]
    fn external_offset_receives_clamped_value() {
        let mut host = RecordingHost::new();
        let mut offset = ScrollOffset::new(0.0, 999.0);
        ScrollSession::open(&mut host, viewport(), content(), &mut offset)
            .unwrap()
            .close()
            .unwrap();
        assert_eq!(offset.y, 150.0);
    }

    #[test]
    fn owned_state_persists_across_sessions() {
        let mut host = RecordingHost::new();
        let mut state = ScrollState::new(ScrollOffset::new(0.0, 40.0));

        for _ in 0..3 {
            state
                .open_session(&mut host, viewport(), content())
                .unwrap()
                .close()
                .unwrap();
        }
        assert_eq!(state.offset().y, 40.0);
    }

    #[test]
    fn scroll_by_clamps_to_range() {
        let mut state = ScrollState::default();
        state.scroll_by(-10.0, viewport(), content());
        assert_eq!(state.offset().y, 0.0);
        state.scroll_by(500.0, viewport(), content());
        assert_eq!(state.offset().y, 150.0);
    }

    #[test]
    fn scroll_to_bottom_and_top() {
        let mut state = ScrollState::default();
        state.scroll_to_bottom(viewport(), content());
        assert_eq!(state.offset().y, 150.0);
        state.scroll_to_top();
        assert_eq!(state.offset().y, 0.0);
    }

    #[test]
    fn session_derefs_to_host() {
        let mut host = RecordingHost::new();
        let mut offset = ScrollOffset::default();
        let session = ScrollSession::open(&mut host, viewport(), content(), &mut offset).unwrap();
        assert_eq!(session.open_regions, 1);
        assert_eq!(session.viewport(), viewport());
        assert_eq!(session.content(), content());
    }
}
