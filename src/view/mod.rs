//! Terminal viewer (impure shell).
//!
//! Hosts a [`RichListing`] in a ratatui terminal: measures and paints the
//! document every frame, maps keys and the mouse wheel to scrolling, and
//! repaints on a timer so frame sequences animate.

pub mod constants;
pub mod metrics;
pub mod resources;
pub mod rich_text;
pub mod styles;
pub mod surface;

pub use metrics::TerminalMetrics;
pub use resources::{FrameLibrary, ImageCatalog};
pub use styles::{ColorConfig, ListingPalette};
pub use surface::{TerminalHost, TerminalSurface};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::listing::RichListing;
use crate::model::{AppError, Entry, KeyAction, Rect};
use crate::parser::EmphasisTags;
use crate::source::Document;
use constants::{STATUS_BAR_HEIGHT, WHEEL_STEPS};
use crossterm::{
    event::{self, Event, KeyEvent, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect as CellArea, widgets::Paragraph, Terminal};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// The viewer application.
///
/// Generic over backend to support testing with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    listing: RichListing,
    entries: Vec<Entry>,
    host: TerminalHost,
    key_bindings: KeyBindings,
    label: String,
    scroll_step: f32,
    tick: Duration,
    started: Instant,
    animated: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Take over the terminal: raw mode, alternate screen, mouse capture.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Terminal` if the terminal cannot be set up.
    pub fn new(document: Document, config: &ResolvedConfig) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, document, config))
    }

    /// Run the event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Terminal` on terminal IO failure.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            if event::poll(self.tick)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.animated {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Viewer over an already set-up terminal.
    pub fn with_terminal(terminal: Terminal<B>, document: Document, config: &ResolvedConfig) -> Self {
        let host = TerminalHost::new(
            &document.base_dir,
            EmphasisTags::default(),
            ListingPalette::default(),
        );
        let style = config.listing_style(host.metrics());
        let animated = document
            .entries
            .iter()
            .any(|entry| matches!(entry, Entry::Video(_)));

        Self {
            terminal,
            listing: RichListing::new(style),
            entries: document.entries,
            host,
            key_bindings: KeyBindings::default(),
            label: document.label,
            scroll_step: config.scroll_step,
            tick: config.tick(),
            started: Instant::now(),
            animated,
        }
    }

    /// The listing, with its scroll state and last measured extents.
    pub fn listing(&self) -> &RichListing {
        &self.listing
    }

    /// The terminal, for inspecting a test backend.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Apply a key press. Returns `true` when the viewer should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.key_bindings.get(key) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    /// Apply an action. Returns `true` for [`KeyAction::Quit`].
    pub fn apply(&mut self, action: KeyAction) -> bool {
        let viewport = self.listing.viewport();
        let content = self.listing.content();
        let page = (viewport.height - 1.0).max(1.0);
        let scroll = self.listing.scroll_mut();

        match action {
            KeyAction::ScrollUp => scroll.scroll_by(-self.scroll_step, viewport, content),
            KeyAction::ScrollDown => scroll.scroll_by(self.scroll_step, viewport, content),
            KeyAction::PageUp => scroll.scroll_by(-page, viewport, content),
            KeyAction::PageDown => scroll.scroll_by(page, viewport, content),
            KeyAction::ScrollToTop => scroll.scroll_to_top(),
            KeyAction::ScrollToBottom => scroll.scroll_to_bottom(viewport, content),
            KeyAction::Quit => return true,
        }
        debug!(?action, offset = self.listing.scroll().offset().y, "scrolled");
        false
    }

    /// Scroll on mouse wheel events.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let viewport = self.listing.viewport();
        let content = self.listing.content();
        let delta = WHEEL_STEPS * self.scroll_step;
        match mouse.kind {
            MouseEventKind::ScrollDown => self.listing.scroll_mut().scroll_by(delta, viewport, content),
            MouseEventKind::ScrollUp => self.listing.scroll_mut().scroll_by(-delta, viewport, content),
            _ => {}
        }
    }

    /// Measure and paint one frame.
    ///
    /// Host failures are logged and the frame is shown as far as it got; the
    /// next frame tries again.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Terminal` on terminal IO failure.
    pub fn draw(&mut self) -> Result<(), AppError> {
        let size = self.terminal.size()?;
        let listing_rows = size.height.saturating_sub(STATUS_BAR_HEIGHT);
        let bounds = Rect::new(0.0, 0.0, f32::from(size.width), f32::from(listing_rows));

        self.host.frames_mut().set_clock(self.started.elapsed());
        let height = self.listing.pre_render(bounds, &self.entries, &self.host);

        let listing = &mut self.listing;
        let host = &mut self.host;
        let entries = &self.entries;
        let label = &self.label;
        let palette = host.palette();
        let mut outcome = Ok(0.0);

        self.terminal.draw(|frame| {
            let area = frame.area();
            let listing_area = CellArea::new(area.x, area.y, area.width, listing_rows.min(area.height));
            let status_area = CellArea::new(
                area.x,
                area.y + listing_area.height,
                area.width,
                area.height - listing_area.height,
            );

            {
                let mut surface = TerminalSurface::new(host, frame.buffer_mut(), listing_area);
                outcome = listing.on_gui(&mut surface, entries);
            }

            let status = status_line(label, listing.scroll().offset().y, bounds.height, height);
            frame.render_widget(Paragraph::new(status).style(palette.status_bar()), status_area);
        })?;

        if let Err(err) = outcome {
            warn!(error = %err, "frame painted partially");
        }
        Ok(())
    }
}

/// Status bar text: source, visible rows, key hints.
pub fn status_line(label: &str, offset: f32, viewport: f32, content: f32) -> String {
    let total = content.max(0.0).ceil() as u64;
    let first = if total == 0 { 0 } else { offset.max(0.0) as u64 + 1 };
    let last = (offset.max(0.0) + viewport.max(0.0)).min(content.max(0.0)).ceil() as u64;
    format!(" {label}  {first}-{last}/{total}  j/k scroll  g/G top/bottom  q quit")
}

/// Content height of `entries` in a terminal `width` columns wide.
pub fn measure_document(entries: &[Entry], base_dir: &Path, config: &ResolvedConfig, width: u16) -> f32 {
    let host = TerminalHost::new(base_dir, EmphasisTags::default(), ListingPalette::default());
    let mut listing = RichListing::new(config.listing_style(host.metrics()));
    listing.pre_render(Rect::new(0.0, 0.0, f32::from(width), 0.0), entries, &host)
}

/// Run the viewer on `document`, restoring the terminal however it exits.
///
/// Logging must be initialized by the caller.
///
/// # Errors
///
/// Returns `AppError::Terminal` on terminal IO failure.
pub fn run_with_source(document: Document, config: &ResolvedConfig) -> Result<(), AppError> {
    info!(source = %document.label, entries = document.entries.len(), "starting viewer");
    let mut app = TuiApp::new(document, config)?;

    let result = app.run();
    restore_terminal()?;
    result
}

/// Disable raw mode and mouse capture and leave the alternate screen.
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
