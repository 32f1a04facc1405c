//! Terminal styles for listing paint calls.

use super::constants::DIM_ALPHA;
use crate::model::{Color as PaintColor, FontKind};
use ratatui::style::{Color, Modifier, Style};

/// Whether output may use color.
///
/// Disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Read `NO_COLOR` from the environment.
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Fixed setting, for tests.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Maps fonts and paint colors onto terminal styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingPalette {
    colors: ColorConfig,
}

impl ListingPalette {
    /// Palette honoring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// Base style of a font. Terminals have one glyph size, so size classes
    /// map to weight.
    pub fn font(&self, font: FontKind) -> Style {
        match font {
            FontKind::Medium => Style::default().add_modifier(Modifier::BOLD),
            FontKind::Small => Style::default(),
            FontKind::Tiny => Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Style contributed by the paint color: dim when translucent, a
    /// foreground color when not white.
    pub fn paint(&self, color: PaintColor) -> Style {
        let mut style = Style::default();
        if color.a < DIM_ALPHA {
            style = style.add_modifier(Modifier::DIM);
        }
        let white = color.r >= 1.0 && color.g >= 1.0 && color.b >= 1.0;
        if self.colors.colors_enabled() && !white {
            style = style.fg(Color::Rgb(channel(color.r), channel(color.g), channel(color.b)));
        }
        style
    }

    /// Style of `font` painted in `color`.
    pub fn text(&self, font: FontKind, color: PaintColor) -> Style {
        self.font(font).patch(self.paint(color))
    }

    /// Placeholder boxes and missing-image icons.
    pub fn placeholder(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }

    /// The status bar.
    pub fn status_bar(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

impl Default for ListingPalette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env())
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
