//! Layout constants for the terminal viewer.

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Columns taken by an image icon and its trailing space.
pub const ICON_WIDTH: f32 = 2.0;

/// Icon for a resolved image.
pub const IMAGE_GLYPH: char = '▣';

/// Icon for an image that could not be found.
pub const MISSING_IMAGE_GLYPH: char = '?';

/// Separator line glyph.
pub const LINE_GLYPH: &str = "─";

/// Rows scrolled per mouse wheel notch, in scroll steps.
pub const WHEEL_STEPS: f32 = 3.0;

/// Alpha below which painted text is dimmed.
pub const DIM_ALPHA: f32 = 0.75;
