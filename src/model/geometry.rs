//! Geometry and paint-state primitives shared by the layout passes and hosts.
//!
//! Units are host units: pixels for a pixel host, cells for the terminal host.

/// Axis-aligned rectangle in host units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width (never negative once constructed via `new`).
    pub width: f32,
    /// Height (never negative once constructed via `new`).
    pub height: f32,
}

impl Rect {
    /// Create a rectangle. Negative extents are clamped to zero.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Same rectangle with a different height.
    pub fn with_height(self, height: f32) -> Self {
        Self::new(self.x, self.y, self.width, height)
    }
}

/// Two-dimensional scroll position within content larger than the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    /// Horizontal pan.
    pub x: f32,
    /// Vertical pan.
    pub y: f32,
}

impl ScrollOffset {
    /// Create an offset.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp to `[0, max(0, content - viewport)]` on both axes.
    pub fn clamped(self, viewport: Rect, content: Rect) -> Self {
        let max_x = (content.width - viewport.width).max(0.0);
        let max_y = (content.height - viewport.height).max(0.0);
        Self {
            x: self.x.clamp(0.0, max_x),
            y: self.y.clamp(0.0, max_y),
        }
    }
}

/// RGBA paint color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha (opacity).
    pub a: f32,
}

impl Color {
    /// Opaque white, the neutral paint color.
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    /// Create a color from channels.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Component-wise multiply, the way a tint is applied to the current paint color.
    pub fn tinted(self, tint: Color) -> Self {
        Self {
            r: self.r * tint.r,
            g: self.g * tint.g,
            b: self.b * tint.b,
            a: self.a * tint.a,
        }
    }

    /// Same color with alpha scaled by `factor`.
    pub fn faded(self, factor: f32) -> Self {
        self.tinted(Color::rgba(1.0, 1.0, 1.0, factor))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_new_clamps_negative_extents() {
        let rect = Rect::new(1.0, 2.0, -5.0, -1.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::new(2.0, 3.0, 10.0, 4.0);
        assert_eq!(rect.right(), 12.0);
        assert_eq!(rect.bottom(), 7.0);
    }

    #[test]
    fn offset_clamps_to_scrollable_range() {
        let viewport = Rect::new(0.0, 0.0, 10.0, 5.0);
        let content = Rect::new(0.0, 0.0, 10.0, 20.0);

        let below = ScrollOffset::new(-3.0, -1.0).clamped(viewport, content);
        assert_eq!(below, ScrollOffset::new(0.0, 0.0));

        let above = ScrollOffset::new(4.0, 99.0).clamped(viewport, content);
        assert_eq!(above, ScrollOffset::new(0.0, 15.0));
    }

    #[test]
    fn offset_clamps_to_zero_when_content_fits() {
        let viewport = Rect::new(0.0, 0.0, 10.0, 50.0);
        let content = Rect::new(0.0, 0.0, 10.0, 20.0);
        let offset = ScrollOffset::new(0.0, 7.0).clamped(viewport, content);
        assert_eq!(offset.y, 0.0);
    }

    #[test]
    fn faded_scales_only_alpha() {
        let color = Color::rgba(0.5, 0.25, 1.0, 1.0).faded(0.4);
        assert_eq!(color.r, 0.5);
        assert_eq!(color.g, 0.25);
        assert_eq!(color.b, 1.0);
        assert!((color.a - 0.4).abs() < f32::EPSILON);
    }
}
