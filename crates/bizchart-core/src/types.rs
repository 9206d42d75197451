// File: crates/bizchart-core/src/types.rs
// Summary: Shared constants (canvas size, paddings) and the canvas-to-plot offsets.

use crate::geometry::Rect;

/// Default canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 600;

/// Margin between the canvas edge (or the title) and the plot rectangle.
pub const OUTER_PADDING: f64 = 10.0;
/// Margin between the plot rectangle and the axis box inside it.
pub const INNER_PADDING: f64 = 5.0;

/// Offsets of the plot rectangle from the canvas edges, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Offsets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    /// Offsets for a chart whose title measures `title_height` pixels (0 without a title).
    pub fn for_title(title_height: f64) -> Self {
        let title_height = if title_height.is_finite() { title_height.max(0.0) } else { 0.0 };
        Self::new(OUTER_PADDING, OUTER_PADDING, title_height + OUTER_PADDING, OUTER_PADDING)
    }

    /// Total horizontal offset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical offset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }

    /// Plot rectangle on a `width` x `height` canvas, in canvas coordinates.
    /// Collapses to zero size rather than going negative.
    pub fn plot_rect(&self, width: u32, height: u32) -> Rect {
        Rect::from_xywh(
            self.left,
            self.top,
            (width as f64 - self.hsum()).max(0.0),
            (height as f64 - self.vsum()).max(0.0),
        )
    }
}

impl Default for Offsets {
    fn default() -> Self { Self::for_title(0.0) }
}
