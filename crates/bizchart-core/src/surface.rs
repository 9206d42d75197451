// File: crates/bizchart-core/src/surface.rs
// Summary: Drawing-surface abstraction the core renders through, and command replay.

use crate::color::Rgba;
use crate::draw::{DrawCommand, Geometry};
use crate::geometry::{Point, Rect};
use crate::text::FontStyle;

/// Text metrics provided by the presentation layer.
pub trait TextMeasure {
    /// `(width, height)` of `text` set in `font`, in pixels.
    fn measure(&self, text: &str, font: &FontStyle) -> (f64, f64);
}

/// Primitive drawing operations. All coordinates are canvas coordinates.
pub trait DrawingSurface: TextMeasure {
    fn clear(&mut self, color: Rgba);
    fn stroke_polyline(&mut self, points: &[Point], color: Rgba, width: f64);
    fn fill_polygon(&mut self, points: &[Point], color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
    /// Draw `text` with its top-left corner at `top_left`.
    fn draw_text(&mut self, text: &str, top_left: Point, font: &FontStyle);
}

/// Replay `geometry` onto `surface`, shifting plot-local coordinates by `origin`.
pub fn replay<S: DrawingSurface + ?Sized>(geometry: &Geometry, origin: Point, surface: &mut S) {
    for cmd in geometry {
        draw_command(cmd, origin, surface);
    }
}

pub fn draw_command<S: DrawingSurface + ?Sized>(cmd: &DrawCommand, origin: Point, surface: &mut S) {
    let shift = |pts: &[Point]| pts.iter().map(|p| *p + origin).collect::<Vec<_>>();
    match cmd {
        DrawCommand::Axis { points, stroke } => {
            surface.stroke_polyline(&shift(points), stroke.color, stroke.width)
        }
        DrawCommand::SubGridLine { from, to, stroke } | DrawCommand::GridLine { from, to, stroke } => {
            surface.stroke_polyline(&[*from + origin, *to + origin], stroke.color, stroke.width)
        }
        DrawCommand::TickLabel { text, at, font } => {
            let (_, h) = surface.measure(text, font);
            let top_left = Point::new(at.x, at.y - h / 2.0) + origin;
            surface.draw_text(text, top_left, font)
        }
        DrawCommand::SeriesArea { points, fill, .. } => surface.fill_polygon(&shift(points), *fill),
        DrawCommand::SeriesLine { points, stroke, .. } => {
            surface.stroke_polyline(&shift(points), stroke.color, stroke.width)
        }
        DrawCommand::Bar { rect, fill, .. } => surface.fill_rect(rect.translate(origin), *fill),
        DrawCommand::HitMarker { center, radius, fill } => surface.fill_circle(*center + origin, *radius, *fill),
    }
}
