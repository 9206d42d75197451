// File: crates/bizchart-core/src/draw.rs
// Summary: Typed draw commands emitted by the layouts, in back-to-front order.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};
use crate::text::FontStyle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self { Self { color, width } }
}

/// One drawable primitive in plot-local device coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// L-shaped axis: top of the left edge, bottom-left corner, right end of the bottom edge.
    Axis { points: Vec<Point>, stroke: Stroke },
    SubGridLine { from: Point, to: Point, stroke: Stroke },
    GridLine { from: Point, to: Point, stroke: Stroke },
    /// Tick label anchored at its left edge, vertically centered on `at.y`.
    TickLabel { text: String, at: Point, font: FontStyle },
    /// Closed polygon under a series polyline.
    SeriesArea { series: usize, points: Vec<Point>, fill: Rgba },
    SeriesLine { series: usize, points: Vec<Point>, stroke: Stroke },
    Bar { series: usize, category: usize, rect: Rect, fill: Rgba },
    HitMarker { center: Point, radius: f64, fill: Rgba },
}

/// Ordered output of a layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    commands: Vec<DrawCommand>,
}

impl Geometry {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, cmd: DrawCommand) { self.commands.push(cmd); }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }
    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> { self.commands.iter() }
    pub fn len(&self) -> usize { self.commands.len() }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Polyline points of value series `series`, if it was drawn as a line.
    pub fn series_line(&self, series: usize) -> Option<&[Point]> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::SeriesLine { series: s, points, .. } if *s == series => Some(points.as_slice()),
            _ => None,
        })
    }

    /// Bar rectangles in emission order as `(category, series, rect)`.
    pub fn bars(&self) -> Vec<(usize, usize, Rect)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Bar { series, category, rect, .. } => Some((*category, *series, *rect)),
                _ => None,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Geometry {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;
    fn into_iter(self) -> Self::IntoIter { self.commands.iter() }
}
