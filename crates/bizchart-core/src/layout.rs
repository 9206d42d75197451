// File: crates/bizchart-core/src/layout.rs
// Summary: ChartLayout capability, the closed set of chart kinds, and the axis/grid frame they share.

use crate::bar::BarLayout;
use crate::color::Rgba;
use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::draw::{DrawCommand, Geometry, Stroke};
use crate::geometry::{Point, Rect};
use crate::grid::ticks;
use crate::line::LineLayout;
use crate::scale::AxisScaler;
use crate::text::tick_label;

/// Turns a dataset into drawable geometry for a plot rectangle.
///
/// Only the size of `plot` matters: output is in plot-local coordinates with
/// the origin at the plot's top-left corner. Implementations are pure; equal
/// inputs give equal geometry.
pub trait ChartLayout {
    fn compute(&self, dataset: &Dataset, config: &ChartConfig, plot: Rect) -> Geometry;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartKind {
    Line(LineLayout),
    Bar(BarLayout),
}

impl ChartKind {
    pub fn line() -> Self { ChartKind::Line(LineLayout::new()) }
    pub fn bar() -> Self { ChartKind::Bar(BarLayout::new()) }

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Line(_) => "line",
            ChartKind::Bar(_) => "bar",
        }
    }
}

impl Default for ChartKind {
    fn default() -> Self { ChartKind::line() }
}

impl ChartLayout for ChartKind {
    fn compute(&self, dataset: &Dataset, config: &ChartConfig, plot: Rect) -> Geometry {
        match self {
            ChartKind::Line(l) => l.compute(dataset, config, plot),
            ChartKind::Bar(b) => b.compute(dataset, config, plot),
        }
    }
}

const AXIS_STROKE: Stroke = Stroke::new(Rgba::BLACK, 1.0);

/// Emit the axis, sub-grid, grid and tick labels common to every chart kind.
pub(crate) fn push_frame(out: &mut Geometry, scaler: &AxisScaler, config: &ChartConfig) {
    let (tl, br) = scaler.inner_box();
    out.push(DrawCommand::Axis {
        points: vec![tl, Point::new(tl.x, br.y), br],
        stroke: AXIS_STROKE,
    });

    let sub = config.sub_grid();
    for t in ticks(scaler, 1, sub.y_count) {
        out.push(DrawCommand::SubGridLine {
            from: Point::new(tl.x, t.y),
            to: Point::new(br.x, t.y),
            stroke: Stroke::new(sub.color, 1.0),
        });
    }

    let grid = config.grid();
    let all = ticks(scaler, 0, grid.y_count);
    for t in all.iter().filter(|t| t.index > 0) {
        out.push(DrawCommand::GridLine {
            from: Point::new(tl.x, t.y),
            to: Point::new(br.x, t.y),
            stroke: Stroke::new(grid.color, 1.0),
        });
    }
    for t in &all {
        out.push(DrawCommand::TickLabel {
            text: tick_label(t.value),
            at: Point::new(0.0, t.y),
            font: config.vaxis_title().style.clone(),
        });
    }
}
