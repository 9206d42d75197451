// File: crates/bizchart-core/src/line.rs
// Summary: Line chart layout: frame, per-series polylines and optional filled areas.

use tracing::{debug, trace};

use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::draw::{DrawCommand, Geometry, Stroke};
use crate::geometry::{Point, Rect};
use crate::layout::{push_frame, ChartLayout};
use crate::scale::AxisScaler;
use crate::types::INNER_PADDING;

/// Stroke width of series polylines.
pub const LINE_WIDTH: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineLayout {
    padding: f64,
}

impl LineLayout {
    pub fn new() -> Self { Self { padding: INNER_PADDING } }

    pub fn padding(&self) -> f64 { self.padding }

    /// The transform this layout draws with, also used for hit testing.
    pub fn scaler(&self, dataset: &Dataset, plot: Rect) -> Option<AxisScaler> {
        AxisScaler::for_dataset(dataset, plot, self.padding)
    }
}

impl Default for LineLayout {
    fn default() -> Self { Self::new() }
}

impl ChartLayout for LineLayout {
    fn compute(&self, dataset: &Dataset, config: &ChartConfig, plot: Rect) -> Geometry {
        let mut out = Geometry::new();
        let Some(scaler) = self.scaler(dataset, plot) else {
            debug!("line layout: nothing to draw");
            return out;
        };
        let xs = dataset.absciss().map(|a| a.values()).unwrap_or_default();

        push_frame(&mut out, &scaler, config);

        let (tl, br) = scaler.inner_box();
        for (index, series) in dataset.series().iter().enumerate() {
            let points: Vec<Point> = xs
                .iter()
                .zip(series.values())
                .map(|(&x, &y)| scaler.to_device(x, y))
                .filter(Point::is_finite)
                .collect();
            if points.is_empty() { continue; }
            trace!(index, points = points.len(), "series polyline");

            let colors = series.colors();
            if dataset.area() {
                let mut area = points.clone();
                area.push(Point::new(br.x, br.y));
                area.push(Point::new(tl.x, br.y));
                out.push(DrawCommand::SeriesArea {
                    series: index,
                    points: area,
                    fill: colors.area.premultiplied(series.opacity()),
                });
            }
            out.push(DrawCommand::SeriesLine {
                series: index,
                points,
                stroke: Stroke::new(colors.line, LINE_WIDTH),
            });
        }
        out
    }
}
