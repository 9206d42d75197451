// File: crates/bizchart-core/src/hit.rs
// Summary: Nearest-point hit testing for line charts and the hover marker state.

use crate::color::Rgba;
use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::draw::DrawCommand;
use crate::geometry::Point;
use crate::scale::AxisScaler;
use crate::types::{Offsets, INNER_PADDING};

/// Half side of the square tolerance window around each data point.
pub const HIT_TOLERANCE: f64 = 3.0;
/// Radius of the highlight marker.
pub const MARKER_RADIUS: f64 = 5.0;

/// A data point under the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub series: usize,
    pub index: usize,
    /// Plot-local device position of the point.
    pub point: Point,
    /// Line color of the series.
    pub color: Rgba,
}

impl Hit {
    pub fn marker(&self) -> DrawCommand {
        DrawCommand::HitMarker { center: self.point, radius: MARKER_RADIUS, fill: self.color }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTester {
    tolerance: f64,
}

impl HitTester {
    pub fn new() -> Self { Self { tolerance: HIT_TOLERANCE } }

    /// Find the data point under `cursor` (canvas coordinates).
    ///
    /// The cursor is moved into plot space by the left/top `offsets`, then
    /// compared with every point of every series as the line layout maps it.
    /// Points within the tolerance on both axes qualify; the last one in
    /// series-then-index order wins.
    pub fn find(&self, dataset: &Dataset, config: &ChartConfig, offsets: Offsets, cursor: Point) -> Option<Hit> {
        let (w, h) = config.size();
        let scaler = AxisScaler::for_dataset(dataset, offsets.plot_rect(w, h), INNER_PADDING)?;
        let local = cursor - Point::new(offsets.left, offsets.top);
        let xs = dataset.absciss()?.values();

        let mut found = None;
        for (si, series) in dataset.series().iter().enumerate() {
            for (index, (&x, &y)) in xs.iter().zip(series.values()).enumerate() {
                let p = scaler.to_device(x, y);
                if (local.x - p.x).abs() <= self.tolerance && (local.y - p.y).abs() <= self.tolerance {
                    found = Some(Hit { series: si, index, point: p, color: series.colors().line });
                }
            }
        }
        found
    }
}

impl Default for HitTester {
    fn default() -> Self { Self::new() }
}

/// What the presentation layer must do with the highlight marker.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerChange {
    /// Draw this marker, replacing any previous one.
    Show(DrawCommand),
    /// Remove the previously drawn marker.
    Clear,
    Unchanged,
}

/// Remembers the highlighted point between cursor moves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverTracker {
    current: Option<Hit>,
}

impl HoverTracker {
    pub fn new() -> Self { Self::default() }

    pub fn current(&self) -> Option<&Hit> { self.current.as_ref() }

    pub fn update(&mut self, hit: Option<Hit>) -> MarkerChange {
        let change = match (&self.current, &hit) {
            (None, None) => MarkerChange::Unchanged,
            (Some(_), None) => MarkerChange::Clear,
            (Some(old), Some(new)) if old == new => MarkerChange::Unchanged,
            (_, Some(new)) => MarkerChange::Show(new.marker()),
        };
        self.current = hit;
        change
    }

    /// Forget the marker without reporting a change (e.g. after relayout).
    pub fn reset(&mut self) { self.current = None; }
}
