// File: crates/bizchart-core/src/bar.rs
// Summary: Grouped vertical bar layout with golden-ratio group spacing.

use tracing::debug;

use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::draw::{DrawCommand, Geometry};
use crate::geometry::Rect;
use crate::layout::{push_frame, ChartLayout};
use crate::scale::AxisScaler;
use crate::types::INNER_PADDING;

/// Default share of each category slot taken by its bar group: 1/φ.
pub const GOLDEN_GROUP_WIDTH: f64 = 0.618_033_988_7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    group_width: f64,
    padding: f64,
}

/// Horizontal slot sizes in data units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSlots {
    /// Gap before, between and after groups.
    pub gap: f64,
    /// Width of one category group.
    pub group: f64,
    /// Width of one bar inside a group.
    pub bar: f64,
}

impl BarLayout {
    pub fn new() -> Self { Self { group_width: GOLDEN_GROUP_WIDTH, padding: INNER_PADDING } }

    /// Set the group width. Values outside `(0, 1]` are rejected and the
    /// previous width is kept.
    pub fn set_group_width(&mut self, group_width: f64) -> bool {
        if !(group_width > 0.0 && group_width <= 1.0) {
            debug!(group_width, "rejecting bar group width outside (0, 1]");
            return false;
        }
        self.group_width = group_width;
        true
    }

    pub fn group_width(&self) -> f64 { self.group_width }

    /// Gap, group and bar widths for `categories` groups of `series` bars
    /// spread over `span` data units. `(N + 1)` gaps plus `N` groups fill the span exactly.
    pub fn slots(&self, span: f64, categories: usize, series: usize) -> BarSlots {
        let n = categories.max(1) as f64;
        let gap = (1.0 - self.group_width) * span / (n + 1.0);
        let group = self.group_width * span / n;
        BarSlots { gap, group, bar: group / series.max(1) as f64 }
    }
}

impl Default for BarLayout {
    fn default() -> Self { Self::new() }
}

impl ChartLayout for BarLayout {
    fn compute(&self, dataset: &Dataset, config: &ChartConfig, plot: Rect) -> Geometry {
        let mut out = Geometry::new();
        let Some(mut scaler) = AxisScaler::for_dataset(dataset, plot, self.padding) else {
            debug!("bar layout: nothing to draw");
            return out;
        };
        // Equal first and last categories leave no span to share; use one unit.
        if scaler.xmax == scaler.xmin {
            scaler = scaler.with_x_window(scaler.xmin, scaler.xmin + 1.0);
        }

        push_frame(&mut out, &scaler, config);

        let series = dataset.series();
        let categories = dataset.category_count();
        let slots = self.slots(scaler.xmax - scaler.xmin, categories, series.len());

        let mut x = scaler.xmin + slots.gap;
        for category in 0..categories {
            let mut bx = x;
            for (index, s) in series.iter().enumerate() {
                let value = s.values()[category];
                if !value.is_finite() {
                    bx += slots.bar;
                    continue;
                }
                let base = scaler.to_device(bx, scaler.ymin);
                let top = scaler.to_device(bx + slots.bar, value);
                out.push(DrawCommand::Bar {
                    series: index,
                    category,
                    rect: Rect::from_corners(base, top),
                    fill: s.colors().line,
                });
                bx += slots.bar;
            }
            x += slots.gap + slots.group;
        }
        out
    }
}
