// File: crates/bizchart-core/src/scale.rs
// Summary: Axis range rounding and the data-space to device-space transform.

use crate::dataset::Dataset;
use crate::geometry::{Point, Rect};

/// Round the axis ceiling up to the next multiple of a tenth of the range's
/// order of magnitude.
///
/// With `n = floor(log10(ymax - ymin))` the result is
/// `(floor(ymax / 10^(n-1)) + 1) * 10^(n-1)`, so it is always above `ymax`.
/// A flat or non-finite range has no magnitude; it falls back to `ymax + 1`.
pub fn nice_upper_bound(ymin: f64, ymax: f64) -> f64 {
    let span = ymax - ymin;
    if !(span > 0.0) || !span.is_finite() {
        return ymax + 1.0;
    }
    let n = span.log10().floor() as i32;
    let step = 10f64.powi(n - 1);
    ((ymax / step).floor() + 1.0) * step
}

/// Linear map from data space to device space inside a `plot_w` x `plot_h`
/// box inset by `padding`. Y is inverted so larger values sit higher.
/// A constant range on either axis maps to that axis' midline.
#[allow(clippy::too_many_arguments)]
pub fn to_device(
    xmin: f64, xmax: f64, ymin: f64, ymax: f64,
    x: f64, y: f64,
    plot_w: f64, plot_h: f64, padding: f64,
) -> Point {
    let fx = fraction(x - xmin, xmax - xmin);
    let fy = fraction(ymax - y, ymax - ymin);
    Point::new(padding + (plot_w - 2.0 * padding) * fx, padding + (plot_h - 2.0 * padding) * fy)
}

/// Value of tick `i` out of `count` equal steps from `ymin` to `ymax`.
pub fn tick_value(i: u32, count: u32, ymin: f64, ymax: f64) -> f64 {
    if count == 0 { return ymin; }
    ymin + i as f64 * (ymax - ymin) / count as f64
}

#[inline]
fn fraction(offset: f64, span: f64) -> f64 {
    if span == 0.0 || !span.is_finite() { 0.5 } else { offset / span }
}

/// Data window and plot box bundled for repeated mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScaler {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub plot_w: f64,
    pub plot_h: f64,
    pub padding: f64,
}

impl AxisScaler {
    /// Scaler shared by every chart kind: x spans the first to the last
    /// abscissa value, y spans the dataset minimum to its nice upper bound.
    ///
    /// `None` when there is nothing to map (no abscissa values, or no
    /// appended series with values).
    pub fn for_dataset(dataset: &Dataset, plot: Rect, padding: f64) -> Option<Self> {
        let xs = dataset.absciss()?.values();
        let (&first, &last) = (xs.first()?, xs.last()?);
        let (ymin, ymax) = dataset.interval()?;
        Some(Self {
            xmin: first,
            xmax: last,
            ymin,
            ymax: nice_upper_bound(ymin, ymax),
            plot_w: plot.width,
            plot_h: plot.height,
            padding,
        })
    }

    #[inline]
    pub fn to_device(&self, x: f64, y: f64) -> Point {
        to_device(self.xmin, self.xmax, self.ymin, self.ymax, x, y, self.plot_w, self.plot_h, self.padding)
    }

    pub fn tick_value(&self, i: u32, count: u32) -> f64 { tick_value(i, count, self.ymin, self.ymax) }

    /// Corners of the inner (padded) box: top-left and bottom-right.
    pub fn inner_box(&self) -> (Point, Point) {
        (
            Point::new(self.padding, self.padding),
            Point::new(self.plot_w - self.padding, self.plot_h - self.padding),
        )
    }

    /// Same transform with a different x window.
    pub fn with_x_window(self, xmin: f64, xmax: f64) -> Self { Self { xmin, xmax, ..self } }
}
