// File: crates/bizchart-core/src/dataset.rs
// Summary: Dataset = abscissa series + ordered value series, with a running y interval and area flag.

use tracing::{debug, trace, warn};

use crate::color::palette_entry;
use crate::error::ChartError;
use crate::series::Series;

/// The data table behind a chart.
///
/// Value series are kept in insertion order, which is also the drawing order
/// and the legend order. Every value series has exactly as many values as the
/// abscissa.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    title: Option<String>,
    absciss: Option<Series>,
    series: Vec<Series>,
    // Running (min, max) over appended series; None until a non-empty series is appended.
    interval: Option<(f64, f64)>,
    area: bool,
}

impl Dataset {
    pub fn new() -> Self { Self::default() }

    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if title.is_empty() {
            debug!("ignoring empty dataset title");
            return false;
        }
        self.title = Some(title);
        true
    }

    pub fn title(&self) -> Option<&str> { self.title.as_deref() }

    /// Set the shared x categories.
    ///
    /// Refused while value series of a different length are attached.
    pub fn set_absciss(&mut self, absciss: Series) -> bool {
        if let Some(first) = self.series.first() {
            if first.len() != absciss.len() {
                warn!(
                    expected = first.len(),
                    actual = absciss.len(),
                    "refusing abscissa whose length differs from the attached series"
                );
                return false;
            }
        }
        self.absciss = Some(absciss);
        true
    }

    pub fn absciss(&self) -> Option<&Series> { self.absciss.as_ref() }

    /// Append a value series.
    ///
    /// On success the series receives its palette colors (by insertion
    /// position) and the dataset interval is seeded or widened. On failure the
    /// dataset is unchanged and the series is dropped.
    pub fn append(&mut self, mut series: Series) -> Result<(), ChartError> {
        let expected = match &self.absciss {
            Some(a) => a.len(),
            None => {
                warn!("appending a series before the abscissa is set");
                return Err(ChartError::MissingAbscissa);
            }
        };
        if series.len() != expected {
            warn!(expected, actual = series.len(), "adding a series with a different value count from the abscissa");
            return Err(ChartError::ShapeMismatch { expected, actual: series.len() });
        }

        let index = self.series.len();
        series.colors = palette_entry(index);
        if let Some((lo, hi)) = series.range() {
            self.interval = Some(match self.interval {
                None => (lo, hi),
                Some((dlo, dhi)) => (dlo.min(lo), dhi.max(hi)),
            });
        }
        trace!(index, title = series.title().unwrap_or(""), "series appended");
        self.series.push(series);
        Ok(())
    }

    pub fn series(&self) -> &[Series] { &self.series }

    /// Overwrite the lower bound of the y interval.
    ///
    /// Later appends keep widening the interval from the new bound. Before the
    /// first append there is no interval to adjust and the call is ignored, as
    /// are non-finite values and values above the current ymax.
    pub fn set_ymin(&mut self, ymin: f64) {
        let Some((_, hi)) = self.interval else {
            debug!(ymin, "ignoring ymin before the first append");
            return;
        };
        if !ymin.is_finite() || ymin > hi {
            debug!(ymin, ymax = hi, "rejecting ymin override");
            return;
        }
        self.interval = Some((ymin, hi));
    }

    /// Current `(ymin, ymax)`, or `None` until a non-empty series is appended.
    pub fn interval(&self) -> Option<(f64, f64)> { self.interval }

    pub fn set_area(&mut self, on: bool) { self.area = on; }
    pub fn area(&self) -> bool { self.area }

    /// Number of abscissa categories (0 when no abscissa is set).
    pub fn category_count(&self) -> usize { self.absciss.as_ref().map_or(0, Series::len) }
}
