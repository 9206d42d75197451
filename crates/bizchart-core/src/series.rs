// File: crates/bizchart-core/src/series.rs
// Summary: Series model: ordered values with an incrementally tracked range, title, colors, opacity.

use tracing::debug;

use crate::color::SeriesColors;

/// One named sequence of values.
///
/// Used both for the abscissa (the shared x categories) and for each value
/// series of a [`Dataset`](crate::Dataset). Colors are assigned by the dataset
/// when the series is appended; before that they read as opaque black.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    title: Option<String>,
    values: Vec<f64>,
    // (min, max) of `values`; None while empty.
    range: Option<(f64, f64)>,
    pub(crate) colors: SeriesColors,
    opacity: f64,
}

impl Series {
    pub fn new() -> Self {
        Self { title: None, values: Vec::new(), range: None, colors: SeriesColors::default(), opacity: 1.0 }
    }

    /// Build a series from `values`, pushing them in order.
    pub fn with_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut s = Self::new();
        s.extend(values);
        s
    }

    /// Builder-style title; empty titles are ignored like [`Series::set_title`].
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Set the title. Empty strings are rejected and leave the title unchanged.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if title.is_empty() {
            debug!("ignoring empty series title");
            return false;
        }
        self.title = Some(title);
        true
    }

    pub fn title(&self) -> Option<&str> { self.title.as_deref() }

    /// Append a value, updating the running range in O(1).
    /// Non-finite values are stored but never widen the range.
    pub fn push(&mut self, y: f64) {
        self.values.push(y);
        if !y.is_finite() { return; }
        self.range = Some(match self.range {
            None => (y, y),
            Some((lo, hi)) => (if y < lo { y } else { lo }, if y > hi { y } else { hi }),
        });
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = f64>) {
        for v in values { self.push(v); }
    }

    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Smallest pushed value; `None` until a value exists.
    pub fn ymin(&self) -> Option<f64> { self.range.map(|(lo, _)| lo) }
    /// Largest pushed value; `None` until a value exists.
    pub fn ymax(&self) -> Option<f64> { self.range.map(|(_, hi)| hi) }
    pub fn range(&self) -> Option<(f64, f64)> { self.range }

    pub fn colors(&self) -> SeriesColors { self.colors }

    /// Set the area opacity. Values outside `[0, 1]` are rejected.
    pub fn set_opacity(&mut self, opacity: f64) -> bool {
        if !(0.0..=1.0).contains(&opacity) {
            debug!(opacity, "rejecting series opacity outside [0, 1]");
            return false;
        }
        self.opacity = opacity;
        true
    }

    pub fn opacity(&self) -> f64 { self.opacity }
}

impl Default for Series {
    fn default() -> Self { Self::new() }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self { Self::with_values(iter) }
}
