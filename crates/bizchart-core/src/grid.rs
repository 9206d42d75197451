// File: crates/bizchart-core/src/grid.rs
// Summary: Horizontal grid/tick layout helpers.

use crate::scale::AxisScaler;

/// One horizontal tick: its data value and device-space y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub index: u32,
    pub value: f64,
    pub y: f64,
}

/// Ticks `first..=count` of an axis split into `count` equal steps.
/// Empty when `count` is zero.
pub fn ticks(scaler: &AxisScaler, first: u32, count: u32) -> Vec<Tick> {
    if count == 0 { return Vec::new(); }
    (first..=count)
        .map(|index| {
            let value = scaler.tick_value(index, count);
            Tick { index, value, y: scaler.to_device(scaler.xmin, value).y }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> AxisScaler {
        AxisScaler { xmin: 0.0, xmax: 1.0, ymin: 0.0, ymax: 100.0, plot_w: 110.0, plot_h: 110.0, padding: 5.0 }
    }

    #[test]
    fn ticks_run_bottom_to_top() {
        let t = ticks(&scaler(), 0, 4);
        assert_eq!(t.len(), 5);
        assert_eq!(t[0].y, 105.0);
        assert_eq!(t[4].y, 5.0);
        assert_eq!(t[2].value, 50.0);
    }

    #[test]
    fn zero_count_has_no_ticks() {
        assert!(ticks(&scaler(), 1, 0).is_empty());
    }
}
