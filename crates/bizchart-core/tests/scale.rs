// File: crates/bizchart-core/tests/scale.rs
// Purpose: Nice upper bound and device mapping invariants.

use bizchart_core::{nice_upper_bound, tick_value, to_device, Point};
use proptest::prelude::*;

#[test]
fn company_performance_range_rounds_to_1200() {
    assert_eq!(nice_upper_bound(0.0, 1170.0), 1200.0);
}

#[test]
fn flat_series_gets_a_one_unit_range() {
    // log10(0) has no magnitude; the bound is pushed one unit up instead.
    let top = nice_upper_bound(42.0, 42.0);
    assert_eq!(top, 43.0);
    let p = to_device(0.0, 1.0, 42.0, top, 0.0, 42.0, 100.0, 100.0, 5.0);
    assert!(p.x.is_finite() && p.y.is_finite());
    assert_eq!(p.y, 95.0);
}

#[test]
fn boundary_points_map_to_padded_corners() {
    let (w, h, pad) = (780.0, 580.0, 5.0);
    let tl = to_device(2004.0, 2007.0, 0.0, 1200.0, 2004.0, 1200.0, w, h, pad);
    let br = to_device(2004.0, 2007.0, 0.0, 1200.0, 2007.0, 0.0, w, h, pad);
    assert_eq!(tl, Point::new(pad, pad));
    assert_eq!(br, Point::new(w - pad, h - pad));
}

#[test]
fn ticks_split_range_evenly() {
    let v: Vec<f64> = (0..=5).map(|i| tick_value(i, 5, 0.0, 1200.0)).collect();
    assert_eq!(v, vec![0.0, 240.0, 480.0, 720.0, 960.0, 1200.0]);
}

proptest! {
    #[test]
    fn prop_nice_bound_never_truncates(ymin in -1.0e6f64..1.0e6, span in 1.0e-3f64..1.0e6) {
        let ymax = ymin + span;
        let top = nice_upper_bound(ymin, ymax);
        prop_assert!(top >= ymax - ymax.abs() * 1e-12);
    }

    #[test]
    fn prop_nice_bound_is_multiple_of_step(ymin in -1.0e6f64..1.0e6, span in 1.0e-3f64..1.0e6) {
        let ymax = ymin + span;
        let n = (ymax - ymin).log10().floor() as i32;
        let step = 10f64.powi(n - 1);
        let k = nice_upper_bound(ymin, ymax) / step;
        prop_assert!((k - k.round()).abs() < 1e-6 * k.abs().max(1.0));
    }

    #[test]
    fn prop_mapped_points_stay_inside_padded_box(fx in 0.0f64..=1.0, fy in 0.0f64..=1.0) {
        let (xmin, xmax, ymin, ymax) = (-3.0, 9.0, 10.0, 250.0);
        let p = to_device(xmin, xmax, ymin, ymax,
                          xmin + fx * (xmax - xmin), ymin + fy * (ymax - ymin),
                          400.0, 300.0, 5.0);
        prop_assert!(p.x >= 5.0 - 1e-9 && p.x <= 395.0 + 1e-9);
        prop_assert!(p.y >= 5.0 - 1e-9 && p.y <= 295.0 + 1e-9);
    }
}
