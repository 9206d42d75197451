// File: crates/bizchart-core/tests/bar_layout.rs
// Purpose: Grouped bar geometry: grouping, contiguity, golden-ratio gaps and group width validation.

mod common;

use bizchart_core::bar::GOLDEN_GROUP_WIDTH;
use bizchart_core::{BarLayout, ChartConfig, ChartLayout, Dataset, DrawCommand, Rect, Series};
use common::{company_performance, default_plot};

const EPS: f64 = 1e-9;

fn bars_by_group(layout: &BarLayout, d: &Dataset) -> Vec<Vec<Rect>> {
    let g = layout.compute(d, &ChartConfig::default(), default_plot());
    let mut groups: Vec<Vec<Rect>> = Vec::new();
    for (category, series, rect) in g.bars() {
        if series == 0 {
            groups.push(Vec::new());
        }
        assert_eq!(groups.len() - 1, category);
        groups[category].push(rect);
    }
    groups
}

#[test]
fn four_groups_of_two_contiguous_bars() {
    let groups = bars_by_group(&BarLayout::new(), &company_performance());
    assert_eq!(groups.len(), 4);
    for g in &groups {
        assert_eq!(g.len(), 2);
        assert!((g[0].right() - g[1].x).abs() < EPS, "bars in a group must touch");
        assert!((g[0].width - g[1].width).abs() < EPS);
    }
}

#[test]
fn groups_are_separated_by_the_golden_gap() {
    let groups = bars_by_group(&BarLayout::new(), &company_performance());
    // 3 data units over 770px; gap = (1 - 1/phi) * 3 / 5 units.
    let px_per_unit = 770.0 / 3.0;
    let gap = (1.0 - GOLDEN_GROUP_WIDTH) * 3.0 / 5.0 * px_per_unit;
    let group = GOLDEN_GROUP_WIDTH * 3.0 / 4.0 * px_per_unit;

    assert!((groups[0][0].x - (5.0 + gap)).abs() < 1e-6);
    for w in groups.windows(2) {
        let between = w[1][0].x - w[0][1].right();
        assert!((between - gap).abs() < 1e-6, "gap {between} != {gap}");
        assert!((w[0][1].right() - w[0][0].x - group).abs() < 1e-6);
    }
    // Trailing gap closes the span exactly at the right edge of the inner box.
    assert!((groups[3][1].right() + gap - 775.0).abs() < 1e-6);
}

#[test]
fn bars_rise_from_the_axis_minimum() {
    let d = company_performance();
    let g = BarLayout::new().compute(&d, &ChartConfig::default(), default_plot());
    let bars = g.bars();
    let (_, _, sales_2004) = bars[0];
    assert!((sales_2004.bottom() - 575.0).abs() < EPS);
    assert!((sales_2004.y - 100.0).abs() < EPS);

    for cmd in &g {
        if let DrawCommand::Bar { series, fill, .. } = cmd {
            assert_eq!(*fill, d.series()[*series].colors().line);
        }
    }
}

#[test]
fn bars_never_leave_the_plot() {
    let g = BarLayout::new().compute(&company_performance(), &ChartConfig::default(), default_plot());
    for (_, _, r) in g.bars() {
        assert!(r.x >= 5.0 - EPS && r.right() <= 775.0 + EPS);
    }
}

#[test]
fn group_width_outside_unit_interval_is_rejected() {
    let mut layout = BarLayout::new();
    for bad in [0.0, -0.2, 1.01, f64::NAN] {
        assert!(!layout.set_group_width(bad));
        assert_eq!(layout.group_width(), GOLDEN_GROUP_WIDTH);
    }
    assert!(layout.set_group_width(1.0));
    assert_eq!(layout.group_width(), 1.0);
}

#[test]
fn full_group_width_leaves_no_gaps() {
    let mut layout = BarLayout::new();
    layout.set_group_width(1.0);
    let groups = bars_by_group(&layout, &company_performance());
    let flat: Vec<Rect> = groups.into_iter().flatten().collect();
    assert!((flat[0].x - 5.0).abs() < EPS);
    for w in flat.windows(2) {
        assert!((w[0].right() - w[1].x).abs() < 1e-6);
    }
    assert!((flat[7].right() - 775.0).abs() < 1e-6);
}

#[test]
fn single_category_still_gets_wide_bars() {
    let mut d = Dataset::new();
    d.set_absciss(Series::with_values([2020.0]));
    d.append(Series::with_values([5.0])).unwrap();
    d.append(Series::with_values([8.0])).unwrap();
    let g = BarLayout::new().compute(&d, &ChartConfig::default(), default_plot());
    let bars = g.bars();
    assert_eq!(bars.len(), 2);
    for (_, _, r) in bars {
        assert!(r.width > 1.0);
        assert!(r.x.is_finite() && r.y.is_finite());
    }
}

#[test]
fn empty_dataset_yields_no_bars() {
    let mut d = Dataset::new();
    d.set_absciss(Series::new());
    assert!(BarLayout::new().compute(&d, &ChartConfig::default(), default_plot()).is_empty());
}

#[test]
fn non_finite_values_leave_an_empty_slot() {
    let mut d = Dataset::new();
    d.set_absciss(Series::with_values([0.0, 1.0]));
    d.append(Series::with_values([5.0, f64::NAN])).unwrap();
    let g = BarLayout::new().compute(&d, &ChartConfig::default(), default_plot());
    let bars = g.bars();
    assert_eq!(bars.len(), 1);
    assert_eq!((bars[0].0, bars[0].1), (0, 0));
}
