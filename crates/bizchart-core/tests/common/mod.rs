// File: crates/bizchart-core/tests/common/mod.rs
// Purpose: Shared fixtures: the "Company Performance" dataset and a surface that records calls.

#![allow(dead_code)]

use bizchart_core::{Dataset, DrawingSurface, FontStyle, Point, Rect, Rgba, Series, TextMeasure};

/// Years 2004..2007 with "Sales" and "Expenses", ymin forced to 0.
pub fn company_performance() -> Dataset {
    let mut d = Dataset::new();
    d.set_title("Company Performance");
    d.set_absciss(Series::with_values([2004.0, 2005.0, 2006.0, 2007.0]).titled("Year"));
    d.append(Series::with_values([1000.0, 1170.0, 660.0, 1030.0]).titled("Sales")).unwrap();
    d.append(Series::with_values([400.0, 460.0, 1120.0, 540.0]).titled("Expenses")).unwrap();
    d.set_ymin(0.0);
    d
}

/// Plot rectangle of a default 800x600 canvas without a title.
pub fn default_plot() -> Rect {
    Rect::from_xywh(0.0, 0.0, 780.0, 580.0)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(Rgba),
    Polyline(Vec<Point>, Rgba, f64),
    Polygon(Vec<Point>, Rgba),
    Rect(Rect, Rgba),
    Circle(Point, f64, Rgba),
    Text(String, Point),
}

/// Fixed-metric surface: every glyph is 7x14 pixels.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl TextMeasure for Recorder {
    fn measure(&self, text: &str, _font: &FontStyle) -> (f64, f64) {
        (7.0 * text.chars().count() as f64, 14.0)
    }
}

impl DrawingSurface for Recorder {
    fn clear(&mut self, color: Rgba) { self.ops.push(Op::Clear(color)); }
    fn stroke_polyline(&mut self, points: &[Point], color: Rgba, width: f64) {
        self.ops.push(Op::Polyline(points.to_vec(), color, width));
    }
    fn fill_polygon(&mut self, points: &[Point], color: Rgba) { self.ops.push(Op::Polygon(points.to_vec(), color)); }
    fn fill_rect(&mut self, rect: Rect, color: Rgba) { self.ops.push(Op::Rect(rect, color)); }
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ops.push(Op::Circle(center, radius, color));
    }
    fn draw_text(&mut self, text: &str, top_left: Point, _font: &FontStyle) {
        self.ops.push(Op::Text(text.to_string(), top_left));
    }
}
