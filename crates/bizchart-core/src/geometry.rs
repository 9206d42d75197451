// File: crates/bizchart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for device-space math.

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl Add for Point {
    type Output = Point;
    fn add(self, o: Point) -> Point { Point::new(self.x + o.x, self.y + o.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, o: Point) -> Point { Point::new(self.x - o.x, self.y - o.y) }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Point::new(x, y) }
}

/// Axis-aligned rectangle; width and height are never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width: width.max(0.0), height: height.max(0.0) }
    }

    /// Rectangle spanning two corners given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::from_xywh(a.x.min(b.x), a.y.min(b.y), (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Same size, origin at (0, 0).
    pub fn local(&self) -> Self { Self::from_xywh(0.0, 0.0, self.width, self.height) }

    pub fn origin(&self) -> Point { Point::new(self.x, self.y) }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }

    pub fn translate(&self, by: Point) -> Self { Self { x: self.x + by.x, y: self.y + by.y, ..*self } }
}

