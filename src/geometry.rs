use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Canvas coordinates: origin top-left, y grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

pub const INPUT_SIZE: Size = Size { w: 60.0, h: 30.0 };
pub const GATE_SIZE: Size = Size { w: 70.0, h: 40.0 };

/// How far left or right of a node's right edge a press still grabs the
/// output connector.
pub const CONNECTOR_REACH: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Rect { origin, size }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.w
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.h
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.w / 2.0,
            self.origin.y + self.size.h / 2.0,
        )
    }

    // Edges are exclusive on every side.
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.left() && p.x < self.right() && p.y > self.top() && p.y < self.bottom()
    }

    pub fn connector_contains(&self, p: Point) -> bool {
        p.x > self.right() - CONNECTOR_REACH
            && p.x < self.right() + CONNECTOR_REACH
            && p.y > self.top()
            && p.y < self.bottom()
    }

    /// Where wires leave a node: the middle of its right edge.
    pub fn output_anchor(&self) -> Point {
        Point::new(self.right(), self.origin.y + self.size.h / 2.0)
    }

    /// Where wires enter a node: the middle of its left edge.
    pub fn input_anchor(&self) -> Point {
        Point::new(self.left(), self.origin.y + self.size.h / 2.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn gate_at(x: f32, y: f32) -> Rect {
        Rect::new(Point::new(x, y), GATE_SIZE)
    }

    #[test]
    fn contains_excludes_edges() {
        let rect = gate_at(100.0, 100.0);
        assert!(rect.contains(Point::new(101.0, 101.0)));
        assert!(rect.contains(Point::new(169.0, 139.0)));
        assert!(!rect.contains(Point::new(100.0, 120.0)));
        assert!(!rect.contains(Point::new(170.0, 120.0)));
        assert!(!rect.contains(Point::new(130.0, 140.0)));
    }

    #[test]
    fn connector_overhangs_right_edge() {
        let rect = gate_at(100.0, 100.0);
        assert!(rect.connector_contains(Point::new(165.0, 120.0)));
        assert!(rect.connector_contains(Point::new(175.0, 120.0)));
        assert!(!rect.connector_contains(Point::new(155.0, 120.0)));
        assert!(!rect.connector_contains(Point::new(180.0, 120.0)));
        assert!(!rect.connector_contains(Point::new(175.0, 145.0)));
    }

    #[test]
    fn anchors() {
        let rect = Rect::new(Point::new(50.0, 50.0), INPUT_SIZE);
        assert_eq!(rect.output_anchor(), Point::new(110.0, 65.0));
        assert_eq!(rect.input_anchor(), Point::new(50.0, 65.0));
        assert_eq!(rect.center(), Point::new(80.0, 65.0));
    }
}
