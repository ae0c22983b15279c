//! Axis-aligned rectangle geometry
//!
//! Every entity is a rectangle in screen space: origin at the top-left
//! corner, x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Midpoint of the top edge
    pub fn mid_top(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.top())
    }

    /// Midpoint of the bottom edge
    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.bottom())
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point containment (left/top inclusive, right/bottom exclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Clamp horizontally so the rectangle stays within `[0, width]`
    pub fn clamp_x(&mut self, width: f32) {
        let max_x = (width - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_edges() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.mid_top(), Vec2::new(25.0, 20.0));
        assert_eq!(r.mid_bottom(), Vec2::new(25.0, 60.0));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(400.0, 570.0), Vec2::new(50.0, 15.0));
        assert_eq!(r.left(), 375.0);
        assert_eq!(r.top(), 562.5);
        assert_eq!(r.center(), Vec2::new(400.0, 570.0));
    }

    #[test]
    fn test_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&rect(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&rect(2.0, 2.0, 1.0, 1.0)));
        assert!(!a.intersects(&rect(20.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&rect(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_clamp_x() {
        let mut r = rect(-4.0, 0.0, 50.0, 15.0);
        r.clamp_x(800.0);
        assert_eq!(r.left(), 0.0);

        let mut r = rect(760.0, 0.0, 50.0, 15.0);
        r.clamp_x(800.0);
        assert_eq!(r.right(), 800.0);
    }
}
