//! Circle overlap tests
//!
//! Every entity is drawn inside a bounding square; for collisions it is the
//! circle inscribed in that square. Radii use integer halves of the side so
//! odd sizes round down.

use glam::{IVec2, Vec2};

/// A circle derived from a bounding square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Circle inscribed in the square at `top_left` with side `size`
    pub fn from_square(top_left: IVec2, size: i32) -> Self {
        let half = size / 2;
        Self {
            center: (top_left + IVec2::splat(half)).as_vec2(),
            radius: half as f32,
        }
    }

    /// Strict overlap: touching circles do not collide
    #[inline]
    pub fn overlaps(&self, other: &Circle) -> bool {
        circles_overlap(self.center, self.radius, other.center, other.radius)
    }
}

/// Distance between centers is strictly less than the sum of radii
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Squares (top-left + side) overlap as inscribed circles
pub fn squares_overlap(a_pos: IVec2, a_size: i32, b_pos: IVec2, b_size: i32) -> bool {
    Circle::from_square(a_pos, a_size).overlaps(&Circle::from_square(b_pos, b_size))
}
