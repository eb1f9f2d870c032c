//! Stateless vector helpers. None of these touch the lookup tables.

use super::{Vec2, EPSILON, ONE};

/// Returns the length of `v`.
#[must_use]
pub fn length(v: Vec2) -> f64 {
    length_pow(v).sqrt()
}

/// Returns the squared length of `v` (no square root).
#[must_use]
pub fn length_pow(v: Vec2) -> f64 {
    v.x * v.x + v.y * v.y
}

/// Returns the distance between two points.
#[must_use]
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    distance_pow(a, b).sqrt()
}

/// Returns the squared distance between two points (no square root).
#[must_use]
pub fn distance_pow(a: Vec2, b: Vec2) -> f64 {
    length_pow(a - b)
}

/// Returns `v` scaled to unit length.
///
/// Vectors shorter than [`EPSILON`] are returned unchanged.
#[must_use]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = length(v);
    if len < EPSILON {
        return v;
    }
    v * inverse_number(len)
}

/// Dot product of `a` and `b`.
#[must_use]
pub fn inner_product(a: Vec2, b: Vec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Dot product of `a` and the screen x-axis `(1, 0)`.
#[must_use]
pub fn inner_product_x(a: Vec2) -> f64 {
    a.x
}

/// 2D cross product of `a` and `b`.
///
/// Positive when `b` lies counter-clockwise from `a` in a y-up frame.
#[must_use]
pub fn outer_product(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - b.x * a.y
}

/// 2D cross product of `a` and the screen x-axis `(1, 0)`.
#[must_use]
pub fn outer_product_x(a: Vec2) -> f64 {
    -a.y
}

/// Returns `1 / num`, turning a divisor into a multiplier.
#[must_use]
pub fn inverse_number(num: f64) -> f64 {
    ONE / num
}
