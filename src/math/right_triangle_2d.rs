//! Right-triangle decomposition.
//!
//! The triangle has vertices `a` (top), `b` and `c` listed counter-clockwise,
//! with the right angle at `c` and the hypotenuse `ab`. Callers pass `a` and
//! `b` plus either any point `c` along the base line (its distance from `b`
//! does not matter) or the angle at `b` between hypotenuse and base.
//!
//! When the angle at `b` is obtuse no such right triangle exists; the
//! functions then build the mirrored triangle on the base line, which shows
//! up as a negative base length.
//!
//! The angle-driven forms need a [`TrigEngine`]; angles are expected in
//! `(-π/2, π/2)`. Larger magnitudes flip the triangle across the hypotenuse.

use super::vector_2d::{inner_product, length, outer_product};
use super::{Vec2, EPSILON};
use crate::trig::TrigEngine;

/// Hypotenuse length from the two legs.
#[must_use]
pub fn hypot_len(base_len: f64, height: f64) -> f64 {
    (base_len * base_len + height * height).sqrt()
}

/// Signed base length: the shadow of `ab` projected onto the line `bc`.
///
/// Negative when the foot of the perpendicular from `a` falls behind `b`.
/// Returns 0 when `b` and `c` coincide.
#[must_use]
pub fn base_len(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    let ab = a - b;
    let bc = c - b;
    let bc_len = length(bc);
    if bc_len < EPSILON {
        return 0.0;
    }
    inner_product(ab, bc) / bc_len
}

/// [`base_len`] with the base given as an angle from the hypotenuse.
#[must_use]
pub fn base_len_by_angle(trig: &TrigEngine, a: Vec2, b: Vec2, b_angle: f64) -> f64 {
    let ab = a - b;
    inner_product(ab, base_normal(trig, ab, b_angle))
}

/// Height: distance from `a` to the line `bc`. Never negative.
///
/// Returns 0 when `b` and `c` coincide.
#[must_use]
pub fn height(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    let ab = a - b;
    let bc = c - b;
    let bc_len = length(bc);
    if bc_len < EPSILON {
        return 0.0;
    }
    // The sign only says which side of bc the point is on.
    (outer_product(ab, bc) / bc_len).abs()
}

/// [`height`] with the base given as an angle from the hypotenuse.
#[must_use]
pub fn height_by_angle(trig: &TrigEngine, a: Vec2, b: Vec2, b_angle: f64) -> f64 {
    let ab = a - b;
    outer_product(ab, base_normal(trig, ab, b_angle)).abs()
}

/// End of the base, i.e. the right-angle vertex `c`: the foot of the
/// perpendicular from `a` onto the line through `b` and `c`.
///
/// Returns `b` when `b` and `c` coincide.
#[must_use]
pub fn base_end_pos(a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
    let ab = a - b;
    let bc = c - b;
    let bc_len = length(bc);
    if bc_len < EPSILON {
        return b;
    }
    b + bc * inner_product(ab, bc) / (bc_len * bc_len)
}

/// [`base_end_pos`] with the base given as an angle from the hypotenuse.
#[must_use]
pub fn base_end_pos_by_angle(trig: &TrigEngine, a: Vec2, b: Vec2, b_angle: f64) -> Vec2 {
    let ab = a - b;
    let bc_normal = base_normal(trig, ab, b_angle);
    b + bc_normal * inner_product(ab, bc_normal)
}

/// Signed angle at `b` between the hypotenuse and the base, in `(-π, π]`.
///
/// Positive for counter-clockwise `a, b, c`, negative for clockwise.
#[must_use]
pub fn angle_b(trig: &TrigEngine, a: Vec2, b: Vec2, c: Vec2) -> f64 {
    trig.angle(a - b, c - b)
}

/// Unit vector along the base, `b_angle` away from the hypotenuse.
fn base_normal(trig: &TrigEngine, ab: Vec2, b_angle: f64) -> Vec2 {
    let bc_dir = trig.direction_of(ab) + b_angle;
    Vec2::new(trig.cos(bc_dir), trig.sin(bc_dir))
}
