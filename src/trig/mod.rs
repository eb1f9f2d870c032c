//! Quantized trigonometry.
//!
//! [`TrigEngine`] owns the lookup tables and answers `sin`/`cos`/`asin`/`acos`
//! and everything derived from them. The helpers in this module need no
//! tables.

mod config;
mod engine;
mod table;

pub use config::TableConfig;
pub use engine::TrigEngine;

use crate::math::{Vec2, DEG2RAD, PI, TWO, TWO_PI};

/// Mirror axes for [`reflection`], as directions in radians.
///
/// Screen coordinates: y grows downward, so `LOWER_RIGHT` runs from the
/// top-left to the bottom-right.
pub struct ReflectionAxis;

impl ReflectionAxis {
    /// Floor and ceiling walls.
    pub const HORIZONTAL: f64 = 0.0;
    pub const LOWER_RIGHT: f64 = PI * 0.25;
    /// Left and right walls.
    pub const VERTICAL: f64 = PI * 0.5;
    pub const LOWER_LEFT: f64 = PI * 0.75;
}

/// Rotates `v` by the angle whose sine and cosine are given.
#[must_use]
pub fn rotation_with(v: Vec2, sin_val: f64, cos_val: f64) -> Vec2 {
    Vec2::new(
        v.x * cos_val - v.y * sin_val,
        v.x * sin_val + v.y * cos_val,
    )
}

/// Direction after bouncing off a mirror.
///
/// `incidence_rad` is the travel direction, `axis_rad` the direction of the
/// mirror axis. The result keeps the sign of `2 * axis_rad - incidence_rad`.
#[must_use]
pub fn reflection(incidence_rad: f64, axis_rad: f64) -> f64 {
    fmod(axis_rad * TWO - incidence_rad, TWO_PI)
}

/// Remainder of `num / div` with the quotient truncated toward zero.
///
/// The result has the sign of `num`, like C `fmod`.
#[must_use]
pub fn fmod(num: f64, div: f64) -> f64 {
    num - div * (num / div).trunc()
}

/// Converts a direction in degrees to radians in `[0, 2π)`.
///
/// Negative values wrap forward and multiples of 360 collapse to 0.
#[must_use]
pub fn to_radian(degree: f64) -> f64 {
    let degree = if degree < 0.0 {
        let wrapped = fmod(degree, 360.0) + 360.0;
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    } else if degree >= 360.0 {
        fmod(degree, 360.0)
    } else {
        degree
    };
    degree * DEG2RAD
}

/// Converts an angular span in degrees to radians, clamped to `[0, 2π]`.
#[must_use]
pub fn to_radian_range(degree_range: f64) -> f64 {
    degree_range.clamp(0.0, 360.0) * DEG2RAD
}
