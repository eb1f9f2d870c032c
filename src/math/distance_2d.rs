use super::right_triangle_2d::base_end_pos;
use super::vector_2d::{self, inner_product, outer_product};
use super::{Vec2, EPSILON};
use crate::geometry::{Circle, Line};

/// Returns the minimum distance from `point` to the segment `line`.
///
/// If the perpendicular from `point` lands on the segment, this is the
/// perpendicular length; otherwise it is the distance to the nearer
/// endpoint. Segments shorter than [`EPSILON`] measure to `start_pos`.
#[must_use]
pub fn point_to_line_dist(point: Vec2, line: &Line) -> f64 {
    let line_v = line.vector();
    let line_len = vector_2d::length(line_v);
    if line_len < EPSILON {
        return vector_2d::distance(point, line.start_pos);
    }

    // Obtuse at the start: the start is nearest.
    if inner_product(point - line.start_pos, line_v) < 0.0 {
        return vector_2d::distance(point, line.start_pos);
    }
    // Acute or right at the end: the end is nearest.
    if inner_product(point - line.end_pos, line_v) >= 0.0 {
        return vector_2d::distance(point, line.end_pos);
    }

    outer_product(point - line.start_pos, line_v).abs() / line_len
}

/// Returns the foot of the perpendicular from `point` onto the infinite
/// line through `line`.
///
/// The result is not clamped to the segment.
#[must_use]
pub fn intersect_pos(point: Vec2, line: &Line) -> Vec2 {
    base_end_pos(point, line.start_pos, line.end_pos)
}

/// Returns `true` if `circle` overlaps the segment `line`.
///
/// Touching exactly at the rim does not count.
#[must_use]
pub fn circle_on_line(circle: &Circle, line: &Line) -> bool {
    point_to_line_dist(circle.pos, line) < circle.radius
}
