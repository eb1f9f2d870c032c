use super::vector_2d::outer_product;
use super::Vec2;
use crate::geometry::Line;

/// Returns `true` if segment `a -> b` strictly crosses segment `c -> d`.
///
/// Each segment's endpoints must lie strictly on opposite sides of the other
/// segment's line. Collinear segments and segments that only touch at an
/// endpoint do not cross.
#[must_use]
pub fn line_on_line(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let ab = b - a;
    let cd = d - c;
    // Opposite signs multiply to a negative number, whichever side is which.
    (outer_product(ab, c - a) * outer_product(ab, d - a) < 0.0)
        && (outer_product(cd, a - c) * outer_product(cd, b - c) < 0.0)
}

/// [`line_on_line`] for two [`Line`] values.
#[must_use]
pub fn lines_cross(line_a: &Line, line_b: &Line) -> bool {
    line_on_line(line_a.start_pos, line_a.end_pos, line_b.start_pos, line_b.end_pos)
}

/// Returns `true` if a segment spanning `start_y..end_y` crosses the
/// horizontal line `y = horizontal_y`.
///
/// Endpoints exactly on the line do not count.
#[must_use]
pub fn line_on_horizontal(start_y: f64, end_y: f64, horizontal_y: f64) -> bool {
    (horizontal_y - start_y) * (horizontal_y - end_y) < 0.0
}

/// Returns `true` if a segment spanning `start_x..end_x` crosses the
/// vertical line `x = vertical_x`.
///
/// Endpoints exactly on the line do not count.
#[must_use]
pub fn line_on_vertical(start_x: f64, end_x: f64, vertical_x: f64) -> bool {
    (vertical_x - start_x) * (vertical_x - end_x) < 0.0
}
