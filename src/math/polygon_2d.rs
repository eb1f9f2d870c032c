use super::vector_2d::outer_product;
use super::Vec2;
use crate::geometry::Rect;

/// Returns `true` if `point` is inside the box.
///
/// Left and top edges are inside, right and bottom edges are outside, so
/// boxes that tile the plane never both claim a point.
#[must_use]
pub fn point_on_box(point: Vec2, left: f64, top: f64, right: f64, bottom: f64) -> bool {
    point.x >= left && point.y >= top && point.x < right && point.y < bottom
}

/// [`point_on_box`] for a [`Rect`].
#[must_use]
pub fn point_on_rect(point: Vec2, rect: &Rect) -> bool {
    point_on_box(point, rect.left, rect.top, rect.right, rect.bottom)
}

/// Returns `true` if `point` is inside a convex polygon.
///
/// `vertices` must wind clockwise on screen (y down) and repeat the first
/// vertex at the end; edges run from each vertex to the next and the last
/// vertex is not joined back to the first. Points on an edge count as
/// inside.
///
/// The input is not validated: counter-clockwise, open or concave polygons
/// give meaningless results.
#[must_use]
pub fn point_on_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    vertices
        .windows(2)
        .all(|edge| outer_product(edge[1] - edge[0], point - edge[0]) >= 0.0)
}
