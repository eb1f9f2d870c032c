/// An axis-aligned rectangle in screen coordinates.
///
/// `top` is the smaller y value. Containment is half-open, see
/// [`point_on_rect`](crate::math::polygon_2d::point_on_rect).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Creates a new rectangle from its edges.
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}
