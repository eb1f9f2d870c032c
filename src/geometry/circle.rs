use crate::math::Vec2;

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(pos: Vec2, radius: f64) -> Self {
        Self { pos, radius }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(Vec2::zeros(), 0.0)
    }
}
