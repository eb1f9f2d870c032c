use crate::math::vector_2d::length;
use crate::math::Vec2;

/// A line segment from `start_pos` to `end_pos`.
///
/// The default is a zero-length segment at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start_pos: Vec2,
    pub end_pos: Vec2,
}

impl Line {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start_pos: Vec2, end_pos: Vec2) -> Self {
        Self { start_pos, end_pos }
    }

    /// Returns `end_pos - start_pos`.
    #[must_use]
    pub fn vector(&self) -> Vec2 {
        self.end_pos - self.start_pos
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        length(self.vector())
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new(Vec2::zeros(), Vec2::zeros())
    }
}
