//! Shape values shared between the core and its callers.
//!
//! Coordinates are screen coordinates: x grows to the right, y downward.

mod circle;
mod line;
mod rect;

pub use circle::Circle;
pub use line::Line;
pub use rect::Rect;
