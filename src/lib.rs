//! Table-driven trigonometry and 2D hit testing for real-time particle
//! simulations.
//!
//! ```
//! use particle_math::math::{distance_2d, Vec2};
//! use particle_math::geometry::Line;
//! use particle_math::trig::TrigEngine;
//!
//! let trig = TrigEngine::new();
//! let heading = trig.direction(3.0, 4.0);
//! let velocity = trig.rotation(Vec2::new(5.0, 0.0), heading);
//! assert!((velocity - Vec2::new(3.0, 4.0)).norm() < 0.05);
//!
//! let wall = Line::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
//! assert!((distance_2d::point_to_line_dist(Vec2::new(5.0, 5.0), &wall) - 5.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod trig;

pub use error::{ConfigError, ParticleMathError, Result};
