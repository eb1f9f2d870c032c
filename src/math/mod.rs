pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod right_triangle_2d;
pub mod vector_2d;

/// 2D vector type, also used for positions.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Values below this are treated as zero.
pub const EPSILON: f64 = 0.00001;

/// π.
pub const PI: f64 = std::f64::consts::PI;

/// One full turn in radians.
pub const TWO_PI: f64 = PI * 2.0;

/// 90° in radians.
pub const RIGHT_ANGLE: f64 = PI / 2.0;

/// Multiply degrees by this to get radians.
pub const DEG2RAD: f64 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD2DEG: f64 = 180.0 / PI;

/// Hypotenuse of the 45° right triangle whose legs are both 1.
pub const ROOT_TWO: f64 = std::f64::consts::SQRT_2;

/// Added to a positive value before truncation to round to nearest.
pub const ROUND_FIX: f64 = 0.5;

pub const ONE: f64 = 1.0;
pub const TWO: f64 = 2.0;
pub const HALF: f64 = 0.5;
