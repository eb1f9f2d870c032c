use std::sync::OnceLock;

use super::config::TableConfig;
use super::table::{AsinTable, SinTable};
use super::rotation_with;
use crate::error::Result;
use crate::math::{Vec2, EPSILON, PI, RIGHT_ANGLE, ROUND_FIX, TWO_PI};

static SHARED: OnceLock<TrigEngine> = OnceLock::new();

/// Table-driven trigonometry.
///
/// Owns the sine and arcsine lookup tables. Tables are built once at
/// construction and never change afterwards, so a `&TrigEngine` can be
/// shared freely across threads.
///
/// Results are quantized: `sin`/`cos` are accurate to within
/// [`TrigEngine::sin_error_bound`], and `asin`/`acos` saturate instead of
/// returning NaN outside `[-1, 1]`.
#[derive(Debug)]
pub struct TrigEngine {
    config: TableConfig,
    sin: SinTable,
    asin: AsinTable,
}

impl TrigEngine {
    /// Builds the tables with the default [`TableConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::build(TableConfig::default())
    }

    /// Builds the tables with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns a config error if either resolution is out of range.
    pub fn with_config(config: &TableConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejected trig table configuration");
            return Err(err.into());
        }
        Ok(Self::build(*config))
    }

    /// Process-wide engine with the default configuration.
    ///
    /// Built on first call; later calls only read.
    #[must_use]
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(|| {
            tracing::debug!("initialising shared trig engine");
            Self::new()
        })
    }

    fn build(config: TableConfig) -> Self {
        let sin = SinTable::build(config.sin_resolution);
        let asin = AsinTable::build(config.asin_resolution);
        tracing::debug!(
            sin_resolution = config.sin_resolution,
            sin_entries = sin.table_max(),
            asin_entries = asin.table_max(),
            "built trig lookup tables"
        );
        Self { config, sin, asin }
    }

    /// The configuration the tables were built from.
    #[must_use]
    pub fn config(&self) -> TableConfig {
        self.config
    }

    /// Table-driven sine.
    ///
    /// Whole turns are dropped: `sin(2π + x)` looks up the same entry as
    /// `sin(x)` up to the quantization drift of one turn.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn sin(&self, radian: f64) -> f64 {
        // Truncate toward zero so that negative angles mirror positive ones.
        let scaled = (radian * self.sin.resolution()) as i64;
        let id = scaled.unsigned_abs() % self.sin.scaled_two_pi();
        let table_max = self.sin.table_max() as u64;
        let negative = radian < 0.0;
        if id < table_max {
            let v = self.sin.sample(id as usize);
            if negative {
                -v
            } else {
                v
            }
        } else {
            let v = self.sin.sample((id - table_max) as usize);
            if negative {
                v
            } else {
                -v
            }
        }
    }

    /// Table-driven cosine, `sin(radian + π/2)`.
    #[must_use]
    pub fn cos(&self, radian: f64) -> f64 {
        self.sin(radian + RIGHT_ANGLE)
    }

    /// Table-driven arcsine.
    ///
    /// Ratios beyond `±1` return the value for `±1`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn asin(&self, ratio: f64) -> f64 {
        let table_max = self.asin.table_max();
        // Round to nearest by truncating after adding one half. `ratio²` is
        // never negative, and the saturating cast maps NaN to 0.
        let id = (ratio * ratio * table_max as f64 + ROUND_FIX) as usize;
        let v = self.asin.sample(id.min(table_max - 1));
        if ratio < 0.0 {
            -v
        } else {
            v
        }
    }

    /// Table-driven arccosine, `π/2 - asin(ratio)`.
    ///
    /// Ratios beyond `±1` return the value for `±1`.
    #[must_use]
    pub fn acos(&self, ratio: f64) -> f64 {
        RIGHT_ANGLE - self.asin(ratio)
    }

    /// Direction of the vector `(vx, vy)` in `(-π, π]`, a table-driven
    /// `atan2(vy, vx)`.
    ///
    /// Returns 0 for vectors shorter than [`EPSILON`].
    #[must_use]
    pub fn direction(&self, vx: f64, vy: f64) -> f64 {
        let len = (vx * vx + vy * vy).sqrt();
        if len < EPSILON {
            return 0.0;
        }
        let rad = self.acos(vx / len);
        if vy < 0.0 && rad < PI {
            -rad
        } else {
            rad
        }
    }

    /// [`direction`](Self::direction) of `v`.
    #[must_use]
    pub fn direction_of(&self, v: Vec2) -> f64 {
        self.direction(v.x, v.y)
    }

    /// Signed shortest turn from the direction of `a` to the direction of
    /// `b`, in `(-π, π]`.
    ///
    /// For the unwrapped difference use `direction_of(b) - direction_of(a)`;
    /// for `[0, 2π)` wrap that with [`fmod`](super::fmod).
    #[must_use]
    pub fn angle(&self, a: Vec2, b: Vec2) -> f64 {
        let rad = self.direction_of(b) - self.direction_of(a);
        if rad > PI {
            rad - TWO_PI
        } else if rad <= -PI {
            rad + TWO_PI
        } else {
            rad
        }
    }

    /// Rotates `v` by `radian` using the table-driven `sin`/`cos`.
    #[must_use]
    pub fn rotation(&self, v: Vec2, radian: f64) -> Vec2 {
        rotation_with(v, self.sin(radian), self.cos(radian))
    }

    /// Worst-case absolute error of [`sin`](Self::sin) and
    /// [`cos`](Self::cos) for inputs in `[-max_abs_radian, max_abs_radian]`.
    ///
    /// Three terms add up: truncating to a table step, the drift of each
    /// dropped whole turn (`2πR - floor(2πR)` steps), and the offset of the
    /// mirrored half turn (`πR - floor(πR)` steps). Values below [`EPSILON`]
    /// were stored as zero, which adds `EPSILON`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sin_error_bound(&self, max_abs_radian: f64) -> f64 {
        let res = self.sin.resolution();
        let scaled_two_pi = self.sin.scaled_two_pi() as f64;
        // Allow for the quarter-turn shift applied by `cos`.
        let reach = (max_abs_radian.abs() + RIGHT_ANGLE) * res;
        let turns = (reach / scaled_two_pi).floor();
        let turn_drift = TWO_PI * res - scaled_two_pi;
        let half_turn_drift = PI * res - self.sin.table_max() as f64;
        (1.0 + turns * turn_drift + half_turn_drift) / res + EPSILON
    }
}

impl Default for TrigEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::{ConfigError, ParticleMathError};

    #[allow(clippy::cast_precision_loss)]
    fn samples(from: f64, to: f64, steps: usize) -> impl Iterator<Item = f64> {
        (0..=steps).map(move |i| from + (to - from) * (i as f64) / (steps as f64))
    }

    #[test]
    fn sin_tracks_std_within_bound() {
        let engine = TrigEngine::new();
        let max = 4.0 * PI;
        let bound = engine.sin_error_bound(max);
        assert!(bound < 1.1e-3, "bound={bound}");
        for r in samples(-max, max, 100_003) {
            let err = (engine.sin(r) - r.sin()).abs();
            assert!(err <= bound, "r={r} err={err} bound={bound}");
        }
    }

    #[test]
    fn cos_tracks_std_within_bound() {
        let engine = TrigEngine::new();
        let max = 4.0 * PI;
        let bound = engine.sin_error_bound(max);
        for r in samples(-max, max, 50_001) {
            let err = (engine.cos(r) - r.cos()).abs();
            assert!(err <= bound, "r={r} err={err} bound={bound}");
        }
    }

    #[test]
    fn cos_is_phase_shifted_sin() {
        let engine = TrigEngine::new();
        for r in samples(-10.0, 10.0, 997) {
            assert_eq!(engine.cos(r).to_bits(), engine.sin(r + RIGHT_ANGLE).to_bits());
        }
    }

    #[test]
    fn sin_is_odd() {
        let engine = TrigEngine::new();
        for r in samples(0.0, 7.0, 499) {
            assert_abs_diff_eq!(engine.sin(-r), -engine.sin(r));
        }
    }

    #[test]
    fn sin_quadrants() {
        let engine = TrigEngine::new();
        assert_abs_diff_eq!(engine.sin(0.0), 0.0);
        assert_abs_diff_eq!(engine.sin(RIGHT_ANGLE), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(engine.sin(PI + RIGHT_ANGLE), -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(engine.sin(-RIGHT_ANGLE), -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(engine.cos(0.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(engine.cos(PI), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn sin_survives_non_finite_input() {
        let engine = TrigEngine::new();
        assert!(engine.sin(f64::NAN).is_finite());
        assert!(engine.sin(f64::INFINITY).is_finite());
        assert!(engine.sin(-1e300).is_finite());
    }

    #[test]
    fn asin_is_monotonic() {
        let engine = TrigEngine::new();
        let mut prev = engine.asin(-1.0);
        for ratio in samples(-1.0, 1.0, 20_000) {
            let v = engine.asin(ratio);
            assert!(v >= prev, "ratio={ratio} v={v} prev={prev}");
            prev = v;
        }
    }

    #[test]
    fn asin_and_acos_sum_to_right_angle() {
        let engine = TrigEngine::new();
        for ratio in samples(-1.0, 1.0, 2001) {
            assert_abs_diff_eq!(
                engine.asin(ratio) + engine.acos(ratio),
                RIGHT_ANGLE,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn asin_close_to_std_between_zero_and_poles() {
        let engine = TrigEngine::new();
        for ratio in samples(0.1, 0.9, 801).chain(samples(-0.9, -0.1, 801)) {
            assert_abs_diff_eq!(engine.asin(ratio), ratio.asin(), epsilon = 2e-3);
        }
    }

    #[test]
    fn asin_is_coarse_near_zero() {
        // Squared indexing leaves only one sample below |ratio| = 0.0129.
        let engine = TrigEngine::new();
        assert_abs_diff_eq!(engine.asin(0.01), 0.0);
        for ratio in samples(-0.1, 0.1, 2001) {
            assert_abs_diff_eq!(engine.asin(ratio), ratio.asin(), epsilon = 1.5e-2);
        }
    }

    #[test]
    fn asin_saturates_out_of_domain() {
        let engine = TrigEngine::new();
        for ratio in [1.000_001, 1.5, 42.0, f64::INFINITY] {
            assert_eq!(engine.asin(ratio).to_bits(), engine.asin(1.0).to_bits());
            assert_eq!(engine.asin(-ratio).to_bits(), engine.asin(-1.0).to_bits());
        }
        assert_abs_diff_eq!(engine.asin(1.0), RIGHT_ANGLE, epsilon = 1e-12);
        assert_abs_diff_eq!(engine.acos(-3.0), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(engine.acos(3.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn direction_matches_atan2() {
        let engine = TrigEngine::new();
        for deg in (0..360).step_by(7) {
            let rad = f64::from(deg).to_radians();
            let (vx, vy) = (3.0 * rad.cos(), 3.0 * rad.sin());
            let dir = engine.direction(vx, vy);
            let diff = (dir - vy.atan2(vx)).abs();
            // Near ±π the two may land on opposite sides of the seam.
            let diff = diff.min(TWO_PI - diff);
            assert!(diff < 3e-2, "deg={deg} dir={dir}");
        }
    }

    #[test]
    fn direction_of_zero_vector_is_zero() {
        let engine = TrigEngine::new();
        assert_abs_diff_eq!(engine.direction(0.0, 0.0), 0.0);
        assert_abs_diff_eq!(engine.direction_of(Vec2::new(1e-7, -1e-7)), 0.0);
    }

    #[test]
    fn direction_axes() {
        let engine = TrigEngine::new();
        assert_abs_diff_eq!(engine.direction(1.0, 0.0), 0.0);
        assert_abs_diff_eq!(engine.direction(0.0, 2.0), RIGHT_ANGLE, epsilon = 1e-12);
        assert_abs_diff_eq!(engine.direction(0.0, -2.0), -RIGHT_ANGLE, epsilon = 1e-12);
        assert_abs_diff_eq!(engine.direction(-1.0, 0.0), PI, epsilon = 1e-12);
        // Just below the negative x-axis the table saturates; stay on +π.
        assert!(engine.direction(-1.0, -1e-9) > 0.0);
    }

    #[test]
    fn angle_stays_in_half_open_range() {
        let engine = TrigEngine::new();
        let vectors: Vec<Vec2> = (0..72)
            .map(|i| {
                let rad = f64::from(i) * 5.0_f64.to_radians();
                Vec2::new(rad.cos(), rad.sin())
            })
            .chain([Vec2::new(-1.0, 0.0), Vec2::new(-1.0, -1e-9), Vec2::zeros()])
            .collect();
        for &a in &vectors {
            for &b in &vectors {
                let rad = engine.angle(a, b);
                assert!(rad > -PI && rad <= PI, "a={a:?} b={b:?} rad={rad}");
            }
        }
    }

    #[test]
    fn angle_to_self_is_zero() {
        let engine = TrigEngine::new();
        for v in [Vec2::new(1.0, 2.0), Vec2::new(-3.0, -0.5), Vec2::zeros()] {
            assert_abs_diff_eq!(engine.angle(v, v), 0.0);
        }
    }

    #[test]
    fn angle_takes_shorter_way_round() {
        let engine = TrigEngine::new();
        // 170° to -170° is +20°, not -340°.
        let a = Vec2::new(170.0_f64.to_radians().cos(), 170.0_f64.to_radians().sin());
        let b = Vec2::new((-170.0_f64).to_radians().cos(), (-170.0_f64).to_radians().sin());
        assert_abs_diff_eq!(engine.angle(a, b), 20.0_f64.to_radians(), epsilon = 2e-2);
        assert_abs_diff_eq!(engine.angle(b, a), -(20.0_f64.to_radians()), epsilon = 2e-2);
        // The opposite direction wraps to +π, never -π.
        assert_abs_diff_eq!(
            engine.angle(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)),
            PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotation_by_zero_is_identity() {
        let engine = TrigEngine::new();
        let v = Vec2::new(3.0, -4.0);
        assert_relative_eq!(engine.rotation(v, 0.0), v, epsilon = 1e-6);
    }

    #[test]
    fn rotation_round_trip() {
        let engine = TrigEngine::new();
        let v = Vec2::new(3.0, -4.0);
        let tol = 8.0 * engine.sin_error_bound(TWO_PI) * v.norm();
        for t in samples(-TWO_PI, TWO_PI, 97) {
            let back = engine.rotation(engine.rotation(v, t), -t);
            assert_relative_eq!(back, v, epsilon = tol);
        }
    }

    #[test]
    fn rotation_quarter_turn() {
        let engine = TrigEngine::new();
        let r = engine.rotation(Vec2::new(1.0, 0.0), RIGHT_ANGLE);
        assert_relative_eq!(r, Vec2::new(0.0, 1.0), epsilon = 1e-3);
    }

    #[test]
    fn custom_resolution_is_coarser() {
        let coarse = TrigEngine::with_config(&TableConfig::new(100, 200)).unwrap();
        assert_eq!(coarse.config(), TableConfig::new(100, 200));
        let bound = coarse.sin_error_bound(TWO_PI);
        assert!(bound > TrigEngine::new().sin_error_bound(TWO_PI));
        for r in samples(-TWO_PI, TWO_PI, 5001) {
            assert!((coarse.sin(r) - r.sin()).abs() <= bound, "r={r}");
        }
    }

    #[test]
    fn odd_resolution_keeps_indices_in_bounds() {
        // floor(2πR) = 2·floor(πR) + 1 here, so the last index of a turn
        // falls one past the mirrored half.
        let engine = TrigEngine::with_config(&TableConfig::new(5, 2)).unwrap();
        for r in samples(-20.0, 20.0, 4001) {
            assert!(engine.sin(r).abs() <= 1.0);
            assert!(engine.asin(r).abs() <= RIGHT_ANGLE);
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = TrigEngine::with_config(&TableConfig::new(0, 3000)).unwrap_err();
        assert!(matches!(
            err,
            ParticleMathError::Config(ConfigError::ResolutionOutOfRange { table: "sine", .. })
        ));
    }

    #[test]
    fn shared_instance_is_built_once() {
        let a = TrigEngine::shared();
        let b = TrigEngine::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.config(), TableConfig::default());
        assert_abs_diff_eq!(a.sin(1.0), TrigEngine::new().sin(1.0));
    }

    #[test]
    fn shared_instance_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| TrigEngine::shared() as *const TrigEngine as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
