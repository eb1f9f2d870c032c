use crate::math::{EPSILON, PI, TWO_PI};

/// Sine samples covering the half turn `[0, π)`.
///
/// Entry `i` holds `sin(i / resolution)`. The second half turn is rebuilt
/// from these samples by negation, so no more than a half turn is stored.
#[derive(Debug)]
pub(crate) struct SinTable {
    resolution: f64,
    table_max: usize,
    scaled_two_pi: u64,
    values: Box<[f64]>,
}

impl SinTable {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub(crate) fn build(resolution: u32) -> Self {
        let res = f64::from(resolution);
        let table_max = (PI * res) as usize;
        let scaled_two_pi = (TWO_PI * res) as u64;
        let values = (0..table_max)
            .map(|i| clamp_noise((i as f64 / res).sin()))
            .collect();
        Self {
            resolution: res,
            table_max,
            scaled_two_pi,
            values,
        }
    }

    /// Samples per radian.
    pub(crate) fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Number of stored samples, `floor(π * resolution)`.
    pub(crate) fn table_max(&self) -> usize {
        self.table_max
    }

    /// Quantized full turn, `floor(2π * resolution)`.
    pub(crate) fn scaled_two_pi(&self) -> u64 {
        self.scaled_two_pi
    }

    pub(crate) fn sample(&self, id: usize) -> f64 {
        self.values[id.min(self.table_max - 1)]
    }
}

/// Arcsine samples indexed by the squared ratio.
///
/// Entry `i` holds `asin(sqrt(i / (table_max - 1)))`. Indexing by `ratio²`
/// packs more samples near `±1`, where arcsine is steepest.
#[derive(Debug)]
pub(crate) struct AsinTable {
    table_max: usize,
    values: Box<[f64]>,
}

impl AsinTable {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn build(resolution: u32) -> Self {
        let table_max = resolution as usize;
        let max = (table_max - 1) as f64;
        let values = (0..table_max)
            .map(|i| clamp_noise((i as f64 / max).sqrt().asin()))
            .collect();
        Self { table_max, values }
    }

    /// Number of stored samples.
    pub(crate) fn table_max(&self) -> usize {
        self.table_max
    }

    pub(crate) fn sample(&self, id: usize) -> f64 {
        self.values[id.min(self.table_max - 1)]
    }
}

fn clamp_noise(n: f64) -> f64 {
    if n < EPSILON {
        0.0
    } else {
        n
    }
}
