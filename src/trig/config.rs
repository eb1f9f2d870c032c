use crate::error::ConfigError;

/// Sizing of the trigonometric lookup tables.
///
/// The sine table holds `floor(π * sin_resolution)` samples, one every
/// `1 / sin_resolution` radians. The arcsine table holds `asin_resolution`
/// samples over the squared ratio `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Sine samples per radian.
    pub sin_resolution: u32,
    /// Number of arcsine samples.
    pub asin_resolution: u32,
}

impl TableConfig {
    pub const DEFAULT_SIN_RESOLUTION: u32 = 2000;
    pub const DEFAULT_ASIN_RESOLUTION: u32 = 3000;

    pub const SIN_RESOLUTION_RANGE: (u32, u32) = (1, 1_000_000);
    pub const ASIN_RESOLUTION_RANGE: (u32, u32) = (2, 1_000_000);

    /// Creates a configuration with explicit resolutions.
    #[must_use]
    pub fn new(sin_resolution: u32, asin_resolution: u32) -> Self {
        Self {
            sin_resolution,
            asin_resolution,
        }
    }

    /// Checks that both resolutions produce usable tables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ResolutionOutOfRange`] for the first resolution
    /// outside its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("sine", self.sin_resolution, Self::SIN_RESOLUTION_RANGE)?;
        check_range("arcsine", self.asin_resolution, Self::ASIN_RESOLUTION_RANGE)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIN_RESOLUTION, Self::DEFAULT_ASIN_RESOLUTION)
    }
}

fn check_range(table: &'static str, value: u32, (min, max): (u32, u32)) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ResolutionOutOfRange {
            table,
            value,
            min,
            max,
        })
    }
}
