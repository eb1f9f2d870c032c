use thiserror::Error;

/// Top-level error type for the particle math core.
///
/// Every trigonometric and geometric query is total; only building a
/// [`TrigEngine`](crate::trig::TrigEngine) from a custom configuration can fail.
#[derive(Debug, Error)]
pub enum ParticleMathError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to lookup table configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{table} resolution {value} is out of range [{min}, {max}]")]
    ResolutionOutOfRange {
        table: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Convenience type alias for results using [`ParticleMathError`].
pub type Result<T> = std::result::Result<T, ParticleMathError>;
