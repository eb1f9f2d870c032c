//! Measures how far the lookup tables drift from `std` over a range of
//! table resolutions.
//!
//! ```text
//! cargo run --example table_error
//! cargo run --example table_error -- 500 1000
//! RUST_LOG=particle_math=debug cargo run --example table_error
//! ```

use particle_math::math::{PI, TWO_PI};
use particle_math::trig::{TableConfig, TrigEngine};
use particle_math::Result;

const SAMPLES: u32 = 200_000;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for particle_math.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("table_error=info".parse().unwrap_or_default())
        .add_directive("particle_math=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut resolutions: Vec<u32> = std::env::args()
        .skip(1)
        .filter_map(|arg| arg.parse().ok())
        .collect();
    if resolutions.is_empty() {
        resolutions.push(TableConfig::DEFAULT_SIN_RESOLUTION);
    }

    for resolution in resolutions {
        let config = TableConfig::new(resolution, TableConfig::DEFAULT_ASIN_RESOLUTION);
        let engine = TrigEngine::with_config(&config)?;
        report(&engine, resolution);
    }
    Ok(())
}

fn report(engine: &TrigEngine, resolution: u32) {
    let max = 4.0 * PI;
    let mut sin_err: f64 = 0.0;
    let mut asin_err: f64 = 0.0;
    for i in 0..=SAMPLES {
        let t = f64::from(i) / f64::from(SAMPLES);
        let r = -max + 2.0 * max * t;
        sin_err = sin_err.max((engine.sin(r) - r.sin()).abs());
        let ratio = -1.0 + 2.0 * t;
        asin_err = asin_err.max((engine.asin(ratio) - ratio.asin()).abs());
    }
    tracing::info!(
        resolution,
        sin_err,
        sin_bound = engine.sin_error_bound(max),
        asin_err,
        full_turn_steps = f64::from(resolution) * TWO_PI,
        "measured table error over [-4π, 4π]"
    );
}
