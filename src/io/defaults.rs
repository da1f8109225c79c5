//! Default simulation controls shared by the library, the CLI and any other
//! front end. Keep these in one place so transports never drift apart.

pub const DEFAULT_N_STEPS: usize = 20_000;
pub const DEFAULT_BURN_IN: usize = 2_000;
pub const DEFAULT_STEP_SIZE: f64 = 1.0;
pub const DEFAULT_ALPHA: f64 = 1.0;
pub const DEFAULT_INITIAL_POSITION: f64 = 0.0;
pub const DEFAULT_SEED: i64 = 12345;

/// Benchmark runs use longer chains so the tolerance checks are stable.
pub const DEFAULT_BENCHMARK_N_STEPS: usize = 30_000;
pub const DEFAULT_BENCHMARK_BURN_IN: usize = 3_000;
