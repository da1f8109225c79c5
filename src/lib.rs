//! Rust VMC - Variational Monte Carlo for the 1D quantum harmonic oscillator.
//!
//! A single random-walk Metropolis chain samples |ψ_T|² for the Gaussian
//! trial wavefunction ψ_T(x; α) = exp(-α x² / 2), the local energy is averaged
//! over the retained samples, and a small benchmark suite checks the estimates
//! against closed-form energies.
//!
//! ```no_run
//! use rust_vmc::{run, SimulationConfig};
//!
//! let config = SimulationConfig::default().with_alpha(0.9).with_seed(Some(7));
//! let result = run(&config)?;
//! println!("{result}");
//! # Ok::<(), rust_vmc::VmcError>(())
//! ```

pub mod benchmarks;
pub mod catalog;
pub mod error;
pub mod io;
pub mod results;
pub mod sampling;
pub mod systems;


// Re-export commonly used types at crate root
pub use benchmarks::{
    run_benchmarks, BenchmarkCase, BenchmarkCaseResult, BenchmarkRunner, BenchmarkSuiteResult,
};
pub use error::{Result, VmcError};
pub use io::{build_config, config_from_json, read_config, SimulationConfig};
pub use results::SimulationResult;
pub use sampling::{run, sample_chain, MetropolisTrace, VmcSolver};
pub use systems::{HarmonicOscillator1D, PhysicalModel};
