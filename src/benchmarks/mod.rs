//! Benchmarks - reference energies and the suite that checks VMC against them.

mod harmonic;
pub mod references;

pub use harmonic::{
    default_cases, run_benchmarks, BenchmarkCase, BenchmarkCaseResult, BenchmarkRunner,
    BenchmarkSuiteResult, SUITE_NAME,
};
pub use references::{
    harmonic_oscillator_exact_ground_state_energy, harmonic_oscillator_variational_energy,
};
