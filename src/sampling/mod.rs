//! Sampling module - Metropolis chain, estimators and the VMC solver.

mod metropolis;
pub mod stats;
mod vmc;

pub use metropolis::{sample_chain, sample_chain_with_rng, MetropolisTrace};
pub use stats::{mean, sample_variance, standard_error};
pub use vmc::{run, VmcSolver, VMC_METHOD};
