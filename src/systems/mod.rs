//! Systems module - physical models sampled by the Metropolis chain.

mod harmonic;
mod traits;

pub use harmonic::HarmonicOscillator1D;
pub use traits::PhysicalModel;
