//! Closed-form reference energies for the harmonic oscillator
//! (units ħ = m = ω = 1).

use crate::error::{Result, VmcError};
use crate::systems::HarmonicOscillator1D;

/// E₀ = 1/2.
pub fn harmonic_oscillator_exact_ground_state_energy() -> f64 {
    HarmonicOscillator1D::EXACT_GROUND_STATE_ENERGY
}

/// Variational energy of the Gaussian trial ψ_T(x; α) = exp(-α x² / 2):
///
/// E(α) = (α + 1/α) / 4
pub fn harmonic_oscillator_variational_energy(alpha: f64) -> Result<f64> {
    if alpha.is_nan() || alpha <= 0.0 {
        return Err(VmcError::Domain("alpha must be positive".to_string()));
    }
    Ok(0.25 * (alpha + 1.0 / alpha))
}
