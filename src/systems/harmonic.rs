//! 1D quantum harmonic oscillator in units ħ = m = ω = 1.
//!
//! Trial wavefunction ψ_T(x; α) = exp(-α x² / 2). At α = 1 it is the exact
//! ground state, the local energy is 0.5 everywhere and every VMC estimate
//! has zero variance.

use super::traits::PhysicalModel;

#[derive(Copy, Clone, Debug, Default)]
pub struct HarmonicOscillator1D;

impl HarmonicOscillator1D {
    pub const NAME: &'static str = "harmonic_oscillator_1d";
    pub const EXACT_GROUND_STATE_ENERGY: f64 = 0.5;
}

impl PhysicalModel for HarmonicOscillator1D {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn log_trial_wavefunction(&self, x: f64, alpha: f64) -> f64 {
        -0.5 * alpha * x * x
    }

    fn log_probability_density(&self, x: f64, alpha: f64) -> f64 {
        2.0 * self.log_trial_wavefunction(x, alpha)
    }

    fn potential(&self, x: f64) -> f64 {
        0.5 * x * x
    }

    /// E_L(x) = α/2 + (1 - α²) x² / 2
    fn local_energy(&self, x: f64, alpha: f64) -> f64 {
        0.5 * alpha + 0.5 * (1.0 - alpha * alpha) * x * x
    }

    fn exact_ground_state_energy(&self) -> Option<f64> {
        Some(Self::EXACT_GROUND_STATE_ENERGY)
    }

    fn guidance(&self) -> Option<&'static str> {
        Some("Use alpha near 1.0 for best agreement in this simple trial family.")
    }
}
