//! Capability trait every sampled physical system implements.

/// A 1D system with a parameterised trial wavefunction.
///
/// The Metropolis sampler only needs [`log_probability_density`] and
/// [`local_energy`], so new systems can be added without touching it.
///
/// [`log_probability_density`]: PhysicalModel::log_probability_density
/// [`local_energy`]: PhysicalModel::local_energy
pub trait PhysicalModel {
    /// Stable identifier reported in results.
    fn name(&self) -> &'static str;

    /// ln ψ_T(x; α), up to an additive constant.
    fn log_trial_wavefunction(&self, x: f64, alpha: f64) -> f64;

    /// ln |ψ_T(x; α)|², the density sampled by Metropolis.
    fn log_probability_density(&self, x: f64, alpha: f64) -> f64 {
        2.0 * self.log_trial_wavefunction(x, alpha)
    }

    /// Potential energy V(x).
    fn potential(&self, x: f64) -> f64;

    /// E_L(x) = Hψ_T / ψ_T.
    fn local_energy(&self, x: f64, alpha: f64) -> f64;

    /// Exact ground-state energy, when known in closed form.
    fn exact_ground_state_energy(&self) -> Option<f64> {
        None
    }

    /// Short note for users choosing α.
    fn guidance(&self) -> Option<&'static str> {
        None
    }

    /// Local energy from a central-difference Laplacian of ψ_T.
    ///
    /// Ratios ψ_T(x ± h)/ψ_T(x) are formed in the log domain so wide
    /// wavefunctions do not underflow.
    fn numerical_local_energy(&self, x: f64, alpha: f64, h: f64) -> f64 {
        let log_psi = self.log_trial_wavefunction(x, alpha);
        let fwd = (self.log_trial_wavefunction(x + h, alpha) - log_psi).exp();
        let bwd = (self.log_trial_wavefunction(x - h, alpha) - log_psi).exp();
        let laplacian_over_psi = (fwd - 2.0 + bwd) / (h * h);
        -0.5 * laplacian_over_psi + self.potential(x)
    }
}
