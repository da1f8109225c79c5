//! Random-walk Metropolis sampling of |ψ_T|² for 1D systems.
//!
//! Each step draws a uniform displacement in [-step_size, step_size), then a
//! uniform threshold u, and accepts when ln(u) < ln p(x') - ln p(x). The test
//! is done in the log domain so large density ratios never overflow.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use tracing::debug;

use crate::io::SimulationConfig;
use crate::systems::PhysicalModel;

/// Samples retained by one Metropolis chain after burn-in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetropolisTrace {
    pub positions: Vec<f64>,
    pub local_energies: Vec<f64>,
    pub accepted_steps: usize,
    pub attempted_steps: usize,
}

impl MetropolisTrace {
    /// Fraction of accepted proposals, 0 when nothing was attempted.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.attempted_steps == 0 {
            return 0.0;
        }
        self.accepted_steps as f64 / self.attempted_steps as f64
    }

    pub fn n_samples(&self) -> usize {
        self.local_energies.len()
    }
}

/// Run one chain, seeding `StdRng` from `config.seed` or from OS entropy.
///
/// Negative seeds are reinterpreted as their two's-complement `u64`, so every
/// integer maps to one fixed generator state.
///
/// The config is not validated here; callers go through
/// [`SimulationConfig::validate`] first. With `burn_in >= n_steps` the
/// returned sequences are simply empty.
pub fn sample_chain<M>(model: &M, config: &SimulationConfig) -> MetropolisTrace
where
    M: PhysicalModel + ?Sized,
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed as u64),
        None => StdRng::from_entropy(),
    };
    sample_chain_with_rng(model, config, &mut rng)
}

/// Run one chain drawing from a caller-supplied generator.
///
/// Each iteration consumes exactly two draws, proposal first, then the
/// acceptance threshold, so a given generator state fully determines the trace.
pub fn sample_chain_with_rng<M, R>(
    model: &M,
    config: &SimulationConfig,
    rng: &mut R,
) -> MetropolisTrace
where
    M: PhysicalModel + ?Sized,
    R: Rng + ?Sized,
{
    let alpha = config.alpha;
    let unit = Uniform::new(-1.0, 1.0);

    let mut x = config.initial_position;
    let mut log_prob_x = model.log_probability_density(x, alpha);

    let retained = config.retained_samples();
    let mut positions = Vec::with_capacity(retained);
    let mut local_energies = Vec::with_capacity(retained);
    let mut accepted = 0;
    let mut attempted = 0;

    debug!(
        system = model.name(),
        n_steps = config.n_steps,
        burn_in = config.burn_in,
        step_size = config.step_size,
        alpha,
        "starting metropolis chain"
    );

    for step in 0..config.n_steps {
        let proposal = x + config.step_size * unit.sample(rng);
        let log_prob_proposal = model.log_probability_density(proposal, alpha);

        let threshold: f64 = rng.gen();
        if threshold.ln() < log_prob_proposal - log_prob_x {
            x = proposal;
            log_prob_x = log_prob_proposal;
            accepted += 1;
        }
        attempted += 1;

        if step >= config.burn_in {
            positions.push(x);
            local_energies.push(model.local_energy(x, alpha));
        }
    }

    let trace = MetropolisTrace {
        positions,
        local_energies,
        accepted_steps: accepted,
        attempted_steps: attempted,
    };
    debug!(
        accepted = trace.accepted_steps,
        attempted = trace.attempted_steps,
        retained = trace.n_samples(),
        "metropolis chain finished"
    );
    trace
}
