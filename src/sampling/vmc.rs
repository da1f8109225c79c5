//! Variational Monte Carlo solver.
//!
//! Ties a [`PhysicalModel`], the Metropolis chain and the estimators together
//! into a single [`SimulationResult`].

use std::collections::BTreeMap;

use serde_json::{json, Value};
use tracing::{info, instrument};

use super::metropolis::sample_chain;
use super::stats::{mean, standard_error};
use crate::error::{Result, VmcError};
use crate::io::SimulationConfig;
use crate::results::SimulationResult;
use crate::systems::{HarmonicOscillator1D, PhysicalModel};

/// Method label attached to every VMC result.
pub const VMC_METHOD: &str = "VMC (Metropolis)";

/// VMC driver for a single physical model.
#[derive(Clone, Debug, Default)]
pub struct VmcSolver<M: PhysicalModel> {
    model: M,
}

impl<M: PhysicalModel> VmcSolver<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Validate `config`, sample one chain and reduce it to a result.
    #[instrument(
        skip_all,
        fields(system = self.model.name(), alpha = config.alpha, seed = ?config.seed)
    )]
    pub fn run(&self, config: &SimulationConfig) -> Result<SimulationResult> {
        config.validate()?;

        let trace = sample_chain(&self.model, config);
        if trace.local_energies.is_empty() {
            return Err(VmcError::NoSamples);
        }

        let mean_energy = mean(&trace.local_energies)?;
        let error = standard_error(&trace.local_energies)?;
        let acceptance_ratio = trace.acceptance_ratio();

        info!(
            n_samples = trace.n_samples(),
            mean_energy,
            standard_error = error,
            acceptance_ratio,
            "vmc run complete"
        );

        Ok(SimulationResult::new(
            VMC_METHOD,
            self.model.name(),
            trace.n_samples(),
            mean_energy,
            error,
            acceptance_ratio,
        )
        .with_parameters(config_parameters(config))
        .with_metadata(self.metadata()))
    }

    fn metadata(&self) -> BTreeMap<String, Value> {
        let mut metadata = BTreeMap::new();
        if let Some(exact) = self.model.exact_ground_state_energy() {
            metadata.insert("exact_ground_state_energy".to_string(), json!(exact));
        }
        if let Some(notes) = self.model.guidance() {
            metadata.insert("notes".to_string(), json!(notes));
        }
        metadata
    }
}

fn config_parameters(config: &SimulationConfig) -> BTreeMap<String, Value> {
    BTreeMap::from([
        ("alpha".to_string(), json!(config.alpha)),
        ("n_steps".to_string(), json!(config.n_steps)),
        ("burn_in".to_string(), json!(config.burn_in)),
        ("step_size".to_string(), json!(config.step_size)),
        ("initial_position".to_string(), json!(config.initial_position)),
        ("seed".to_string(), json!(config.seed)),
    ])
}

/// Run VMC on the 1D harmonic oscillator.
///
/// The exact ground-state energy is 0.5 in these units, which gives an
/// immediate check on the estimate.
pub fn run(config: &SimulationConfig) -> Result<SimulationResult> {
    VmcSolver::new(HarmonicOscillator1D).run(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn config(alpha: f64, seed: i64) -> SimulationConfig {
        SimulationConfig {
            n_steps: 3000,
            burn_in: 500,
            step_size: 1.0,
            alpha,
            initial_position: 0.0,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_run_reports_counts_and_labels() {
        let result = run(&config(0.95, 7)).unwrap();
        assert_eq!(result.method(), VMC_METHOD);
        assert_eq!(result.system(), "harmonic_oscillator_1d");
        assert_eq!(result.n_samples(), 2500);
        assert!((0.0..=1.0).contains(&result.acceptance_ratio()));
        assert_abs_diff_eq!(result.mean_energy(), 0.5, epsilon = 0.05);
    }

    #[test]
    fn test_exact_alpha_has_zero_variance() {
        let result = run(&config(1.0, 11)).unwrap();
        assert_eq!(result.mean_energy(), 0.5);
        assert_eq!(result.standard_error(), 0.0);
    }

    #[test]
    fn test_parameters_and_metadata_are_recorded() {
        let result = run(&config(0.9, 3)).unwrap();

        let parameters = result.parameters();
        assert_eq!(parameters["alpha"], json!(0.9));
        assert_eq!(parameters["n_steps"], json!(3000));
        assert_eq!(parameters["burn_in"], json!(500));
        assert_eq!(parameters["seed"], json!(3));

        let metadata = result.metadata();
        assert_eq!(metadata["exact_ground_state_energy"], json!(0.5));
        assert!(metadata.contains_key("notes"));
    }

    #[test]
    fn test_unseeded_run_records_null_seed() {
        let result = run(&config(0.9, 0).with_seed(None)).unwrap();
        assert_eq!(result.parameters()["seed"], Value::Null);
        assert_eq!(result.n_samples(), 2500);
    }

    #[test]
    fn test_invalid_config_fails_before_sampling() {
        let err = run(&config(0.0, 7)).unwrap_err();
        assert!(matches!(err, VmcError::ConfigValidation { field: "alpha", .. }));

        let err = run(&config(1.0, 7).with_burn_in(3000)).unwrap_err();
        assert_eq!(err.field(), Some("burn_in"));
    }

    #[test]
    fn test_negative_seed_run_is_reproducible() {
        let a = run(&config(0.95, -7)).unwrap();
        let b = run(&config(0.95, -7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.parameters()["seed"], json!(-7));
    }

    #[test]
    fn test_same_seed_gives_identical_results() {
        let a = run(&config(0.8, 21)).unwrap();
        let b = run(&config(0.8, 21)).unwrap();
        assert_eq!(a, b);
    }
}
