//! Reference suite for VMC on the 1D harmonic oscillator.
//!
//! Each case runs the solver at a fixed α and compares the mean energy with
//! an analytic reference within a per-case tolerance.

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::references::{
    harmonic_oscillator_exact_ground_state_energy, harmonic_oscillator_variational_energy,
};
use crate::error::Result;
use crate::io::defaults::{
    DEFAULT_BENCHMARK_BURN_IN, DEFAULT_BENCHMARK_N_STEPS, DEFAULT_INITIAL_POSITION, DEFAULT_SEED,
    DEFAULT_STEP_SIZE,
};
use crate::io::SimulationConfig;
use crate::sampling::{run, VMC_METHOD};
use crate::systems::HarmonicOscillator1D;

pub const SUITE_NAME: &str = "vmc_harmonic_oscillator_reference_suite";

/// Definition of one benchmark target.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchmarkCase {
    pub case_id: String,
    pub description: String,
    pub alpha: f64,
    pub reference_energy: f64,
    pub tolerance: f64,
    pub reference_source: String,
}

/// Outcome for one benchmark case.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkCaseResult {
    pub case_id: String,
    pub description: String,
    pub alpha: f64,
    pub reference_energy: f64,
    pub measured_energy: f64,
    pub standard_error: f64,
    pub abs_error: f64,
    pub tolerance: f64,
    pub passed: bool,
    pub acceptance_ratio: f64,
    pub n_samples: usize,
    pub reference_source: String,
}

impl BenchmarkCaseResult {
    pub fn to_json(&self) -> Value {
        json!({
            "case_id": self.case_id,
            "description": self.description,
            "alpha": self.alpha,
            "reference_energy": self.reference_energy,
            "measured_energy": self.measured_energy,
            "standard_error": self.standard_error,
            "abs_error": self.abs_error,
            "tolerance": self.tolerance,
            "passed": self.passed,
            "acceptance_ratio": self.acceptance_ratio,
            "n_samples": self.n_samples,
            "reference_source": self.reference_source,
        })
    }
}

/// Ordered case results plus pass/fail counts.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkSuiteResult {
    pub suite_name: String,
    pub method: String,
    pub system: String,
    pub cases: Vec<BenchmarkCaseResult>,
}

impl BenchmarkSuiteResult {
    pub fn total_cases(&self) -> usize {
        self.cases.len()
    }

    pub fn passed_cases(&self) -> usize {
        self.cases.iter().filter(|case| case.passed).count()
    }

    pub fn failed_cases(&self) -> usize {
        self.total_cases() - self.passed_cases()
    }

    pub fn all_passed(&self) -> bool {
        self.failed_cases() == 0
    }

    pub fn to_json(&self) -> Value {
        json!({
            "suite_name": self.suite_name,
            "method": self.method,
            "system": self.system,
            "total_cases": self.total_cases(),
            "passed_cases": self.passed_cases(),
            "failed_cases": self.failed_cases(),
            "all_passed": self.all_passed(),
            "cases": self.cases.iter().map(BenchmarkCaseResult::to_json).collect::<Vec<_>>(),
        })
    }

    pub fn to_pretty_text(&self) -> String {
        self.to_string()
    }
}

fn status(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

impl fmt::Display for BenchmarkSuiteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Benchmark suite: {}", self.suite_name)?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "System: {}", self.system)?;
        write!(
            f,
            "Overall: {} ({}/{} cases passed)",
            status(self.all_passed()),
            self.passed_cases(),
            self.total_cases()
        )?;
        for case in &self.cases {
            write!(
                f,
                "\n - [{}] {}: measured={:.8}, reference={:.8}, |error|={:.8}, tol={:.8}, \
                 stderr={:.8}",
                status(case.passed),
                case.case_id,
                case.measured_energy,
                case.reference_energy,
                case.abs_error,
                case.tolerance,
                case.standard_error,
            )?;
        }
        Ok(())
    }
}

/// The fixed reference cases, in run order.
pub fn default_cases() -> Result<Vec<BenchmarkCase>> {
    let exact_source = "Exact harmonic oscillator ground-state energy E0 = 1/2 in reduced units \
                        (standard quantum mechanics result).";
    let variational_source = "Gaussian trial variational energy E(alpha) = 1/4(alpha + 1/alpha) \
                              for psi_T(x;alpha)=exp(-alpha x^2/2).";

    Ok(vec![
        BenchmarkCase {
            case_id: "ho_exact_alpha_1.0".to_string(),
            description: "Exact-energy check with optimal alpha=1.0".to_string(),
            alpha: 1.0,
            reference_energy: harmonic_oscillator_exact_ground_state_energy(),
            tolerance: 1e-12,
            reference_source: exact_source.to_string(),
        },
        BenchmarkCase {
            case_id: "ho_variational_alpha_0.8".to_string(),
            description: "Variational reference check with alpha=0.8".to_string(),
            alpha: 0.8,
            reference_energy: harmonic_oscillator_variational_energy(0.8)?,
            tolerance: 0.02,
            reference_source: variational_source.to_string(),
        },
        BenchmarkCase {
            case_id: "ho_variational_alpha_1.2".to_string(),
            description: "Variational reference check with alpha=1.2".to_string(),
            alpha: 1.2,
            reference_energy: harmonic_oscillator_variational_energy(1.2)?,
            tolerance: 0.02,
            reference_source: variational_source.to_string(),
        },
    ])
}

/// Chain settings shared by every case of a suite run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BenchmarkRunner {
    pub n_steps: usize,
    pub burn_in: usize,
    pub step_size: f64,
    pub initial_position: f64,
    /// Base seed; case `i` runs with `seed + i`. `None` leaves every case unseeded.
    pub seed: Option<i64>,
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self {
            n_steps: DEFAULT_BENCHMARK_N_STEPS,
            burn_in: DEFAULT_BENCHMARK_BURN_IN,
            step_size: DEFAULT_STEP_SIZE,
            initial_position: DEFAULT_INITIAL_POSITION,
            seed: Some(DEFAULT_SEED),
        }
    }
}

impl BenchmarkRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    pub fn with_burn_in(mut self, burn_in: usize) -> Self {
        self.burn_in = burn_in;
        self
    }

    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_initial_position(mut self, initial_position: f64) -> Self {
        self.initial_position = initial_position;
        self
    }

    pub fn with_seed(mut self, seed: Option<i64>) -> Self {
        self.seed = seed;
        self
    }

    /// Config for the case at `index`. The seed offset only keeps cases off
    /// identical chain paths; it is not a randomisation scheme.
    pub fn case_config(&self, index: usize, alpha: f64) -> SimulationConfig {
        SimulationConfig {
            n_steps: self.n_steps,
            burn_in: self.burn_in,
            step_size: self.step_size,
            alpha,
            initial_position: self.initial_position,
            seed: self.seed.map(|seed| seed.wrapping_add(index as i64)),
        }
    }

    /// Run the built-in reference cases.
    pub fn run(&self) -> Result<BenchmarkSuiteResult> {
        self.run_cases(&default_cases()?)
    }

    /// Run `cases` sequentially, in order.
    #[instrument(skip_all, fields(n_cases = cases.len(), seed = ?self.seed))]
    pub fn run_cases(&self, cases: &[BenchmarkCase]) -> Result<BenchmarkSuiteResult> {
        let mut results = Vec::with_capacity(cases.len());

        for (index, case) in cases.iter().enumerate() {
            let simulation = run(&self.case_config(index, case.alpha))?;

            let abs_error = (simulation.mean_energy() - case.reference_energy).abs();
            let passed = abs_error <= case.tolerance;
            if passed {
                info!(case = %case.case_id, abs_error, "benchmark case passed");
            } else {
                warn!(
                    case = %case.case_id,
                    abs_error,
                    tolerance = case.tolerance,
                    "benchmark case failed"
                );
            }

            results.push(BenchmarkCaseResult {
                case_id: case.case_id.clone(),
                description: case.description.clone(),
                alpha: case.alpha,
                reference_energy: case.reference_energy,
                measured_energy: simulation.mean_energy(),
                standard_error: simulation.standard_error(),
                abs_error,
                tolerance: case.tolerance,
                passed,
                acceptance_ratio: simulation.acceptance_ratio(),
                n_samples: simulation.n_samples(),
                reference_source: case.reference_source.clone(),
            });
        }

        Ok(BenchmarkSuiteResult {
            suite_name: SUITE_NAME.to_string(),
            method: VMC_METHOD.to_string(),
            system: HarmonicOscillator1D::NAME.to_string(),
            cases: results,
        })
    }
}

/// Run the reference suite with the given chain settings.
pub fn run_benchmarks(
    n_steps: usize,
    burn_in: usize,
    step_size: f64,
    initial_position: f64,
    seed: Option<i64>,
) -> Result<BenchmarkSuiteResult> {
    BenchmarkRunner {
        n_steps,
        burn_in,
        step_size,
        initial_position,
        seed,
    }
    .run()
}
