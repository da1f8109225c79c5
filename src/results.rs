//! Result record returned by a simulation run.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{json, Value};

/// Immutable summary of one simulation run.
///
/// Fields are only reachable through accessors; the nested maps are handed
/// out as copies so callers cannot alter a stored result. [`to_json`] is the
/// only serialized form.
///
/// [`to_json`]: SimulationResult::to_json
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    method: String,
    system: String,
    n_samples: usize,
    mean_energy: f64,
    standard_error: f64,
    acceptance_ratio: f64,
    parameters: BTreeMap<String, Value>,
    metadata: BTreeMap<String, Value>,
}

impl SimulationResult {
    pub fn new(
        method: impl Into<String>,
        system: impl Into<String>,
        n_samples: usize,
        mean_energy: f64,
        standard_error: f64,
        acceptance_ratio: f64,
    ) -> Self {
        Self {
            method: method.into(),
            system: system.into(),
            n_samples,
            mean_energy,
            standard_error,
            acceptance_ratio,
            parameters: BTreeMap::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: BTreeMap<String, Value>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_metadata(mut self, metadata: BTreeMap<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn mean_energy(&self) -> f64 {
        self.mean_energy
    }

    pub fn standard_error(&self) -> f64 {
        self.standard_error
    }

    pub fn acceptance_ratio(&self) -> f64 {
        self.acceptance_ratio
    }

    /// Input parameters used for the run (a copy).
    pub fn parameters(&self) -> BTreeMap<String, Value> {
        self.parameters.clone()
    }

    /// Extra information such as the exact energy (a copy).
    pub fn metadata(&self) -> BTreeMap<String, Value> {
        self.metadata.clone()
    }

    /// Flat JSON object for API responses and `--json` output.
    pub fn to_json(&self) -> Value {
        json!({
            "method": self.method,
            "system": self.system,
            "n_samples": self.n_samples,
            "mean_energy": self.mean_energy,
            "standard_error": self.standard_error,
            "acceptance_ratio": self.acceptance_ratio,
            "parameters": self.parameters(),
            "metadata": self.metadata(),
        })
    }

    pub fn to_pretty_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "System: {}", self.system)?;
        writeln!(f, "Samples: {}", self.n_samples)?;
        writeln!(f, "Mean energy: {:.8}", self.mean_energy)?;
        writeln!(f, "Standard error: {:.8}", self.standard_error)?;
        write!(f, "Acceptance ratio: {:.4}", self.acceptance_ratio)
    }
}
