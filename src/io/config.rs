//! Simulation configuration and the boundary builders that produce it.
//!
//! Every transport (CLI flags, YAML files, JSON payloads) ends up in
//! [`build_config`] or [`SimulationConfig::validate`], so the field rules are
//! enforced the same way no matter where the values came from.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::defaults::{
    DEFAULT_ALPHA, DEFAULT_BURN_IN, DEFAULT_INITIAL_POSITION, DEFAULT_N_STEPS, DEFAULT_SEED,
    DEFAULT_STEP_SIZE,
};
use crate::error::{Result, VmcError};

/// Controls for a single Metropolis VMC run.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Total Monte Carlo steps including burn-in.
    pub n_steps: usize,
    /// Number of initial steps discarded before statistics.
    pub burn_in: usize,
    /// Half-width of the uniform random-walk proposal.
    pub step_size: f64,
    /// Trial-wavefunction variational parameter.
    pub alpha: f64,
    /// Starting coordinate of the chain.
    pub initial_position: f64,
    /// RNG seed; `None` draws the seed from OS entropy. Any integer is
    /// accepted; its bit pattern seeds the generator.
    pub seed: Option<i64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_steps: DEFAULT_N_STEPS,
            burn_in: DEFAULT_BURN_IN,
            step_size: DEFAULT_STEP_SIZE,
            alpha: DEFAULT_ALPHA,
            initial_position: DEFAULT_INITIAL_POSITION,
            seed: Some(DEFAULT_SEED),
        }
    }
}

impl SimulationConfig {
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

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
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

    /// Number of samples a chain with this config retains.
    pub fn retained_samples(&self) -> usize {
        self.n_steps.saturating_sub(self.burn_in)
    }

    /// Check the field rules, reporting the first one that is violated.
    ///
    /// `burn_in` is unsigned, so "burn_in cannot be negative" is enforced by
    /// the boundary builders instead.
    pub fn validate(&self) -> Result<()> {
        if self.n_steps == 0 {
            return Err(VmcError::invalid("n_steps", "n_steps must be positive"));
        }
        if self.burn_in >= self.n_steps {
            return Err(VmcError::invalid(
                "burn_in",
                "burn_in must be smaller than n_steps",
            ));
        }
        if self.step_size.is_nan() || self.step_size <= 0.0 {
            return Err(VmcError::invalid("step_size", "step_size must be positive"));
        }
        if self.alpha.is_nan() || self.alpha <= 0.0 {
            return Err(VmcError::invalid("alpha", "alpha must be positive"));
        }
        if !self.initial_position.is_finite() {
            return Err(VmcError::invalid(
                "initial_position",
                "initial_position must be finite",
            ));
        }
        Ok(())
    }
}

/// Build a validated config from loosely typed values.
///
/// Counts arrive as signed integers so that negative values from external
/// callers are reported with a field-specific message rather than wrapping
/// around.
pub fn build_config(
    n_steps: i64,
    burn_in: i64,
    step_size: f64,
    alpha: f64,
    initial_position: f64,
    seed: Option<i64>,
) -> Result<SimulationConfig> {
    if n_steps <= 0 {
        return Err(VmcError::invalid("n_steps", "n_steps must be positive"));
    }
    if burn_in < 0 {
        return Err(VmcError::invalid("burn_in", "burn_in cannot be negative"));
    }
    let n_steps = usize::try_from(n_steps)
        .map_err(|_| VmcError::invalid("n_steps", "n_steps is too large"))?;
    let burn_in = usize::try_from(burn_in)
        .map_err(|_| VmcError::invalid("burn_in", "burn_in is too large"))?;

    let config = SimulationConfig {
        n_steps,
        burn_in,
        step_size,
        alpha,
        initial_position,
        seed,
    };
    config.validate()?;
    Ok(config)
}

/// Build a validated config from a JSON object such as a form payload.
///
/// Missing keys take the shared defaults. A `seed` of `null` or `""` means
/// "no seed".
pub fn config_from_json(payload: &Value) -> Result<SimulationConfig> {
    let object = payload
        .as_object()
        .ok_or_else(|| VmcError::invalid("payload", "payload must be a JSON object"))?;

    let n_steps = parse_int(object.get("n_steps"), "n_steps", DEFAULT_N_STEPS as i64)?;
    let burn_in = parse_int(object.get("burn_in"), "burn_in", DEFAULT_BURN_IN as i64)?;
    let step_size = parse_float(object.get("step_size"), "step_size", DEFAULT_STEP_SIZE)?;
    let alpha = parse_float(object.get("alpha"), "alpha", DEFAULT_ALPHA)?;
    let initial_position = parse_float(
        object.get("initial_position"),
        "initial_position",
        DEFAULT_INITIAL_POSITION,
    )?;
    let seed = match object.get("seed") {
        None => Some(DEFAULT_SEED),
        Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(parse_int(Some(value), "seed", 0)?),
    };

    build_config(n_steps, burn_in, step_size, alpha, initial_position, seed)
}

/// Read a YAML config file, e.g.
///
/// ```yaml
/// n_steps: 30000
/// burn_in: 3000
/// alpha: 0.9
/// seed: 7
/// ```
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| VmcError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let config: SimulationConfig = serde_yaml::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

fn parse_int(value: Option<&Value>, field: &'static str, default: i64) -> Result<i64> {
    let Some(value) = value else {
        return Ok(default);
    };
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| VmcError::invalid(field, format!("{field} must be an integer")))
}

fn parse_float(value: Option<&Value>, field: &'static str, default: f64) -> Result<f64> {
    let Some(value) = value else {
        return Ok(default);
    };
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| VmcError::invalid(field, format!("{field} must be a number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;
    use std::io::Write;

    fn base() -> SimulationConfig {
        SimulationConfig::default()
            .with_n_steps(100)
            .with_burn_in(10)
    }

    fn rejected_field(config: SimulationConfig) -> (&'static str, String) {
        let err = config.validate().unwrap_err();
        (err.field().unwrap(), err.to_string())
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.n_steps, DEFAULT_N_STEPS);
        assert_eq!(config.seed, Some(DEFAULT_SEED));
        assert_eq!(config.retained_samples(), 18_000);
    }

    #[test]
    fn test_validate_rejects_each_rule() {
        let (field, msg) = rejected_field(base().with_n_steps(0).with_burn_in(0));
        assert_eq!(field, "n_steps");
        assert_eq!(msg, "n_steps must be positive");

        let (field, msg) = rejected_field(base().with_burn_in(100));
        assert_eq!(field, "burn_in");
        assert_eq!(msg, "burn_in must be smaller than n_steps");

        let (field, msg) = rejected_field(base().with_step_size(0.0));
        assert_eq!(field, "step_size");
        assert_eq!(msg, "step_size must be positive");

        let (field, msg) = rejected_field(base().with_alpha(0.0));
        assert_eq!(field, "alpha");
        assert_eq!(msg, "alpha must be positive");

        let (field, _) = rejected_field(base().with_alpha(f64::NAN));
        assert_eq!(field, "alpha");

        let (field, _) = rejected_field(base().with_initial_position(f64::INFINITY));
        assert_eq!(field, "initial_position");
    }

    #[test]
    fn test_validate_reports_first_violation() {
        // n_steps=0 also makes burn_in >= n_steps, but n_steps is checked first.
        let config = base().with_n_steps(0).with_step_size(-1.0).with_alpha(-1.0);
        assert_eq!(config.validate().unwrap_err().field(), Some("n_steps"));

        let config = base().with_step_size(-1.0).with_alpha(-1.0);
        assert_eq!(config.validate().unwrap_err().field(), Some("step_size"));
    }

    #[test]
    fn test_build_config_from_typed_values() {
        let config = build_config(2000, 500, 1.0, 0.95, 0.0, Some(7)).unwrap();
        assert_eq!(config.n_steps, 2000);
        assert_eq!(config.burn_in, 500);
        assert_relative_eq!(config.alpha, 0.95);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_build_config_rejects_negative_burn_in() {
        let err = build_config(100, -1, 1.0, 1.0, 0.0, Some(7)).unwrap_err();
        assert_eq!(err.field(), Some("burn_in"));
        assert_eq!(err.to_string(), "burn_in cannot be negative");
    }

    #[test]
    fn test_build_config_checks_n_steps_before_burn_in() {
        let err = build_config(0, -1, 1.0, 1.0, 0.0, None).unwrap_err();
        assert_eq!(err.to_string(), "n_steps must be positive");
    }

    #[test]
    fn test_build_config_propagates_domain_validation_errors() {
        let err = build_config(100, 100, 1.0, 1.0, 0.0, Some(7)).unwrap_err();
        assert_eq!(err.to_string(), "burn_in must be smaller than n_steps");
    }

    #[test]
    fn test_build_config_accepts_negative_seed() {
        let config = build_config(3000, 500, 1.0, 0.95, 0.0, Some(-7)).unwrap();
        assert_eq!(config.seed, Some(-7));

        let config = config_from_json(&json!({ "seed": -7 })).unwrap();
        assert_eq!(config.seed, Some(-7));
        let config = config_from_json(&json!({ "seed": "-7" })).unwrap();
        assert_eq!(config.seed, Some(-7));
    }

    #[test]
    fn test_config_from_json_with_defaults() {
        let config = config_from_json(&json!({})).unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert!(config.burn_in < config.n_steps);
    }

    #[test]
    fn test_config_from_json_rejects_bad_payload_type() {
        let err = config_from_json(&json!("invalid")).unwrap_err();
        assert_eq!(err.to_string(), "payload must be a JSON object");
    }

    #[test]
    fn test_config_from_json_rejects_bad_numeric_type() {
        let err = config_from_json(&json!({ "n_steps": "abc" })).unwrap_err();
        assert_eq!(err.to_string(), "n_steps must be an integer");

        let err = config_from_json(&json!({ "alpha": [1.0] })).unwrap_err();
        assert_eq!(err.to_string(), "alpha must be a number");
    }

    #[test]
    fn test_config_from_json_accepts_string_fields_and_null_seed() {
        let config = config_from_json(&json!({
            "n_steps": "2000",
            "burn_in": 500,
            "step_size": "0.5",
            "alpha": 1.0,
            "initial_position": 0.0,
            "seed": null,
        }))
        .unwrap();
        assert_eq!(config.n_steps, 2000);
        assert_relative_eq!(config.step_size, 0.5);
        assert_eq!(config.seed, None);

        let config = config_from_json(&json!({ "seed": "" })).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_read_config_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "n_steps: 4000\nburn_in: 400\nalpha: 0.9\nseed: 7").unwrap();

        let config = read_config(file.path()).unwrap();
        assert_eq!(config.n_steps, 4000);
        assert_eq!(config.burn_in, 400);
        assert_relative_eq!(config.alpha, 0.9);
        assert_relative_eq!(config.step_size, DEFAULT_STEP_SIZE);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_read_config_validates_after_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "n_steps: 10\nburn_in: 10").unwrap();

        let err = read_config(file.path()).unwrap_err();
        assert_eq!(err.field(), Some("burn_in"));
    }

    #[test]
    fn test_read_config_missing_file() {
        let err = read_config("/nonexistent/vmc.yml").unwrap_err();
        assert!(matches!(err, VmcError::ConfigRead { .. }));
    }
}
