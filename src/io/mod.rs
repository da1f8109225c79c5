//! IO module - simulation configuration, shared defaults and file handling.

mod config;
pub mod defaults;

pub use config::{build_config, config_from_json, read_config, SimulationConfig};
