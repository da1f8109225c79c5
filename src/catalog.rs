//! Read-only listing of the methods and systems this build provides.

use serde::Serialize;

use crate::systems::HarmonicOscillator1D;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MethodInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub systems: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SystemInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub dimension: &'static str,
    pub notes: &'static str,
}

pub fn available_methods() -> Vec<MethodInfo> {
    vec![MethodInfo {
        id: "vmc_metropolis",
        name: "Variational Monte Carlo (Metropolis)",
        description: "Random-walk Metropolis sampling of |psi_T|^2.",
        systems: vec![HarmonicOscillator1D::NAME],
    }]
}

pub fn available_systems() -> Vec<SystemInfo> {
    vec![SystemInfo {
        id: HarmonicOscillator1D::NAME,
        name: "1D Harmonic Oscillator",
        dimension: "1D",
        notes: "Educational baseline with exact ground-state energy E0 = 0.5.",
    }]
}
