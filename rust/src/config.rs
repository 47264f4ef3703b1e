//! Configuration types for a simulation run.

use pyo3::prelude::*;

/// Which policy to run, its quantum, and how chatty to be.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Policy name: "fcfs", "sjf", "srt", or "round_robin" / "rr"
    #[pyo3(get, set)]
    pub policy: String,
    /// Time quantum, required for Round Robin and ignored otherwise
    #[pyo3(get, set)]
    pub quantum: Option<i64>,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policy: "fcfs".to_string(),
            quantum: None,
            verbosity: 0,
        }
    }
}

impl SimulationConfig {
    pub fn round_robin(quantum: i64) -> Self {
        Self {
            policy: "round_robin".to_string(),
            quantum: Some(quantum),
            ..Self::default()
        }
    }
}

#[pymethods]
impl SimulationConfig {
    #[new]
    #[pyo3(signature = (policy=None, quantum=None, verbosity=None))]
    fn new(policy: Option<String>, quantum: Option<i64>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            policy: policy.unwrap_or(defaults.policy),
            quantum: quantum.or(defaults.quantum),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationConfig(policy={:?}, quantum={:?}, verbosity={})",
            self.policy, self.quantum, self.verbosity
        )
    }
}
