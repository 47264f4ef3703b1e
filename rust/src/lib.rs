//! Rust implementation of the CPU scheduling simulator.
//!
//! Simulates a single CPU under FCFS, SJF, SRT and Round Robin, producing a
//! Gantt timeline and per-process timing metrics for each run.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod logging;
mod metrics;
mod models;
pub mod policy;
pub mod timeline;

pub use config::SimulationConfig;
pub use metrics::MetricsReport;
pub use models::{CompletedProcess, GanttSegment, Process, SimulationResult, Time};
pub use policy::{compare_policies, validate_processes, Policy, SimulationError};
pub use timeline::Timeline;

fn to_py_err(err: SimulationError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Run the policy named by `config` over `processes`.
///
/// # Arguments
/// * `processes` - Input processes (id, arrival time, burst time)
/// * `config` - Policy name, quantum (Round Robin only) and verbosity
///
/// # Raises
/// * ValueError if the input, policy name or quantum is invalid
#[pyfunction]
#[pyo3(name = "simulate", signature = (processes, config=None))]
fn py_simulate(
    processes: Vec<Process>,
    config: Option<SimulationConfig>,
) -> PyResult<SimulationResult> {
    let config = config.unwrap_or_default();
    let policy = Policy::from_config(&config).map_err(to_py_err)?;
    policy
        .simulate(&processes, config.verbosity)
        .map_err(to_py_err)
}

#[pyfunction]
#[pyo3(name = "simulate_fcfs", signature = (processes, verbosity=0))]
fn py_simulate_fcfs(processes: Vec<Process>, verbosity: u8) -> PyResult<SimulationResult> {
    policy::fcfs::simulate(&processes, verbosity).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(name = "simulate_sjf", signature = (processes, verbosity=0))]
fn py_simulate_sjf(processes: Vec<Process>, verbosity: u8) -> PyResult<SimulationResult> {
    policy::sjf::simulate(&processes, verbosity).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(name = "simulate_srt", signature = (processes, verbosity=0))]
fn py_simulate_srt(processes: Vec<Process>, verbosity: u8) -> PyResult<SimulationResult> {
    policy::srt::simulate(&processes, verbosity).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(name = "simulate_round_robin", signature = (processes, quantum, verbosity=0))]
fn py_simulate_round_robin(
    processes: Vec<Process>,
    quantum: Time,
    verbosity: u8,
) -> PyResult<SimulationResult> {
    policy::round_robin::simulate(&processes, quantum, verbosity).map_err(to_py_err)
}

/// Run all four policies over the same processes, in order FCFS, SJF, SRT, RR.
///
/// # Raises
/// * ValueError if the input or quantum is invalid
#[pyfunction]
#[pyo3(name = "compare_policies", signature = (processes, quantum, verbosity=0))]
fn py_compare_policies(
    processes: Vec<Process>,
    quantum: Time,
    verbosity: u8,
) -> PyResult<Vec<SimulationResult>> {
    compare_policies(&processes, quantum, verbosity).map_err(to_py_err)
}

/// The cpusim.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Process>()?;
    m.add_class::<CompletedProcess>()?;
    m.add_class::<GanttSegment>()?;
    m.add_class::<SimulationResult>()?;
    m.add_class::<MetricsReport>()?;

    // Config types
    m.add_class::<SimulationConfig>()?;

    // Simulations
    m.add_function(wrap_pyfunction!(py_simulate, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate_fcfs, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate_sjf, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate_srt, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate_round_robin, m)?)?;
    m.add_function(wrap_pyfunction!(py_compare_policies, m)?)?;

    Ok(())
}
