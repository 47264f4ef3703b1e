//! Core data types for the simulation engine.

use pyo3::prelude::*;

use crate::metrics::MetricsReport;

/// Simulated time, in abstract units.
pub type Time = i64;

/// A process submitted to the simulator.
///
/// Inputs only: the computed fields live on [`CompletedProcess`], so the same
/// list can be handed to any number of runs without resetting anything.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub arrival_time: Time,
    #[pyo3(get, set)]
    pub burst_time: Time,
}

impl Process {
    pub fn new(id: impl Into<String>, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }
}

#[pymethods]
impl Process {
    #[new]
    fn py_new(id: String, arrival_time: Time, burst_time: Time) -> Self {
        Self::new(id, arrival_time, burst_time)
    }

    fn __repr__(&self) -> String {
        format!(
            "Process(id={:?}, arrival_time={}, burst_time={})",
            self.id, self.arrival_time, self.burst_time
        )
    }
}

/// A process after a policy has run it to completion.
///
/// Invariants: `turnaround_time = completion_time - arrival_time` and
/// `waiting_time = turnaround_time - burst_time`.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedProcess {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub arrival_time: Time,
    #[pyo3(get)]
    pub burst_time: Time,
    /// First time the process held the CPU
    #[pyo3(get)]
    pub start_time: Time,
    #[pyo3(get)]
    pub completion_time: Time,
    #[pyo3(get)]
    pub turnaround_time: Time,
    #[pyo3(get)]
    pub waiting_time: Time,
    #[pyo3(get)]
    pub response_time: Time,
}

impl CompletedProcess {
    /// Derive every output field from a process's first dispatch and completion.
    pub fn new(process: &Process, start_time: Time, completion_time: Time) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: start_time - process.arrival_time,
        }
    }
}

#[pymethods]
impl CompletedProcess {
    fn __repr__(&self) -> String {
        format!(
            "CompletedProcess(id={:?}, completion={}, turnaround={}, waiting={})",
            self.id, self.completion_time, self.turnaround_time, self.waiting_time
        )
    }
}

/// A contiguous interval `[start, end)` during which one process held the CPU.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GanttSegment {
    #[pyo3(get)]
    pub process_id: String,
    #[pyo3(get)]
    pub start: Time,
    #[pyo3(get)]
    pub end: Time,
}

impl GanttSegment {
    pub fn new(process_id: impl Into<String>, start: Time, end: Time) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

#[pymethods]
impl GanttSegment {
    #[getter(duration)]
    fn py_duration(&self) -> Time {
        self.duration()
    }

    fn __repr__(&self) -> String {
        format!(
            "GanttSegment(process_id={:?}, start={}, end={})",
            self.process_id, self.start, self.end
        )
    }
}

/// Result of one policy run.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Display name of the policy that produced this result
    #[pyo3(get)]
    pub policy: String,
    /// Completed processes, in the caller's input order
    #[pyo3(get)]
    pub processes: Vec<CompletedProcess>,
    /// Coalesced execution intervals in time order; idle time is left uncovered
    #[pyo3(get)]
    pub segments: Vec<GanttSegment>,
    #[pyo3(get)]
    pub metrics: MetricsReport,
}

impl SimulationResult {
    pub fn new(policy: &str, processes: Vec<CompletedProcess>, segments: Vec<GanttSegment>) -> Self {
        let metrics = MetricsReport::from_processes(&processes);
        Self {
            policy: policy.to_string(),
            processes,
            segments,
            metrics,
        }
    }

    /// Look up a completed process by id.
    pub fn process(&self, id: &str) -> Option<&CompletedProcess> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Render the timeline the way the interactive front end prints it,
    /// e.g. `P1 (0–5) → P2 (5–8)`.
    pub fn gantt_chart(&self) -> String {
        self.segments
            .iter()
            .map(|s| format!("{} ({}–{})", s.process_id, s.start, s.end))
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

#[pymethods]
impl SimulationResult {
    #[pyo3(name = "gantt_chart")]
    fn py_gantt_chart(&self) -> String {
        self.gantt_chart()
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationResult(policy={:?}, processes={}, segments={})",
            self.policy,
            self.processes.len(),
            self.segments.len()
        )
    }
}
