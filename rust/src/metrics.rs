//! Aggregate metrics over a completed process list.

use pyo3::prelude::*;

use crate::models::{CompletedProcess, Time};

/// Summary figures for one simulation run.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsReport {
    #[pyo3(get)]
    pub average_waiting_time: f64,
    #[pyo3(get)]
    pub average_turnaround_time: f64,
    #[pyo3(get)]
    pub average_response_time: f64,
    /// Sum of every process's burst time
    #[pyo3(get)]
    pub total_burst_time: Time,
    /// Last completion minus first arrival
    #[pyo3(get)]
    pub makespan: Time,
    /// Fraction of the makespan the CPU was busy (0.0 when the makespan is 0)
    #[pyo3(get)]
    pub cpu_utilization: f64,
}

impl MetricsReport {
    /// Compute the report for a completed run. An empty list yields all zeros.
    pub fn from_processes(processes: &[CompletedProcess]) -> Self {
        if processes.is_empty() {
            return Self::default();
        }

        let n = processes.len() as f64;
        // Per-process times can sit near Time::MAX, so average in f64
        let total_waiting: f64 = processes.iter().map(|p| p.waiting_time as f64).sum();
        let total_turnaround: f64 = processes.iter().map(|p| p.turnaround_time as f64).sum();
        let total_response: f64 = processes.iter().map(|p| p.response_time as f64).sum();
        let total_burst_time: Time = processes.iter().map(|p| p.burst_time).sum();

        let first_arrival = processes.iter().map(|p| p.arrival_time).min().unwrap_or(0);
        let last_completion = processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0);
        let makespan = last_completion - first_arrival;

        let cpu_utilization = if makespan > 0 {
            total_burst_time as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            average_waiting_time: total_waiting / n,
            average_turnaround_time: total_turnaround / n,
            average_response_time: total_response / n,
            total_burst_time,
            makespan,
            cpu_utilization,
        }
    }
}

#[pymethods]
impl MetricsReport {
    fn __repr__(&self) -> String {
        format!(
            "MetricsReport(average_waiting_time={:.2}, average_turnaround_time={:.2})",
            self.average_waiting_time, self.average_turnaround_time
        )
    }
}
