//! Single-CPU scheduling policies.
//!
//! Every policy is a pure function of its input: it validates the process
//! list, builds a private working copy, and returns a [`SimulationResult`].
//! The caller's records are never mutated, so the same list can be run under
//! every policy in turn (or in parallel) without resetting anything.

pub mod fcfs;
pub mod round_robin;
pub mod sjf;
pub mod srt;
mod state;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::config::SimulationConfig;
use crate::models::{Process, SimulationResult, Time};

/// Errors raised before a simulation starts, or if one fails to complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Process list is empty")]
    EmptyProcessList,
    #[error("Process id must not be empty")]
    EmptyProcessId,
    #[error("Duplicate process id: {0}")]
    DuplicateProcessId(String),
    #[error("Process {id} has negative arrival time {arrival_time}")]
    NegativeArrivalTime { id: String, arrival_time: Time },
    #[error("Process {id} has non-positive burst time {burst_time}")]
    NonPositiveBurstTime { id: String, burst_time: Time },
    #[error("Time quantum must be positive, got {0}")]
    NonPositiveQuantum(Time),
    #[error("Round Robin requires a time quantum")]
    MissingQuantum,
    #[error("Unknown scheduling policy: {0}")]
    UnknownPolicy(String),
    #[error("Latest arrival plus total burst time exceeds the representable time range")]
    TimeOverflow,
    #[error("Processes never completed: {0:?}")]
    Unfinished(Vec<String>),
}

/// A scheduling policy, selected by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// First-Come-First-Served (non-preemptive)
    Fcfs,
    /// Shortest-Job-First (non-preemptive)
    Sjf,
    /// Shortest-Remaining-Time (preemptive)
    Srt,
    /// Round Robin with a fixed quantum (preemptive)
    RoundRobin { quantum: Time },
}

impl Policy {
    /// The four policies in comparison order, Round Robin using `quantum`.
    pub fn all(quantum: Time) -> [Policy; 4] {
        [
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Srt,
            Policy::RoundRobin { quantum },
        ]
    }

    /// Resolve a config to a policy, validating the name and quantum upfront.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimulationError> {
        match config.policy.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "srt" => Ok(Policy::Srt),
            "rr" | "round_robin" => {
                let quantum = config.quantum.ok_or(SimulationError::MissingQuantum)?;
                validate_quantum(quantum)?;
                Ok(Policy::RoundRobin { quantum })
            }
            _ => Err(SimulationError::UnknownPolicy(config.policy.clone())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => fcfs::NAME,
            Policy::Sjf => sjf::NAME,
            Policy::Srt => srt::NAME,
            Policy::RoundRobin { .. } => round_robin::NAME,
        }
    }

    /// Run this policy over `processes`.
    pub fn simulate(
        &self,
        processes: &[Process],
        verbosity: u8,
    ) -> Result<SimulationResult, SimulationError> {
        match *self {
            Policy::Fcfs => fcfs::simulate(processes, verbosity),
            Policy::Sjf => sjf::simulate(processes, verbosity),
            Policy::Srt => srt::simulate(processes, verbosity),
            Policy::RoundRobin { quantum } => round_robin::simulate(processes, quantum, verbosity),
        }
    }
}

/// Run every policy over the same input, each on its own working copy.
pub fn compare_policies(
    processes: &[Process],
    quantum: Time,
    verbosity: u8,
) -> Result<Vec<SimulationResult>, SimulationError> {
    validate_quantum(quantum)?;
    Policy::all(quantum)
        .iter()
        .map(|policy| policy.simulate(processes, verbosity))
        .collect()
}

/// Check the preconditions every policy relies on.
pub fn validate_processes(processes: &[Process]) -> Result<(), SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessList);
    }

    let mut seen: FxHashSet<&str> =
        FxHashSet::with_capacity_and_hasher(processes.len(), Default::default());
    for process in processes {
        if process.id.is_empty() {
            return Err(SimulationError::EmptyProcessId);
        }
        if !seen.insert(process.id.as_str()) {
            return Err(SimulationError::DuplicateProcessId(process.id.clone()));
        }
        if process.arrival_time < 0 {
            return Err(SimulationError::NegativeArrivalTime {
                id: process.id.clone(),
                arrival_time: process.arrival_time,
            });
        }
        if process.burst_time <= 0 {
            return Err(SimulationError::NonPositiveBurstTime {
                id: process.id.clone(),
                burst_time: process.burst_time,
            });
        }
    }

    // The clock never passes the latest arrival plus every burst, so bounding
    // that sum keeps all simulated times in range.
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |horizon, p| horizon.checked_add(p.burst_time))
        .ok_or(SimulationError::TimeOverflow)?;

    Ok(())
}

pub fn validate_quantum(quantum: Time) -> Result<(), SimulationError> {
    if quantum <= 0 {
        return Err(SimulationError::NonPositiveQuantum(quantum));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: &str, arrival: Time, burst: Time) -> Process {
        Process::new(id, arrival, burst)
    }

    fn sample() -> Vec<Process> {
        vec![
            p("P1", 0, 7),
            p("P2", 2, 4),
            p("P3", 4, 1),
            p("P4", 5, 4),
            p("P5", 20, 3),
        ]
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            validate_processes(&[]),
            Err(SimulationError::EmptyProcessList)
        );
        assert_eq!(
            validate_processes(&[p("", 0, 1)]),
            Err(SimulationError::EmptyProcessId)
        );
        assert_eq!(
            validate_processes(&[p("A", 0, 1), p("A", 2, 1)]),
            Err(SimulationError::DuplicateProcessId("A".to_string()))
        );
        assert!(matches!(
            validate_processes(&[p("A", -1, 1)]),
            Err(SimulationError::NegativeArrivalTime { arrival_time: -1, .. })
        ));
        assert!(matches!(
            validate_processes(&[p("A", 0, 0)]),
            Err(SimulationError::NonPositiveBurstTime { burst_time: 0, .. })
        ));
        assert_eq!(validate_processes(&sample()), Ok(()));
    }

    #[test]
    fn test_time_range_overflow_rejected() {
        for policy in Policy::all(2) {
            assert_eq!(
                policy.simulate(&[p("A", Time::MAX - 1, 5)], 0).unwrap_err(),
                SimulationError::TimeOverflow
            );
            assert_eq!(
                policy
                    .simulate(&[p("A", 0, Time::MAX), p("B", 0, 1)], 0)
                    .unwrap_err(),
                SimulationError::TimeOverflow
            );
        }
    }

    #[test]
    fn test_time_range_upper_bound_accepted() {
        let processes = vec![p("A", Time::MAX - 5, 2), p("B", Time::MAX - 5, 3)];
        for policy in Policy::all(2) {
            let result = policy.simulate(&processes, 0).unwrap();
            let last = result.processes.iter().map(|p| p.completion_time).max();
            assert_eq!(last, Some(Time::MAX), "{}", policy.name());
            assert!(result.processes.iter().all(|p| p.waiting_time >= 0));
            assert_eq!(result.metrics.makespan, 5);
        }
    }

    #[test]
    fn test_every_policy_rejects_invalid_input() {
        for policy in Policy::all(2) {
            assert_eq!(
                policy.simulate(&[], 0).unwrap_err(),
                SimulationError::EmptyProcessList
            );
            assert!(policy.simulate(&[p("A", 0, -3)], 0).is_err());
        }
        assert_eq!(
            Policy::RoundRobin { quantum: 0 }
                .simulate(&sample(), 0)
                .unwrap_err(),
            SimulationError::NonPositiveQuantum(0)
        );
    }

    #[test]
    fn test_from_config() {
        let config = SimulationConfig {
            policy: "SRT".to_string(),
            ..SimulationConfig::default()
        };
        assert_eq!(Policy::from_config(&config), Ok(Policy::Srt));

        assert_eq!(
            Policy::from_config(&SimulationConfig::round_robin(3)),
            Ok(Policy::RoundRobin { quantum: 3 })
        );
        assert_eq!(
            Policy::from_config(&SimulationConfig::round_robin(-1)),
            Err(SimulationError::NonPositiveQuantum(-1))
        );

        let missing = SimulationConfig {
            policy: "rr".to_string(),
            ..SimulationConfig::default()
        };
        assert_eq!(
            Policy::from_config(&missing),
            Err(SimulationError::MissingQuantum)
        );

        let unknown = SimulationConfig {
            policy: "lottery".to_string(),
            ..SimulationConfig::default()
        };
        assert!(matches!(
            Policy::from_config(&unknown),
            Err(SimulationError::UnknownPolicy(name)) if name == "lottery"
        ));
    }

    #[test]
    fn test_timing_invariants_hold_for_all_policies() {
        let processes = sample();
        for policy in Policy::all(3) {
            let result = policy.simulate(&processes, 0).unwrap();

            assert_eq!(result.processes.len(), processes.len());
            for (input, done) in processes.iter().zip(&result.processes) {
                // Output stays in input order
                assert_eq!(input.id, done.id);
                assert_eq!(done.turnaround_time, done.completion_time - done.arrival_time);
                assert_eq!(done.waiting_time, done.turnaround_time - done.burst_time);
                assert!(done.start_time >= done.arrival_time);
                assert!(done.completion_time >= done.start_time + done.burst_time);
            }
        }
    }

    #[test]
    fn test_cpu_time_is_conserved() {
        let processes = sample();
        let total_burst: Time = processes.iter().map(|p| p.burst_time).sum();

        for policy in Policy::all(2) {
            let result = policy.simulate(&processes, 0).unwrap();
            let scheduled: Time = result.segments.iter().map(|s| s.duration()).sum();
            assert_eq!(scheduled, total_burst, "{} lost or invented CPU time", policy.name());

            for pair in result.segments.windows(2) {
                assert!(pair[0].end <= pair[1].start, "{} overlaps", policy.name());
                assert!(
                    pair[0].process_id != pair[1].process_id || pair[0].end < pair[1].start,
                    "{} left adjacent segments uncoalesced",
                    policy.name()
                );
            }
        }
    }

    #[test]
    fn test_reruns_are_identical() {
        let processes = sample();
        for policy in Policy::all(2) {
            let first = policy.simulate(&processes, 0).unwrap();
            let second = policy.simulate(&processes, 0).unwrap();
            assert_eq!(first.segments, second.segments);
            assert_eq!(first.processes, second.processes);
            assert_eq!(first.metrics, second.metrics);
        }
    }

    #[test]
    fn test_single_process_never_waits() {
        let processes = vec![p("solo", 0, 6)];
        for policy in Policy::all(4) {
            let result = policy.simulate(&processes, 0).unwrap();
            let solo = &result.processes[0];
            assert_eq!(solo.waiting_time, 0);
            assert_eq!(solo.completion_time, 6);
            assert_eq!(result.segments.len(), 1);
        }
    }

    #[test]
    fn test_compare_policies() {
        let results = compare_policies(&sample(), 2, 0).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.policy.as_str()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "SRT", "Round Robin"]);
        for (policy, result) in Policy::all(2).iter().zip(&results) {
            assert_eq!(result.policy, policy.name());
        }

        assert_eq!(
            compare_policies(&sample(), 0, 0).unwrap_err(),
            SimulationError::NonPositiveQuantum(0)
        );
    }
}
