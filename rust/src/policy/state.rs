//! Private per-run working copy of process state.

use crate::models::{CompletedProcess, Process, SimulationResult, Time};
use crate::timeline::Timeline;
use crate::log_changes;

use super::SimulationError;

/// Mutable bookkeeping for one policy invocation.
///
/// Built fresh from the caller's input on every run, so no state can leak
/// from one simulation into the next. Processes are addressed by their index
/// in the input slice.
pub(super) struct SimState<'a> {
    processes: &'a [Process],
    pub remaining: Vec<Time>,
    start: Vec<Option<Time>>,
    completion: Vec<Option<Time>>,
    timeline: Timeline,
    verbosity: u8,
}

impl<'a> SimState<'a> {
    pub fn new(processes: &'a [Process], verbosity: u8) -> Self {
        Self {
            processes,
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            start: vec![None; processes.len()],
            completion: vec![None; processes.len()],
            timeline: Timeline::new(),
            verbosity,
        }
    }

    pub fn id(&self, idx: usize) -> &str {
        &self.processes[idx].id
    }

    pub fn is_done(&self, idx: usize) -> bool {
        self.remaining[idx] == 0
    }

    pub fn all_done(&self) -> bool {
        self.remaining.iter().all(|&r| r == 0)
    }

    /// Input indices sorted by arrival time; equal arrivals keep input order.
    pub fn arrival_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.processes.len()).collect();
        order.sort_by_key(|&idx| self.processes[idx].arrival_time);
        order
    }

    /// Earliest arrival among unfinished processes that arrive after `clock`.
    pub fn next_arrival_after(&self, clock: Time) -> Option<Time> {
        self.processes
            .iter()
            .enumerate()
            .filter(|&(idx, p)| !self.is_done(idx) && p.arrival_time > clock)
            .map(|(_, p)| p.arrival_time)
            .min()
    }

    /// Give process `idx` the CPU for `duration` units starting at `clock`.
    ///
    /// Returns the clock after the slice. Completion is stamped on the slice
    /// that brings the remaining time to exactly zero.
    pub fn run(&mut self, idx: usize, clock: Time, duration: Time) -> Time {
        debug_assert!(duration > 0 && duration <= self.remaining[idx]);
        debug_assert!(self.processes[idx].arrival_time <= clock);

        if self.timeline.running_at(clock) != Some(self.id(idx)) {
            log_changes!(self.verbosity, "t={}: dispatch {}", clock, self.id(idx));
        }

        let end = clock + duration;
        if self.start[idx].is_none() {
            self.start[idx] = Some(clock);
        }
        self.remaining[idx] -= duration;
        self.timeline.record(&self.processes[idx].id, clock, end);

        if self.remaining[idx] == 0 {
            self.completion[idx] = Some(end);
            log_changes!(self.verbosity, "t={}: {} completes", end, self.id(idx));
        }
        end
    }

    /// Convert the finished run into a result, processes in input order.
    pub fn finish(self, policy: &str) -> Result<SimulationResult, SimulationError> {
        let mut completed = Vec::with_capacity(self.processes.len());
        let mut unfinished = Vec::new();

        for (idx, process) in self.processes.iter().enumerate() {
            match (self.start[idx], self.completion[idx]) {
                (Some(start), Some(end)) => {
                    completed.push(CompletedProcess::new(process, start, end))
                }
                _ => unfinished.push(process.id.clone()),
            }
        }

        if !unfinished.is_empty() {
            return Err(SimulationError::Unfinished(unfinished));
        }

        Ok(SimulationResult::new(
            policy,
            completed,
            self.timeline.into_segments(),
        ))
    }
}
