//! Shortest-Job-First: non-preemptive, shortest burst among arrived processes.

use crate::models::{Process, SimulationResult};
use crate::{log_changes, log_checks};

use super::state::SimState;
use super::{validate_processes, SimulationError};

pub const NAME: &str = "SJF";

pub fn simulate(
    processes: &[Process],
    verbosity: u8,
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes)?;
    let mut state = SimState::new(processes, verbosity);

    // Arrival-sorted, so position breaks ties between equal arrivals by input order
    let mut pending = state.arrival_order();
    let mut clock = 0;

    while !pending.is_empty() {
        let chosen = pending
            .iter()
            .enumerate()
            .filter(|&(_, &idx)| processes[idx].arrival_time <= clock)
            .min_by_key(|&(pos, &idx)| {
                let p = &processes[idx];
                (p.burst_time, p.arrival_time, pos)
            })
            .map(|(pos, _)| pos);

        let Some(pos) = chosen else {
            // pending is arrival-sorted, so its head is the next arrival
            let next = processes[pending[0]].arrival_time;
            log_changes!(verbosity, "t={}: idle until {}", clock, next);
            clock = next;
            continue;
        };

        let idx = pending.remove(pos);
        log_checks!(
            verbosity,
            "t={}: picked {} (burst={}) from {} pending",
            clock,
            processes[idx].id,
            processes[idx].burst_time,
            pending.len() + 1
        );
        clock = state.run(idx, clock, processes[idx].burst_time);
    }

    state.finish(NAME)
}
