//! Round Robin: preemptive, fixed quantum, FIFO ready queue.
//!
//! Ordering at a quantum boundary: processes that arrived by the end of the
//! slice are queued before the preempted process goes back to the tail, so a
//! newcomer arriving exactly when a quantum expires runs first.

use std::collections::VecDeque;

use crate::models::{Process, SimulationResult, Time};
use crate::{log_changes, log_debug};

use super::state::SimState;
use super::{validate_processes, validate_quantum, SimulationError};

pub const NAME: &str = "Round Robin";

pub fn simulate(
    processes: &[Process],
    quantum: Time,
    verbosity: u8,
) -> Result<SimulationResult, SimulationError> {
    validate_quantum(quantum)?;
    validate_processes(processes)?;
    let mut state = SimState::new(processes, verbosity);

    let order = state.arrival_order();
    let mut cursor = 0;
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut clock = processes[order[0]].arrival_time;

    while !state.all_done() {
        admit_arrivals(processes, &order, &mut cursor, clock, &mut queue);

        let Some(idx) = queue.pop_front() else {
            // Unreachable for validated input: an empty queue with work left
            // means some process has not been admitted yet.
            let Some(&next) = order.get(cursor) else {
                debug_assert!(false, "t={clock}: empty queue and no pending arrival");
                break;
            };
            let next_arrival = processes[next].arrival_time;
            log_changes!(verbosity, "t={}: idle until {}", clock, next_arrival);
            clock = next_arrival;
            continue;
        };

        log_debug!(
            verbosity,
            "t={}: running {}, queue {:?}",
            clock,
            state.id(idx),
            queue.iter().map(|&i| state.id(i)).collect::<Vec<_>>()
        );

        let slice = quantum.min(state.remaining[idx]);
        clock = state.run(idx, clock, slice);
        admit_arrivals(processes, &order, &mut cursor, clock, &mut queue);

        if !state.is_done(idx) {
            log_changes!(
                verbosity,
                "t={}: quantum expired for {} (remaining={})",
                clock,
                state.id(idx),
                state.remaining[idx]
            );
            queue.push_back(idx);
        }
    }

    state.finish(NAME)
}

/// Queue every not-yet-admitted process whose arrival is at or before `clock`.
fn admit_arrivals(
    processes: &[Process],
    order: &[usize],
    cursor: &mut usize,
    clock: Time,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&idx) = order.get(*cursor) {
        if processes[idx].arrival_time > clock {
            break;
        }
        queue.push_back(idx);
        *cursor += 1;
    }
}
