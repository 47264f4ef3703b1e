//! First-Come-First-Served: non-preemptive, in arrival order.

use crate::log_changes;
use crate::models::{Process, SimulationResult};

use super::state::SimState;
use super::{validate_processes, SimulationError};

pub const NAME: &str = "FCFS";

pub fn simulate(
    processes: &[Process],
    verbosity: u8,
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes)?;
    let mut state = SimState::new(processes, verbosity);

    let mut clock = 0;
    for idx in state.arrival_order() {
        let process = &processes[idx];
        if clock < process.arrival_time {
            log_changes!(verbosity, "t={}: idle until {}", clock, process.arrival_time);
            clock = process.arrival_time;
        }
        clock = state.run(idx, clock, process.burst_time);
    }

    state.finish(NAME)
}
