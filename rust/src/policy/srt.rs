//! Shortest-Remaining-Time: preemptive, re-evaluated every time unit.

use crate::models::{Process, SimulationResult};
use crate::{log_changes, log_checks};

use super::state::SimState;
use super::{validate_processes, SimulationError};

pub const NAME: &str = "SRT";

pub fn simulate(
    processes: &[Process],
    verbosity: u8,
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes)?;
    let mut state = SimState::new(processes, verbosity);

    let mut clock = 0;
    let mut previous: Option<usize> = None;

    while !state.all_done() {
        // Ties: the process already on the CPU, then earliest arrival, then input order
        let chosen = (0..processes.len())
            .filter(|&idx| !state.is_done(idx) && processes[idx].arrival_time <= clock)
            .min_by_key(|&idx| {
                (
                    state.remaining[idx],
                    previous != Some(idx),
                    processes[idx].arrival_time,
                    idx,
                )
            });

        let Some(idx) = chosen else {
            // Unreachable for validated input: an unfinished process that is
            // not ready yet must arrive later. Bail out and let finish() report it.
            let Some(next) = state.next_arrival_after(clock) else {
                debug_assert!(false, "t={clock}: unfinished processes but no future arrival");
                break;
            };
            log_changes!(verbosity, "t={}: idle until {}", clock, next);
            clock = next;
            continue;
        };

        if let Some(prev) = previous.filter(|&prev| prev != idx && !state.is_done(prev)) {
            log_changes!(
                verbosity,
                "t={}: {} (remaining={}) preempts {} (remaining={})",
                clock,
                state.id(idx),
                state.remaining[idx],
                state.id(prev),
                state.remaining[prev]
            );
        } else if previous != Some(idx) {
            log_checks!(
                verbosity,
                "t={}: {} has shortest remaining time {}",
                clock,
                state.id(idx),
                state.remaining[idx]
            );
        }

        // Decrement, advance the clock, then test for zero
        clock = state.run(idx, clock, 1);
        previous = Some(idx);
    }

    state.finish(NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GanttSegment, Time};

    fn p(id: &str, arrival: Time, burst: Time) -> Process {
        Process::new(id, arrival, burst)
    }

    #[test]
    fn test_preemption_on_shorter_arrival() {
        let processes = vec![p("P1", 0, 8), p("P2", 1, 4)];
        let result = simulate(&processes, 0).unwrap();

        assert_eq!(
            result.segments,
            vec![
                GanttSegment::new("P1", 0, 1),
                GanttSegment::new("P2", 1, 5),
                GanttSegment::new("P1", 5, 12),
            ]
        );
        let p1 = result.process("P1").unwrap();
        let p2 = result.process("P2").unwrap();
        assert_eq!(p1.waiting_time, 4);
        assert_eq!(p1.completion_time, 12);
        assert_eq!(p1.response_time, 0);
        assert_eq!(p2.waiting_time, 0);
        assert_eq!(p2.completion_time, 5);
    }

    #[test]
    fn test_equal_remaining_does_not_preempt() {
        // At t=2, A has 3 left and B arrives needing 3: A keeps the CPU
        let processes = vec![p("A", 0, 5), p("B", 2, 3)];
        let result = simulate(&processes, 0).unwrap();

        assert_eq!(result.gantt_chart(), "A (0–5) → B (5–8)");
    }

    #[test]
    fn test_tie_between_waiting_processes_prefers_earlier_arrival() {
        // X finishes at 2; Y and Z both have 4 remaining, Z arrived earlier
        let processes = vec![p("X", 0, 2), p("Y", 1, 4), p("Z", 0, 4)];
        let result = simulate(&processes, 0).unwrap();

        assert_eq!(result.gantt_chart(), "X (0–2) → Z (2–6) → Y (6–10)");
    }

    #[test]
    fn test_completion_counts_the_final_unit() {
        let processes = vec![p("A", 3, 1)];
        let result = simulate(&processes, 0).unwrap();

        let a = &result.processes[0];
        assert_eq!(a.start_time, 3);
        assert_eq!(a.completion_time, 4);
        assert_eq!(a.turnaround_time, 1);
        assert_eq!(a.waiting_time, 0);
    }

    #[test]
    fn test_idle_gap_between_processes() {
        let processes = vec![p("A", 0, 2), p("B", 5, 2)];
        let result = simulate(&processes, 0).unwrap();

        assert_eq!(
            result.segments,
            vec![GanttSegment::new("A", 0, 2), GanttSegment::new("B", 5, 7)]
        );
    }
}
