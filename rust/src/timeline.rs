//! Gantt timeline accumulation with coalescing of back-to-back runs.

use crate::models::{GanttSegment, Time};

/// Ordered, non-overlapping execution intervals for a single CPU.
///
/// Invariant: segments are sorted by start, never overlap, and no two
/// neighbours belong to the same process while touching end-to-start.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    segments: Vec<GanttSegment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `process_id` ran during `[start, end)`.
    ///
    /// Extends the last segment when the same process continues with no gap,
    /// otherwise opens a new one. Empty intervals are ignored.
    pub fn record(&mut self, process_id: &str, start: Time, end: Time) {
        if end <= start {
            return;
        }

        if let Some(last) = self.segments.last_mut() {
            debug_assert!(
                start >= last.end,
                "interval {start}..{end} for {process_id} overlaps segment ending at {}",
                last.end
            );
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }

        self.segments.push(GanttSegment::new(process_id, start, end));
    }

    /// Process currently holding the tail of the timeline, if it ends at `at`.
    pub fn running_at(&self, at: Time) -> Option<&str> {
        self.segments
            .last()
            .filter(|s| s.end == at)
            .map(|s| s.process_id.as_str())
    }

    /// Total CPU time covered by segments.
    pub fn busy_time(&self) -> Time {
        self.segments.iter().map(GanttSegment::duration).sum()
    }

    pub fn segments(&self) -> &[GanttSegment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<GanttSegment> {
        self.segments
    }
}
