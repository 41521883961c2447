//! Head movement trace produced by a single simulation run.

use serde::Serialize;

use crate::track::{seek_distance, Track};

/// One atomic head movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Track the head moves from.
    pub from: Track,
    /// Track the head moves to.
    pub to: Track,
    /// Head travel charged for this movement.
    ///
    /// Equals the seek distance between `from` and `to`, except for an
    /// uncounted wraparound jump which carries zero.
    pub distance: u64,
    /// Index of the satisfied request within the input workload, or `None`
    /// for boundary visits and wraparound jumps.
    pub served: Option<usize>,
}

impl Step {
    /// Creates a step charged with the seek distance between `from` and `to`.
    pub fn new(from: Track, to: Track, served: Option<usize>) -> Self {
        Self {
            from,
            to,
            distance: seek_distance(from, to),
            served,
        }
    }
}

/// Row format of the trace export contract.
///
/// Every step maps to one record, non-serving steps included — they
/// represent real head movement. Sequence numbers are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// Position of the step within the trace.
    pub seq: usize,
    /// Track the head moved from.
    pub from: Track,
    /// Track the head moved to.
    pub to: Track,
    /// Head travel charged for the movement.
    pub distance: u64,
}

/// The complete ordered record of head movements produced by one run.
///
/// The first step starts at the initial head position and each subsequent
/// step starts where the previous one ended. A trace is owned solely by its
/// caller and is never retained or mutated by the engine after being
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Trace {
    /// Steps in chronological order of head movement.
    pub steps: Vec<Step>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a movement from the current head position to `to` and
    /// advances the head.
    pub(crate) fn record(&mut self, head: &mut Track, to: Track, served: Option<usize>) {
        self.steps.push(Step::new(*head, to, served));
        *head = to;
    }

    /// Appends a non-serving wraparound jump to `to` with an explicitly
    /// charged distance and advances the head.
    pub(crate) fn record_jump(&mut self, head: &mut Track, to: Track, distance: u64) {
        self.steps.push(Step {
            from: *head,
            to,
            distance,
            served: None,
        });
        *head = to;
    }

    /// Maps each step to its export record, in trace order.
    pub fn export_records(&self) -> Vec<TraceRecord> {
        self.steps
            .iter()
            .enumerate()
            .map(|(seq, step)| TraceRecord {
                seq,
                from: step.from,
                to: step.to,
                distance: step.distance,
            })
            .collect()
    }
}
