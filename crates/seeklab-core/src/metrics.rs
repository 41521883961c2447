//! Aggregate trace statistics.

use serde::Serialize;

use crate::trace::Trace;

/// Aggregate performance metrics derived from a [`Trace`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// Total head travel, including boundary visits and counted jumps.
    pub total_movement: u64,
    /// Average seek distance per serviced request.
    ///
    /// Zero when the trace services no requests.
    pub avg_seek: f64,
    /// Number of serviced requests.
    pub served_count: usize,
}

impl Metrics {
    /// Reduces a trace to its aggregate statistics.
    pub fn from_trace(trace: &Trace) -> Self {
        let total_movement = trace.steps.iter().map(|step| step.distance).sum();
        let served_count = trace.steps.iter().filter(|step| step.served.is_some()).count();
        let avg_seek = if served_count > 0 {
            total_movement as f64 / served_count as f64
        } else {
            0.
        };
        Self {
            total_movement,
            avg_seek,
            served_count,
        }
    }
}
