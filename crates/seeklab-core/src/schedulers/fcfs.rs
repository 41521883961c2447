//! First-Come-First-Served scheduling.

use crate::track::Track;
use crate::trace::Trace;

/// Services requests strictly in input order, regardless of position.
pub fn simulate(workload: &[Track], head_start: Track) -> Trace {
    let mut trace = Trace::new();
    let mut head = head_start;
    for (index, &track) in workload.iter().enumerate() {
        trace.record(&mut head, track, Some(index));
    }
    trace
}
