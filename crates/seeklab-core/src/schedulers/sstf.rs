//! Shortest Seek Time First scheduling.

use crate::track::{seek_distance, Track};
use crate::trace::Trace;

/// Repeatedly services the pending request closest to the current head
/// position.
///
/// Ties are broken towards the lower original index, so repeated runs on the
/// same workload produce identical traces. The input workload is left
/// untouched, pending requests are tracked by index.
pub fn simulate(workload: &[Track], head_start: Track) -> Trace {
    let mut trace = Trace::new();
    let mut head = head_start;
    let mut pending: Vec<usize> = (0..workload.len()).collect();
    while !pending.is_empty() {
        let (pos, &index) = pending
            .iter()
            .enumerate()
            .min_by_key(|&(_, &index)| seek_distance(workload[index], head))
            .unwrap();
        trace.record(&mut head, workload[index], Some(index));
        pending.remove(pos);
    }
    trace
}
