//! SCAN (elevator) scheduling.

use super::common;
use super::Direction;
use crate::track::Track;
use crate::trace::Trace;

/// Sweeps the head in `direction` servicing requests in track order, then
/// reverses once and services the remaining requests in the opposite order.
///
/// With `use_edge` the head first travels to the domain boundary (`disk_max`
/// when sweeping up, track 0 when sweeping down), recorded as a non-serving
/// step, before reversing; otherwise it reverses at the last serviced
/// request. No boundary step is recorded when the sweep already ends on the
/// boundary track.
pub fn simulate(
    workload: &[Track],
    head_start: Track,
    disk_max: Track,
    direction: Direction,
    use_edge: bool,
) -> Trace {
    let mut trace = Trace::new();
    if workload.is_empty() {
        return trace;
    }
    let (mut ahead, mut behind) = common::split_by_head(workload, head_start, direction);
    common::sort_for_sweep(&mut ahead, direction);
    common::sort_for_sweep(&mut behind, direction.opposite());

    let mut head = head_start;
    for (index, track) in ahead {
        trace.record(&mut head, track, Some(index));
    }
    if use_edge {
        let edge = match direction {
            Direction::Up => disk_max,
            Direction::Down => 0,
        };
        if head != edge {
            trace.record(&mut head, edge, None);
        }
    }
    for (index, track) in behind {
        trace.record(&mut head, track, Some(index));
    }
    trace
}
