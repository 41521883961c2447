//! LOOK scheduling.

use super::common;
use super::Direction;
use crate::track::Track;
use crate::trace::Trace;

/// SCAN without boundary visits: the head sweeps in `direction` servicing
/// requests in track order and reverses at the last pending request instead
/// of the domain boundary.
///
/// The trace never reaches track 0 or the top track unless a request sits
/// there, so no `disk_max` parameter applies.
pub fn simulate(workload: &[Track], head_start: Track, direction: Direction) -> Trace {
    let mut trace = Trace::new();
    let (mut ahead, mut behind) = common::split_by_head(workload, head_start, direction);
    common::sort_for_sweep(&mut ahead, direction);
    common::sort_for_sweep(&mut behind, direction.opposite());

    let mut head = head_start;
    for (index, track) in ahead {
        trace.record(&mut head, track, Some(index));
    }
    for (index, track) in behind {
        trace.record(&mut head, track, Some(index));
    }
    trace
}
