//! C-LOOK (circular LOOK) scheduling.

use super::common;
use super::Direction;
use crate::track::Track;
use crate::trace::Trace;

/// C-SCAN without boundary visits: after the first pass the head flies back
/// directly to the extreme pending request on the far side and continues
/// servicing in the original direction from there.
///
/// The flyback lands on a request, so it is recorded as an ordinary serving
/// step and is always charged as head movement; C-LOOK produces no
/// non-serving steps.
pub fn simulate(workload: &[Track], head_start: Track, direction: Direction) -> Trace {
    let mut trace = Trace::new();
    let (mut ahead, mut behind) = common::split_by_head(workload, head_start, direction);
    common::sort_for_sweep(&mut ahead, direction);
    common::sort_for_sweep(&mut behind, direction);

    let mut head = head_start;
    for (index, track) in ahead {
        trace.record(&mut head, track, Some(index));
    }
    for (index, track) in behind {
        trace.record(&mut head, track, Some(index));
    }
    trace
}
