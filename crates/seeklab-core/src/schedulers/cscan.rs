//! C-SCAN (circular SCAN) scheduling.

use super::common;
use super::Direction;
use crate::track::Track;
use crate::trace::Trace;

/// Sweeps the head in `direction` up to the far domain boundary servicing
/// requests in track order, jumps back to the opposite boundary and services
/// the remainder in a second same-direction pass.
///
/// The boundary visit and the wraparound jump are recorded as non-serving
/// steps even when no requests remain on the far side, so export and
/// animation layers see the full circular motion. With `count_jump` the jump
/// is charged its `disk_max` travel, otherwise it carries zero distance and
/// does not affect the movement metrics.
pub fn simulate(
    workload: &[Track],
    head_start: Track,
    disk_max: Track,
    direction: Direction,
    count_jump: bool,
) -> Trace {
    let mut trace = Trace::new();
    if workload.is_empty() {
        return trace;
    }
    let (mut ahead, mut behind) = common::split_by_head(workload, head_start, direction);
    common::sort_for_sweep(&mut ahead, direction);
    common::sort_for_sweep(&mut behind, direction);

    let (sweep_end, sweep_restart) = match direction {
        Direction::Up => (disk_max, 0),
        Direction::Down => (0, disk_max),
    };
    let mut head = head_start;
    for (index, track) in ahead {
        trace.record(&mut head, track, Some(index));
    }
    if head != sweep_end {
        trace.record(&mut head, sweep_end, None);
    }
    let jump_distance = if count_jump { disk_max } else { 0 };
    trace.record_jump(&mut head, sweep_restart, jump_distance);
    for (index, track) in behind {
        trace.record(&mut head, track, Some(index));
    }
    trace
}
