//! Helpers shared by the sweep-based algorithms.

use super::Direction;
use crate::track::Track;

/// A request paired with its index in the original workload.
pub(super) type IndexedRequest = (usize, Track);

/// Splits the workload into the requests lying on the initial sweep side of
/// `head` and the remaining requests.
///
/// A request sitting exactly on the head track belongs to the initial sweep.
/// Both halves keep the input order.
pub(super) fn split_by_head(
    workload: &[Track],
    head: Track,
    direction: Direction,
) -> (Vec<IndexedRequest>, Vec<IndexedRequest>) {
    let mut ahead = Vec::new();
    let mut behind = Vec::new();
    for (index, &track) in workload.iter().enumerate() {
        let is_ahead = match direction {
            Direction::Up => track >= head,
            Direction::Down => track <= head,
        };
        if is_ahead {
            ahead.push((index, track));
        } else {
            behind.push((index, track));
        }
    }
    (ahead, behind)
}

/// Orders requests by track for servicing in the given sweep direction.
///
/// The sort is stable, so requests on equal tracks are serviced in input
/// order in both directions.
pub(super) fn sort_for_sweep(requests: &mut [IndexedRequest], direction: Direction) {
    match direction {
        Direction::Up => requests.sort_by(|a, b| a.1.cmp(&b.1)),
        Direction::Down => requests.sort_by(|a, b| b.1.cmp(&a.1)),
    }
}
