use approx::assert_abs_diff_eq;
use enum_iterator::IntoEnumIterator;

use crate::metrics::Metrics;
use crate::policy::{PolicyKind, SchedulingPolicy};
use crate::schedulers::{clook, cscan, fcfs, look, scan, sstf, Direction};
use crate::track::{in_range, seek_distance, Track};
use crate::trace::{Step, Trace, TraceRecord};

///////////////////////////////////////////////////////////////////////////////

const WORKLOAD: [Track; 8] = [95, 180, 34, 119, 11, 123, 62, 64];
const HEAD_START: Track = 50;
const DISK_MAX: Track = 199;

///////////////////////////////////////////////////////////////////////////////

fn visited_tracks(trace: &Trace) -> Vec<Track> {
    trace.steps.iter().map(|step| step.to).collect()
}

fn served_indices(trace: &Trace) -> Vec<usize> {
    trace.steps.iter().filter_map(|step| step.served).collect()
}

fn assert_continuous(trace: &Trace, head_start: Track) {
    if trace.steps.is_empty() {
        return;
    }
    assert_eq!(trace.steps[0].from, head_start);
    for pair in trace.steps.windows(2) {
        assert_eq!(pair[1].from, pair[0].to);
    }
}

// Every discipline in every distinct configuration.
fn policies_under_test() -> Vec<SchedulingPolicy> {
    let mut policies = Vec::new();
    for kind in PolicyKind::into_enum_iter() {
        for direction in [Direction::Up, Direction::Down] {
            for flag in [false, true] {
                policies.push(SchedulingPolicy::from_kind(kind, direction, flag, flag));
            }
        }
    }
    policies.dedup();
    policies
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn track_domain_primitives() {
    assert_eq!(seek_distance(5, 9), 4);
    assert_eq!(seek_distance(9, 5), 4);
    assert_eq!(seek_distance(7, 7), 0);
    assert!(in_range(0, DISK_MAX));
    assert!(in_range(DISK_MAX, DISK_MAX));
    assert!(!in_range(DISK_MAX + 1, DISK_MAX));
}

#[test]
fn fcfs_preserves_input_order() {
    let trace = fcfs::simulate(&WORKLOAD, HEAD_START);
    assert_eq!(visited_tracks(&trace), WORKLOAD.to_vec());
    assert_eq!(served_indices(&trace), (0..WORKLOAD.len()).collect::<Vec<_>>());
    let metrics = Metrics::from_trace(&trace);
    assert_eq!(metrics.total_movement, 644);
    assert_eq!(metrics.served_count, 8);
    assert_abs_diff_eq!(metrics.avg_seek, 80.5);
}

#[test]
fn sstf_services_nearest_request_first() {
    let trace = sstf::simulate(&WORKLOAD, HEAD_START);
    assert_eq!(visited_tracks(&trace), vec![62, 64, 34, 11, 95, 119, 123, 180]);
    assert_eq!(served_indices(&trace), vec![6, 7, 2, 4, 0, 3, 5, 1]);
    assert_eq!(Metrics::from_trace(&trace).total_movement, 236);
}

#[test]
fn sstf_breaks_ties_towards_lower_index() {
    let trace = sstf::simulate(&[50, 50], 0);
    assert_eq!(served_indices(&trace), vec![0, 1]);
}

#[test]
fn duplicate_requests_are_distinct() {
    let trace = fcfs::simulate(&[50, 50], 50);
    assert_eq!(trace.steps.len(), 2);
    assert_eq!(trace.steps[0].distance, 0);
    assert_eq!(trace.steps[1].distance, 0);
    assert_eq!(served_indices(&trace), vec![0, 1]);
}

#[test]
fn scan_visits_edge_before_reversing() {
    let trace = scan::simulate(&WORKLOAD, HEAD_START, DISK_MAX, Direction::Up, true);
    assert_eq!(visited_tracks(&trace), vec![62, 64, 95, 119, 123, 180, 199, 34, 11]);
    assert_eq!(trace.steps[6], Step::new(180, DISK_MAX, None));
    assert_eq!(served_indices(&trace).len(), 8);
    assert_eq!(Metrics::from_trace(&trace).total_movement, 337);
}

#[test]
fn scan_without_edge_reverses_at_last_request() {
    let trace = scan::simulate(&WORKLOAD, HEAD_START, DISK_MAX, Direction::Up, false);
    assert_eq!(visited_tracks(&trace), vec![62, 64, 95, 119, 123, 180, 34, 11]);
    assert!(trace.steps.iter().all(|step| step.served.is_some()));
    assert_eq!(Metrics::from_trace(&trace).total_movement, 299);
}

#[test]
fn scan_sweeps_down_to_lower_edge() {
    let trace = scan::simulate(&WORKLOAD, HEAD_START, DISK_MAX, Direction::Down, true);
    assert_eq!(visited_tracks(&trace), vec![34, 11, 0, 62, 64, 95, 119, 123, 180]);
    assert_eq!(trace.steps[2], Step::new(11, 0, None));
    assert_eq!(Metrics::from_trace(&trace).total_movement, 230);
}

#[test]
fn scan_omits_edge_step_when_boundary_is_requested() {
    let trace = scan::simulate(&[199, 30], HEAD_START, DISK_MAX, Direction::Up, true);
    assert_eq!(visited_tracks(&trace), vec![199, 30]);
    assert_eq!(trace.steps[0].served, Some(0));
}

#[test]
fn cscan_jump_accounting() {
    let free = cscan::simulate(&WORKLOAD, HEAD_START, DISK_MAX, Direction::Up, false);
    let charged = cscan::simulate(&WORKLOAD, HEAD_START, DISK_MAX, Direction::Up, true);
    let expected = vec![62, 64, 95, 119, 123, 180, 199, 0, 11, 34];
    assert_eq!(visited_tracks(&free), expected);
    assert_eq!(visited_tracks(&charged), expected);

    assert_eq!(free.steps[7].from, DISK_MAX);
    assert_eq!(free.steps[7].to, 0);
    assert_eq!(free.steps[7].served, None);
    assert_eq!(free.steps[7].distance, 0);
    assert_eq!(charged.steps[7].distance, DISK_MAX);

    assert_eq!(Metrics::from_trace(&free).total_movement, 183);
    assert_eq!(Metrics::from_trace(&charged).total_movement, 382);
}

#[test]
fn cscan_sweeps_down_and_restarts_from_top() {
    let trace = cscan::simulate(&WORKLOAD, HEAD_START, DISK_MAX, Direction::Down, false);
    assert_eq!(visited_tracks(&trace), vec![34, 11, 0, 199, 180, 123, 119, 95, 64, 62]);
    assert_eq!(Metrics::from_trace(&trace).total_movement, 187);
    let charged = cscan::simulate(&WORKLOAD, HEAD_START, DISK_MAX, Direction::Down, true);
    assert_eq!(Metrics::from_trace(&charged).total_movement, 386);
}

#[test]
fn cscan_flyback_is_emitted_without_pending_far_requests() {
    let trace = cscan::simulate(&[60], HEAD_START, DISK_MAX, Direction::Up, false);
    assert_eq!(visited_tracks(&trace), vec![60, 199, 0]);
    assert_eq!(served_indices(&trace), vec![0]);
}

#[test]
fn look_never_visits_boundary() {
    let up = look::simulate(&WORKLOAD, HEAD_START, Direction::Up);
    assert_eq!(visited_tracks(&up), vec![62, 64, 95, 119, 123, 180, 34, 11]);
    assert_eq!(Metrics::from_trace(&up).total_movement, 299);

    let down = look::simulate(&WORKLOAD, HEAD_START, Direction::Down);
    assert_eq!(visited_tracks(&down), vec![34, 11, 62, 64, 95, 119, 123, 180]);
    assert_eq!(Metrics::from_trace(&down).total_movement, 208);

    for trace in [up, down] {
        assert!(trace.steps.iter().all(|step| step.to != 0 && step.to != DISK_MAX));
        assert!(trace.steps.iter().all(|step| step.served.is_some()));
    }
}

#[test]
fn clook_flyback_services_extreme_far_request() {
    let trace = clook::simulate(&WORKLOAD, HEAD_START, Direction::Up);
    assert_eq!(visited_tracks(&trace), vec![62, 64, 95, 119, 123, 180, 11, 34]);
    assert_eq!(trace.steps[6].from, 180);
    assert_eq!(trace.steps[6].to, 11);
    assert_eq!(trace.steps[6].distance, 169);
    assert_eq!(trace.steps[6].served, Some(4));
    assert!(trace.steps.iter().all(|step| step.served.is_some()));
    assert_eq!(Metrics::from_trace(&trace).total_movement, 322);
}

#[test]
fn clook_sweeps_down_and_restarts_from_highest_request() {
    let trace = clook::simulate(&WORKLOAD, HEAD_START, Direction::Down);
    assert_eq!(visited_tracks(&trace), vec![34, 11, 180, 123, 119, 95, 64, 62]);
    assert_eq!(Metrics::from_trace(&trace).total_movement, 326);
}

#[test]
fn empty_workload_yields_empty_trace_and_zero_metrics() {
    for policy in policies_under_test() {
        let trace = policy.simulate(&[], HEAD_START, DISK_MAX);
        assert!(trace.steps.is_empty(), "{:?} produced steps for an empty workload", policy);
        let metrics = Metrics::from_trace(&trace);
        assert_eq!(metrics.total_movement, 0);
        assert_eq!(metrics.served_count, 0);
        assert_abs_diff_eq!(metrics.avg_seek, 0.);
    }
}

#[test]
fn traces_are_continuous() {
    for policy in policies_under_test() {
        let trace = policy.simulate(&WORKLOAD, HEAD_START, DISK_MAX);
        assert_continuous(&trace, HEAD_START);
    }
}

#[test]
fn identical_inputs_yield_identical_traces() {
    for policy in policies_under_test() {
        let first = policy.simulate(&WORKLOAD, HEAD_START, DISK_MAX);
        let second = policy.simulate(&WORKLOAD, HEAD_START, DISK_MAX);
        assert_eq!(first, second);
    }
}

#[test]
fn metrics_match_trace_contents() {
    for policy in policies_under_test() {
        let trace = policy.simulate(&WORKLOAD, HEAD_START, DISK_MAX);
        let metrics = Metrics::from_trace(&trace);
        assert_eq!(
            metrics.total_movement,
            trace.steps.iter().map(|step| step.distance).sum::<u64>()
        );
        assert_eq!(
            metrics.served_count,
            trace.steps.iter().filter(|step| step.served.is_some()).count()
        );
    }
}

#[test]
fn metrics_guard_division_for_non_serving_trace() {
    let trace = Trace {
        steps: vec![Step::new(0, DISK_MAX, None)],
    };
    let metrics = Metrics::from_trace(&trace);
    assert_eq!(metrics.total_movement, DISK_MAX);
    assert_eq!(metrics.served_count, 0);
    assert_abs_diff_eq!(metrics.avg_seek, 0.);
}

#[test]
fn export_includes_non_serving_rows() {
    let trace = scan::simulate(&WORKLOAD, HEAD_START, DISK_MAX, Direction::Up, true);
    let records = trace.export_records();
    assert_eq!(records.len(), trace.steps.len());
    assert_eq!(
        records[6],
        TraceRecord {
            seq: 6,
            from: 180,
            to: 199,
            distance: 19,
        }
    );
    for (position, record) in records.iter().enumerate() {
        assert_eq!(record.seq, position);
        assert_eq!(record.from, trace.steps[position].from);
        assert_eq!(record.to, trace.steps[position].to);
        assert_eq!(record.distance, trace.steps[position].distance);
    }
}

#[test]
fn policy_resolution_ignores_unapplicable_parameters() {
    assert_eq!(
        SchedulingPolicy::from_kind(PolicyKind::Fcfs, Direction::Down, true, true),
        SchedulingPolicy::Fcfs
    );
    assert_eq!(
        SchedulingPolicy::from_kind(PolicyKind::Look, Direction::Down, true, true),
        SchedulingPolicy::Look {
            direction: Direction::Down
        }
    );
    for kind in PolicyKind::into_enum_iter() {
        let policy = SchedulingPolicy::from_kind(kind, Direction::Up, true, false);
        assert_eq!(policy.kind(), kind);
    }
}

#[test]
fn policy_names_resolve() {
    for kind in PolicyKind::into_enum_iter() {
        assert_eq!(kind.name().parse::<PolicyKind>(), Ok(kind));
    }
    assert_eq!("c-scan".parse::<PolicyKind>(), Ok(PolicyKind::CScan));
    assert_eq!("CSCAN".parse::<PolicyKind>(), Ok(PolicyKind::CScan));
    assert_eq!("clook".parse::<PolicyKind>(), Ok(PolicyKind::CLook));
    assert!("elevator".parse::<PolicyKind>().is_err());
    assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
    assert!("sideways".parse::<Direction>().is_err());
}
