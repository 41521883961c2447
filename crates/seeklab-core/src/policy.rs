//! Scheduling policy selection and dispatch.

use std::fmt;
use std::str::FromStr;

use enum_iterator::IntoEnumIterator;

use crate::schedulers::{clook, cscan, fcfs, look, scan, sstf, Direction};
use crate::track::Track;
use crate::trace::Trace;

/// The closed set of supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoEnumIterator)]
pub enum PolicyKind {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Seek Time First.
    Sstf,
    /// Elevator sweep with one reversal.
    Scan,
    /// Circular sweep with a wraparound jump.
    CScan,
    /// SCAN reversing at the last pending request.
    Look,
    /// C-SCAN flying back to the extreme pending request.
    CLook,
}

impl PolicyKind {
    /// Operator-facing name of the discipline.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sstf => "SSTF",
            PolicyKind::Scan => "SCAN",
            PolicyKind::CScan => "C-SCAN",
            PolicyKind::Look => "LOOK",
            PolicyKind::CLook => "C-LOOK",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FCFS" => Ok(PolicyKind::Fcfs),
            "SSTF" => Ok(PolicyKind::Sstf),
            "SCAN" => Ok(PolicyKind::Scan),
            "C-SCAN" | "CSCAN" => Ok(PolicyKind::CScan),
            "LOOK" => Ok(PolicyKind::Look),
            "C-LOOK" | "CLOOK" => Ok(PolicyKind::CLook),
            _ => Err(format!("unknown scheduling algorithm: {}", s)),
        }
    }
}

/// A scheduling discipline together with its configuration.
///
/// Each variant carries only the parameters its discipline consults, so an
/// illegal combination (say, an edge flag for FCFS) is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingPolicy {
    /// Requests are serviced strictly in arrival order.
    Fcfs,
    /// The nearest pending request is serviced next, ties towards the lower
    /// original index.
    Sstf,
    /// Elevator sweep, one reversal.
    Scan {
        /// Initial sweep direction.
        direction: Direction,
        /// Travel to the domain boundary before reversing.
        use_edge: bool,
    },
    /// Circular sweep with a wraparound jump to the opposite boundary.
    CScan {
        /// Initial sweep direction.
        direction: Direction,
        /// Charge the wraparound jump as head movement.
        count_jump: bool,
    },
    /// SCAN reversing at the last pending request instead of the boundary.
    Look {
        /// Initial sweep direction.
        direction: Direction,
    },
    /// C-SCAN flying back to the extreme pending request instead of the
    /// boundary.
    CLook {
        /// Initial sweep direction.
        direction: Direction,
    },
}

impl SchedulingPolicy {
    /// Builds a configured policy from a discipline name and the full set of
    /// knobs, keeping only those that apply to the discipline.
    ///
    /// Unapplicable parameters are ignored, not errors.
    pub fn from_kind(kind: PolicyKind, direction: Direction, use_edge: bool, count_jump: bool) -> Self {
        match kind {
            PolicyKind::Fcfs => SchedulingPolicy::Fcfs,
            PolicyKind::Sstf => SchedulingPolicy::Sstf,
            PolicyKind::Scan => SchedulingPolicy::Scan { direction, use_edge },
            PolicyKind::CScan => SchedulingPolicy::CScan { direction, count_jump },
            PolicyKind::Look => SchedulingPolicy::Look { direction },
            PolicyKind::CLook => SchedulingPolicy::CLook { direction },
        }
    }

    /// Discipline implemented by this policy.
    pub fn kind(&self) -> PolicyKind {
        match self {
            SchedulingPolicy::Fcfs => PolicyKind::Fcfs,
            SchedulingPolicy::Sstf => PolicyKind::Sstf,
            SchedulingPolicy::Scan { .. } => PolicyKind::Scan,
            SchedulingPolicy::CScan { .. } => PolicyKind::CScan,
            SchedulingPolicy::Look { .. } => PolicyKind::Look,
            SchedulingPolicy::CLook { .. } => PolicyKind::CLook,
        }
    }

    /// Runs the policy on the given workload and returns the produced trace.
    ///
    /// `disk_max` bounds the track domain and is only consulted by the
    /// boundary-visiting disciplines. The workload is expected to be
    /// pre-validated: every track within `[0, disk_max]`.
    pub fn simulate(&self, workload: &[Track], head_start: Track, disk_max: Track) -> Trace {
        match *self {
            SchedulingPolicy::Fcfs => fcfs::simulate(workload, head_start),
            SchedulingPolicy::Sstf => sstf::simulate(workload, head_start),
            SchedulingPolicy::Scan { direction, use_edge } => {
                scan::simulate(workload, head_start, disk_max, direction, use_edge)
            }
            SchedulingPolicy::CScan { direction, count_jump } => {
                cscan::simulate(workload, head_start, disk_max, direction, count_jump)
            }
            SchedulingPolicy::Look { direction } => look::simulate(workload, head_start, direction),
            SchedulingPolicy::CLook { direction } => clook::simulate(workload, head_start, direction),
        }
    }
}
