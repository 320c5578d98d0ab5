//! Phase counters for the three core procedures, enabled by the `profiling`
//! cargo feature.
//!
//! Counters are global and cheap (relaxed atomics): each procedure records
//! one call plus the number of vertices it settled or witnessed. Tests and
//! benchmarks read them through [`snapshot`] after a [`reset`].

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    BaseCase,
    FindPivots,
    Bmssp,
}

#[derive(Debug)]
struct PhaseCounters {
    calls: AtomicU64,
    settled: AtomicU64,
}

impl PhaseCounters {
    const fn new() -> Self {
        PhaseCounters {
            calls: AtomicU64::new(0),
            settled: AtomicU64::new(0),
        }
    }
}

static BASE_CASE: PhaseCounters = PhaseCounters::new();
static FIND_PIVOTS: PhaseCounters = PhaseCounters::new();
static BMSSP: PhaseCounters = PhaseCounters::new();

fn counters(phase: Phase) -> &'static PhaseCounters {
    match phase {
        Phase::BaseCase => &BASE_CASE,
        Phase::FindPivots => &FIND_PIVOTS,
        Phase::Bmssp => &BMSSP,
    }
}

/// Records one invocation of `phase` that settled `settled` vertices.
pub fn record(phase: Phase, settled: u64) {
    let c = counters(phase);
    c.calls.fetch_add(1, Ordering::Relaxed);
    c.settled.fetch_add(settled, Ordering::Relaxed);
}

/// Zeroes all counters.
pub fn reset() {
    for phase in [Phase::BaseCase, Phase::FindPivots, Phase::Bmssp] {
        let c = counters(phase);
        c.calls.store(0, Ordering::Relaxed);
        c.settled.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time copy of every phase counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub base_case_calls: u64,
    pub base_case_settled: u64,
    pub find_pivots_calls: u64,
    pub find_pivots_witnessed: u64,
    pub bmssp_calls: u64,
    pub bmssp_settled: u64,
}

pub fn snapshot() -> Snapshot {
    Snapshot {
        base_case_calls: BASE_CASE.calls.load(Ordering::Relaxed),
        base_case_settled: BASE_CASE.settled.load(Ordering::Relaxed),
        find_pivots_calls: FIND_PIVOTS.calls.load(Ordering::Relaxed),
        find_pivots_witnessed: FIND_PIVOTS.settled.load(Ordering::Relaxed),
        bmssp_calls: BMSSP.calls.load(Ordering::Relaxed),
        bmssp_settled: BMSSP.settled.load(Ordering::Relaxed),
    }
}
