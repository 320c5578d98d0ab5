use std::collections::HashSet;
use std::fmt::Debug;

use num_traits::{Float, Zero};
use tracing::trace;

use crate::algorithm::state::DistState;
use crate::algorithm::{base_case, find_pivots};
use crate::data_structures::FrontierQueue;
use crate::graph::Graph;
use crate::params::{compute_k, compute_t, pow2_saturating};

/// Outcome of one recursion frame.
#[derive(Debug)]
pub struct FrameResult<W> {
    /// Refined bound `B' <= B`: the minimum over the bounds returned by the
    /// frame's sub-calls, or the input bound if none refined it.
    pub new_bound: W,
    /// Vertices settled by this frame (its sub-calls plus the witnessed set
    /// of the pivot sweep), deduplicated, in settling order.
    pub settled: Vec<usize>,
}

/// The bounded multi-source shortest path recursion.
///
/// A frame at level `l` reduces its frontier to pivots, seeds a
/// [`FrontierQueue`] with capacity `M = 2^((l-1)·t)`, and repeatedly pulls
/// the `M` smallest candidates, recurses on them at level `l - 1` bounded by
/// the pull boundary, and relaxes outgoing edges of everything the sub-call
/// settled. Level 0 delegates to the truncated base case.
#[derive(Debug, Clone, Copy)]
pub struct Bmssp {
    k: usize,
    t: usize,
}

impl Bmssp {
    /// Parameters derived from the vertex count.
    pub fn new(vertex_count: usize) -> Self {
        Bmssp {
            k: compute_k(vertex_count),
            t: compute_t(vertex_count),
        }
    }

    /// Explicit parameters, mainly for forcing deeper recursion in tests.
    pub fn with_params(k: usize, t: usize) -> Self {
        Bmssp {
            k: k.max(1),
            t: t.max(1),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn t(&self) -> usize {
        self.t
    }

    pub fn run<W, G>(
        &self,
        graph: &G,
        level: usize,
        bound: W,
        frontier: &[usize],
        state: &mut DistState<W>,
    ) -> FrameResult<W>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if frontier.is_empty() {
            return FrameResult {
                new_bound: bound,
                settled: Vec::new(),
            };
        }
        if level == 0 {
            let base = base_case::run(graph, bound, frontier[0], state, self.k);
            return FrameResult {
                new_bound: base.new_bound,
                settled: base.settled,
            };
        }

        trace!(frame_level = level, frontier = frontier.len(), "bmssp frame");
        let reduction = find_pivots::run(graph, bound, frontier, self.k, state);

        let block_size = pow2_saturating((level - 1) * self.t);
        let mut queue = FrontierQueue::new(block_size, bound);
        for &p in &reduction.pivots {
            let d = state.get(p);
            if d < bound {
                queue.insert(p, d);
            }
        }

        let workload_cap = self.k.saturating_mul(pow2_saturating(level * self.t));
        let mut settled: Vec<usize> = Vec::new();
        let mut in_settled: HashSet<usize> = HashSet::new();
        let mut new_bound = bound;
        let mut boundary_batch: Vec<(usize, W)> = Vec::new();

        while !queue.is_empty() {
            let (pulled, sub_bound) = queue.pull();
            if pulled.is_empty() {
                break;
            }
            let sub_frontier: Vec<usize> = pulled.iter().map(|&(v, _)| v).collect();

            let sub = self.run(graph, level - 1, sub_bound, &sub_frontier, state);
            if sub.new_bound < new_bound {
                new_bound = sub.new_bound;
            }

            boundary_batch.clear();
            for &u in &sub.settled {
                if in_settled.insert(u) {
                    settled.push(u);
                }
                let du = state.get(u);
                for &(v, w) in graph.outgoing_edges(u) {
                    if v == u {
                        continue;
                    }
                    let alt = du + w;
                    let dv = state.get(v);
                    if alt < bound && alt <= dv {
                        if alt < dv {
                            state.set(v, alt);
                        }
                        state.set_pred(v, u);
                        // A vertex this frame already settled at an unchanged
                        // estimate has nothing left to contribute.
                        if alt < dv || !in_settled.contains(&v) {
                            queue.insert(v, alt);
                        }
                    } else if alt >= new_bound && alt < sub_bound && !in_settled.contains(&v) {
                        boundary_batch.push((v, alt));
                    }
                }
            }
            if !boundary_batch.is_empty() {
                queue.batch_prepend(std::mem::take(&mut boundary_batch));
            }

            // A pulled vertex the sub-call ran out of budget for goes back
            // into the queue at its current estimate; it surfaces again once
            // the boundary moves past it.
            for &(v, _) in &pulled {
                if !in_settled.contains(&v) {
                    let dv = state.get(v);
                    if dv < bound {
                        queue.insert(v, dv);
                    }
                }
            }

            if settled.len() > workload_cap {
                trace!(frame_level = level, settled = settled.len(), "workload cap reached");
                break;
            }
        }

        for &w in &reduction.witnessed {
            if in_settled.insert(w) {
                settled.push(w);
            }
        }

        #[cfg(feature = "profiling")]
        crate::profiling::record(crate::profiling::Phase::Bmssp, settled.len() as u64);

        FrameResult { new_bound, settled }
    }
}
