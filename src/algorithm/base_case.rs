use std::collections::HashSet;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::state::DistState;
use crate::data_structures::IndexedMinHeap;
use crate::graph::Graph;

/// Outcome of the level-0 truncated scan.
#[derive(Debug)]
pub struct BaseCaseResult<W> {
    /// Refined bound: `d̂` of the last settled vertex when the scan was cut
    /// off at `k + 1` vertices, the input bound otherwise. Not tight.
    pub new_bound: W,
    /// Settled vertices in settling order, at most `k + 1` of them, all with
    /// estimates below the input bound.
    pub settled: Vec<usize>,
}

/// Bounded Dijkstra from the single complete vertex `root`, stopping once
/// `k + 1` vertices settle or every reachable estimate reaches `bound`.
///
/// Relaxation uses `alt <= d̂[v]` so a tie still rewrites the predecessor
/// (last writer wins); a vertex already settled here is not re-queued, which
/// keeps zero-weight cycles finite.
pub fn run<W, G>(
    graph: &G,
    bound: W,
    root: usize,
    state: &mut DistState<W>,
    k: usize,
) -> BaseCaseResult<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let mut result = BaseCaseResult {
        new_bound: bound,
        settled: Vec::new(),
    };
    if !graph.has_vertex(root) {
        return result;
    }

    if state.get(root) == W::infinity() {
        state.set(root, W::zero());
    }
    let mut heap = IndexedMinHeap::new();
    heap.insert(root, state.get(root));
    let mut settled: HashSet<usize> = HashSet::new();

    while result.settled.len() < k + 1 {
        let Some((u, du)) = heap.pop() else { break };
        if du >= bound {
            break;
        }
        if !settled.insert(u) {
            continue;
        }
        result.settled.push(u);

        for &(v, w) in graph.outgoing_edges(u) {
            if v == u {
                // A self-loop can never lower the estimate.
                continue;
            }
            let alt = du + w;
            if alt <= bound && alt <= state.get(v) {
                if alt < state.get(v) {
                    state.set(v, alt);
                }
                state.set_pred(v, u);
                if !settled.contains(&v) {
                    heap.insert(v, alt);
                }
            }
        }
    }

    if result.settled.len() >= k + 1 {
        if let Some(&last) = result.settled.last() {
            result.new_bound = state.get(last);
        }
    }

    #[cfg(feature = "profiling")]
    crate::profiling::record(crate::profiling::Phase::BaseCase, result.settled.len() as u64);

    result
}
